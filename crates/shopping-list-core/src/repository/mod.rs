//! Repository Layer
//!
//! Storage abstraction and the item/theme store built on it.

mod error;
mod item_store;
mod memory;
mod traits;


pub use error::StoreError;
pub use item_store::ItemStore;
pub use memory::MemoryStorage;
pub use traits::KeyValueStore;
