//! State Layer
//!
//! In-memory reflection of the stored item list.

mod list_state;

pub use list_state::{EditCursor, ListState};
