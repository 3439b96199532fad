//! Repository Layer - Core Traits
//!
//! The storage seam. Implementations can use the browser's
//! `localStorage`, an in-memory map, etc.

use super::StoreError;

/// String key-value backend with whole-value overwrites
///
/// Methods take `&self`: backends such as `localStorage` are shared
/// handles with interior mutability.
pub trait KeyValueStore {
    /// Read the raw value stored under `key`
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Overwrite the value stored under `key`
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}
