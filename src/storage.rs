//! Browser Storage
//!
//! `KeyValueStore` over the tab's `localStorage`.

use shopping_list_core::{KeyValueStore, MemoryStorage, StoreError};
use wasm_bindgen::JsValue;

pub enum AppStorage {
    Local(web_sys::Storage),
    /// `localStorage` is unavailable (disabled, sandboxed frame); nothing survives a reload
    InMemory(MemoryStorage),
}

impl AppStorage {
    /// Use `localStorage` when the browser allows it
    pub fn detect() -> Self {
        match web_sys::window().map(|w| w.local_storage()) {
            Some(Ok(Some(storage))) => AppStorage::Local(storage),
            _ => {
                log::warn!("localStorage unavailable, items will not persist");
                AppStorage::InMemory(MemoryStorage::new())
            }
        }
    }
}

fn backend_error(err: JsValue) -> StoreError {
    StoreError::Backend(err.as_string().unwrap_or_else(|| format!("{:?}", err)))
}

impl KeyValueStore for AppStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        match self {
            AppStorage::Local(storage) => storage.get_item(key).map_err(backend_error),
            AppStorage::InMemory(memory) => memory.get(key),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        match self {
            AppStorage::Local(storage) => storage.set_item(key, value).map_err(backend_error),
            AppStorage::InMemory(memory) => memory.set(key, value),
        }
    }
}
