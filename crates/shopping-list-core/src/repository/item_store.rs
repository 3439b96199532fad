//! Item Store
//!
//! Persists the label sequence and the theme preference as JSON values.
//! Every read goes to the backend; nothing is cached here.

use crate::config::StoreConfig;
use crate::domain::Theme;

use super::{KeyValueStore, StoreError};

pub struct ItemStore<S: KeyValueStore> {
    backend: S,
    config: StoreConfig,
}

impl<S: KeyValueStore> ItemStore<S> {
    pub fn new(backend: S) -> Self {
        Self::with_config(backend, StoreConfig::default())
    }

    pub fn with_config(backend: S, config: StoreConfig) -> Self {
        Self { backend, config }
    }

    /// Load the stored labels, reporting corrupt data as `StoreError::Parse`
    pub fn try_load_items(&self) -> Result<Vec<String>, StoreError> {
        let key = &self.config.items_key;
        match self.backend.get(key)? {
            None => Ok(Vec::new()),
            Some(raw) => serde_json::from_str(&raw).map_err(|source| StoreError::Parse {
                key: key.clone(),
                source,
            }),
        }
    }

    /// Load the stored labels; unreadable data counts as an empty list
    pub fn load_items(&self) -> Vec<String> {
        match self.try_load_items() {
            Ok(labels) => labels,
            Err(e) => {
                log::warn!("Ignoring stored items: {}", e);
                Vec::new()
            }
        }
    }

    /// Overwrite the stored labels in a single write
    pub fn save_items(&self, labels: &[String]) -> Result<(), StoreError> {
        let raw = serde_json::to_string(labels)?;
        self.backend.set(&self.config.items_key, &raw)?;
        log::debug!("Saved {} items", labels.len());
        Ok(())
    }

    /// Load the theme preference, falling back to the configured default
    pub fn load_theme(&self) -> Theme {
        let key = &self.config.theme_key;
        let raw = match self.backend.get(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return self.config.default_theme,
            Err(e) => {
                log::warn!("Theme unavailable: {}", e);
                return self.config.default_theme;
            }
        };
        serde_json::from_str(&raw).unwrap_or_else(|e| {
            log::warn!("Ignoring stored theme {:?}: {}", raw, e);
            self.config.default_theme
        })
    }

    pub fn save_theme(&self, theme: Theme) -> Result<(), StoreError> {
        let raw = serde_json::to_string(&theme)?;
        self.backend.set(&self.config.theme_key, &raw)
    }
}
