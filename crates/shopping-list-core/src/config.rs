//! Store Configuration
//!
//! Storage keys and the theme used before any preference is saved.

use serde::{Deserialize, Serialize};

use crate::domain::Theme;

pub const DEFAULT_ITEMS_KEY: &str = "items";
pub const DEFAULT_THEME_KEY: &str = "theme";

/// Where the store keeps its values
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Key holding the JSON array of labels
    pub items_key: String,
    /// Key holding the JSON theme string
    pub theme_key: String,
    /// Theme reported when nothing (or garbage) is stored
    pub default_theme: Theme,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            items_key: DEFAULT_ITEMS_KEY.to_string(),
            theme_key: DEFAULT_THEME_KEY.to_string(),
            default_theme: Theme::Light,
        }
    }
}
