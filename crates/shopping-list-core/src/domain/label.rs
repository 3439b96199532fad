//! Label Rules
//!
//! A label is the item's text and its only identity.

/// True when `text` is empty once surrounding whitespace is ignored.
pub fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

/// Case-insensitive substring match used by the list filter.
/// An empty query matches every label.
pub fn matches_filter(label: &str, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    label.to_lowercase().contains(&query.to_lowercase())
}
