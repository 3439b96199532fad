//! Renderer
//!
//! Pure projection of list state into what the UI should show.
//! Holds no state of its own; the UI re-projects after every event.

use crate::domain::{matches_filter, Theme};
use crate::state::ListState;

/// What the submit control does when pressed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitMode {
    #[default]
    Add,
    Update,
}

impl SubmitMode {
    /// Button caption
    pub fn label(self) -> &'static str {
        match self {
            SubmitMode::Add => "Add Item",
            SubmitMode::Update => "Update Item",
        }
    }
}

/// One visible list entry
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RowView {
    pub label: String,
    /// Row is the current edit target
    pub editing: bool,
    /// Row passes the filter
    pub visible: bool,
    /// Delete affordance is offered (never while editing)
    pub deletable: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ListView {
    pub rows: Vec<RowView>,
    pub show_clear: bool,
    pub show_filter: bool,
    /// Clear control is usable (disabled while editing)
    pub clear_enabled: bool,
    pub submit_mode: SubmitMode,
    /// Text the input should hold after the last structural change
    pub input_text: String,
    pub theme: Theme,
    /// Bumped on every structural change; the UI resets its input when it moves
    pub revision: u64,
}

/// Build the view for `list` under `filter`
pub fn project(list: &ListState, theme: Theme, filter: &str, revision: u64) -> ListView {
    let editing = list.cursor().map(|cursor| cursor.index());
    let rows = list
        .labels()
        .iter()
        .enumerate()
        .map(|(index, label)| RowView {
            label: label.clone(),
            editing: editing == Some(index),
            visible: matches_filter(label, filter),
            deletable: editing.is_none(),
        })
        .collect();

    let has_items = !list.is_empty();
    ListView {
        rows,
        show_clear: has_items,
        show_filter: has_items,
        clear_enabled: editing.is_none(),
        submit_mode: if editing.is_some() { SubmitMode::Update } else { SubmitMode::Add },
        input_text: list.editing().unwrap_or_default().to_string(),
        theme,
        revision,
    }
}
