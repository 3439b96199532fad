//! UI State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.
//! Mirrors the controller's `ListView`; the text input itself lives in
//! `AppContext` because the user edits it between events.

use leptos::prelude::*;
use reactive_stores::Store;
use shopping_list_core::{ListView, RowView, SubmitMode, Theme};

/// Last projection of the list, field by field
#[derive(Clone, Debug, Default, Store)]
pub struct UiState {
    /// One entry per item, in display order
    pub rows: Vec<RowView>,
    /// Clear All button visible
    pub show_clear: bool,
    /// Filter input visible
    pub show_filter: bool,
    /// Clear All button usable
    pub clear_enabled: bool,
    /// Add or Update caption on the submit button
    pub submit_mode: SubmitMode,
    pub theme: Theme,
    /// Structural change counter from the controller
    pub revision: u64,
}

impl UiState {
    pub fn from_view(view: ListView) -> Self {
        Self {
            rows: view.rows,
            show_clear: view.show_clear,
            show_filter: view.show_filter,
            clear_enabled: view.clear_enabled,
            submit_mode: view.submit_mode,
            theme: view.theme,
            revision: view.revision,
        }
    }
}

/// Type alias for the store
pub type UiStore = Store<UiState>;

/// Get the UI store from context
pub fn use_ui_store() -> UiStore {
    expect_context::<UiStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Write a fresh projection into the store.
/// Returns true when the revision moved, i.e. the input must be re-synced.
pub fn store_apply_view(store: &UiStore, view: ListView) -> bool {
    let moved = store.revision().get_untracked() != view.revision;

    if store.rows().with_untracked(|rows| *rows != view.rows) {
        *store.rows().write() = view.rows;
    }
    *store.show_clear().write() = view.show_clear;
    *store.show_filter().write() = view.show_filter;
    *store.clear_enabled().write() = view.clear_enabled;
    *store.submit_mode().write() = view.submit_mode;
    *store.theme().write() = view.theme;
    *store.revision().write() = view.revision;

    moved
}
