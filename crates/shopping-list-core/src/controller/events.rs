//! Controller Events
//!
//! What the UI sends in and what it gets back.

use super::Dialog;

/// User-generated events
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Form submitted with the input's current text
    Submit(String),
    /// An item row was clicked
    SelectForEdit(String),
    /// Leave edit mode without changing anything
    CancelEdit,
    /// Delete affordance on a row was clicked
    RequestDelete(String),
    RequestClearAll,
    ToggleTheme,
    /// Filter text changed
    FilterInput(String),
}

/// Controller state as seen from outside
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Idle,
    Editing(String),
}

/// Destructive action parked until the user answers the prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingAction {
    Delete(String),
    ClearAll,
}

/// What the UI must do after an event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Show an informational prompt; nothing waits on it
    Notify(Dialog),
    /// Ask the user, then pass the answer to `Controller::resolve`
    Confirm(Dialog),
}
