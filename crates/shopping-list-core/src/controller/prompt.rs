//! Prompt Collaborator
//!
//! Dialog descriptions and the trait the UI implements to show them.

use async_trait::async_trait;

use crate::domain::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Warning,
    Success,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Success => "success",
        }
    }
}

/// A prompt to show the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dialog {
    pub title: String,
    pub message: String,
    pub severity: Option<Severity>,
    /// Yes/no question rather than an acknowledgement
    pub choice: bool,
}

impl Dialog {
    fn info(title: &str, message: &str, severity: Option<Severity>) -> Self {
        Self {
            title: title.to_string(),
            message: message.to_string(),
            severity,
            choice: false,
        }
    }

    fn question(message: &str) -> Self {
        Self {
            title: "Are you sure?".to_string(),
            message: message.to_string(),
            severity: Some(Severity::Warning),
            choice: true,
        }
    }

    /// Destructive confirmations are styled as dangerous
    pub fn is_danger(&self) -> bool {
        self.choice && self.severity == Some(Severity::Warning)
    }

    pub fn empty_input() -> Self {
        Self::info("No item to add", "Please, add non-empty item!", Some(Severity::Info))
    }

    pub fn duplicate() -> Self {
        Self::info("This item already exists", "Please, add a different item!", Some(Severity::Info))
    }

    /// Prompt for a validation failure, if the user should see one
    pub fn for_error(error: &DomainError) -> Option<Self> {
        match error {
            DomainError::EmptyInput => Some(Self::empty_input()),
            DomainError::Duplicate(_) => Some(Self::duplicate()),
            _ => None,
        }
    }

    pub fn confirm_delete() -> Self {
        Self::question("Once confirmed, your item will be deleted")
    }

    pub fn confirm_clear() -> Self {
        Self::question("Once confirmed, all your items will be gone")
    }

    pub fn deleted() -> Self {
        Self::info("Item has been deleted", "", Some(Severity::Success))
    }

    pub fn cleared() -> Self {
        Self::info("Poof! Your items have been deleted!", "", Some(Severity::Success))
    }

    pub fn kept() -> Self {
        Self::info("Your items are safe!", "", None)
    }
}

/// Shows dialogs to the user
///
/// `confirm` resolves once the user answers; dismissing counts as "no".
/// Not `Send`: browser prompts live on the UI thread.
#[async_trait(?Send)]
pub trait Prompt {
    async fn confirm(&self, dialog: &Dialog) -> bool;

    fn notify(&self, dialog: &Dialog);
}
