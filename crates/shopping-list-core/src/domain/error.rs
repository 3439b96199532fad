//! Domain Errors
//!
//! Failures raised by list operations.

use thiserror::Error;

/// Common result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Blank or whitespace-only input on add or edit
    #[error("Empty input: item text must not be blank")]
    EmptyInput,
    /// Add of a label already present
    #[error("Duplicate: \"{0}\" is already in the list")]
    Duplicate(String),
    /// Commit called without an active edit
    #[error("No edit in progress")]
    NoEditInProgress,
    #[error("Not found: \"{0}\"")]
    NotFound(String),
}
