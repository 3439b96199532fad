//! Domain Layer
//!
//! Item labels, the theme preference and domain errors.
//! No storage or UI concerns live here.

mod error;
mod label;
mod theme;

pub use error::{DomainError, DomainResult};
pub use label::{is_blank, matches_filter};
pub use theme::Theme;
