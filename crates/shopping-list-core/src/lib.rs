//! Shopping List Core
//!
//! Layered architecture:
//! - domain: labels, theme preference and domain errors
//! - repository: key-value storage abstraction and the item/theme store
//! - state: in-memory item list with the edit cursor
//! - render: pure projection of list state into a view model
//! - controller: event dispatch, persistence and confirmation handling

pub mod config;
pub mod controller;
pub mod domain;
pub mod render;
pub mod repository;
pub mod state;

pub use config::StoreConfig;
pub use controller::{Controller, ControllerError, Dialog, Effect, Event, Mode, PendingAction, Prompt, Severity};
pub use domain::{DomainError, DomainResult, Theme};
pub use render::{ListView, RowView, SubmitMode};
pub use repository::{ItemStore, KeyValueStore, MemoryStorage, StoreError};
pub use state::{EditCursor, ListState};
