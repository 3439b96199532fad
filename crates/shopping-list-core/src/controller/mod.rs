//! Controller
//!
//! Turns user events into list mutations, persists them and tells the UI
//! what to show next.
//!
//! Every structural change runs in the same order: list state is mutated,
//! the store is written, then the revision moves so the view re-syncs.
//! Destructive events do not mutate anything at first; they park a
//! `PendingAction` and return `Effect::Confirm`. The action runs (or is
//! dropped) when the answer arrives through `resolve`.

mod events;
mod prompt;

#[cfg(test)]
mod tests;

use thiserror::Error;

use crate::domain::{DomainError, Theme};
use crate::render::{self, ListView};
use crate::repository::{ItemStore, KeyValueStore, StoreError};
use crate::state::ListState;

pub use events::{Effect, Event, Mode, PendingAction};
pub use prompt::{Dialog, Prompt, Severity};

#[derive(Debug, Error)]
pub enum ControllerError {
    #[error(transparent)]
    Domain(#[from] DomainError),
    #[error(transparent)]
    Store(#[from] StoreError),
    /// Another event arrived while a confirmation is open
    #[error("A confirmation is still pending")]
    ConfirmationPending,
    #[error("No confirmation is pending")]
    NoPendingConfirmation,
}

pub type ControllerResult<T> = Result<T, ControllerError>;

pub struct Controller<S: KeyValueStore> {
    store: ItemStore<S>,
    list: ListState,
    theme: Theme,
    filter: String,
    pending: Option<PendingAction>,
    revision: u64,
}

impl<S: KeyValueStore> Controller<S> {
    /// Rebuild everything from the store. Nothing is written at startup.
    pub fn start(store: ItemStore<S>) -> Self {
        let theme = store.load_theme();
        let list = ListState::from_labels(store.load_items());
        log::info!("Loaded {} items, {} theme", list.len(), theme.as_str());
        Self {
            store,
            list,
            theme,
            filter: String::new(),
            pending: None,
            revision: 0,
        }
    }

    pub fn list(&self) -> &ListState {
        &self.list
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    pub fn pending(&self) -> Option<&PendingAction> {
        self.pending.as_ref()
    }

    pub fn mode(&self) -> Mode {
        match self.list.editing() {
            Some(label) => Mode::Editing(label.to_string()),
            None => Mode::Idle,
        }
    }

    /// Current projection for the UI
    pub fn view(&self) -> ListView {
        render::project(&self.list, self.theme, &self.filter, self.revision)
    }

    /// Route one event to its handler
    pub fn dispatch(&mut self, event: Event) -> ControllerResult<Effect> {
        if self.pending.is_some() && !matches!(event, Event::FilterInput(_)) {
            log::warn!("Rejected {:?} while a confirmation is pending", event);
            return Err(ControllerError::ConfirmationPending);
        }
        log::debug!("Dispatch {:?}", event);

        match event {
            Event::Submit(text) => self.on_submit(&text),
            Event::SelectForEdit(label) => self.on_select_for_edit(&label),
            Event::CancelEdit => self.on_cancel_edit(),
            Event::RequestDelete(label) => self.on_request_delete(label),
            Event::RequestClearAll => self.on_request_clear_all(),
            Event::ToggleTheme => self.on_toggle_theme(),
            Event::FilterInput(query) => self.on_filter_input(query),
        }
    }

    /// Resume the parked action with the user's answer
    pub fn resolve(&mut self, confirmed: bool) -> ControllerResult<Effect> {
        let action = self.pending.take().ok_or(ControllerError::NoPendingConfirmation)?;
        log::debug!("Resolve {:?}: {}", action, confirmed);

        match (action, confirmed) {
            (PendingAction::Delete(label), true) => {
                if let Err(e) = self.list.remove(&label) {
                    log::warn!("Delete skipped: {}", e);
                    return Ok(Effect::None);
                }
                self.persist_items()?;
                Ok(Effect::Notify(Dialog::deleted()))
            }
            (PendingAction::Delete(_), false) => Ok(Effect::None),
            (PendingAction::ClearAll, true) => {
                self.list.clear();
                self.persist_items()?;
                Ok(Effect::Notify(Dialog::cleared()))
            }
            (PendingAction::ClearAll, false) => Ok(Effect::Notify(Dialog::kept())),
        }
    }

    fn on_submit(&mut self, text: &str) -> ControllerResult<Effect> {
        let result = if self.list.editing().is_some() {
            self.list.commit_edit(text)
        } else {
            self.list.add(text)
        };

        match result {
            Ok(()) => {
                self.persist_items()?;
                Ok(Effect::None)
            }
            Err(e) => match Dialog::for_error(&e) {
                Some(dialog) => Ok(Effect::Notify(dialog)),
                None => Err(e.into()),
            },
        }
    }

    fn on_select_for_edit(&mut self, label: &str) -> ControllerResult<Effect> {
        if let Err(e) = self.list.begin_edit(label) {
            log::warn!("Cannot edit: {}", e);
            return Ok(Effect::None);
        }
        // Input switches to the selected label
        self.revision += 1;
        Ok(Effect::None)
    }

    fn on_cancel_edit(&mut self) -> ControllerResult<Effect> {
        if self.list.editing().is_some() {
            self.list.cancel_edit();
            self.revision += 1;
        }
        Ok(Effect::None)
    }

    fn on_request_delete(&mut self, label: String) -> ControllerResult<Effect> {
        if !self.list.exists(&label) {
            log::warn!("Delete requested for unknown item {:?}", label);
            return Ok(Effect::None);
        }
        self.pending = Some(PendingAction::Delete(label));
        Ok(Effect::Confirm(Dialog::confirm_delete()))
    }

    fn on_request_clear_all(&mut self) -> ControllerResult<Effect> {
        self.pending = Some(PendingAction::ClearAll);
        Ok(Effect::Confirm(Dialog::confirm_clear()))
    }

    fn on_toggle_theme(&mut self) -> ControllerResult<Effect> {
        self.theme = self.theme.toggled();
        self.store.save_theme(self.theme)?;
        Ok(Effect::None)
    }

    fn on_filter_input(&mut self, query: String) -> ControllerResult<Effect> {
        self.filter = query;
        Ok(Effect::None)
    }

    fn persist_items(&mut self) -> ControllerResult<()> {
        // The view re-syncs even if the write fails; memory is already changed.
        self.revision += 1;
        self.store.save_items(self.list.labels())?;
        Ok(())
    }
}
