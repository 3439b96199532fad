//! Application Context
//!
//! Owns the controller and connects it to the reactive UI.
//! Provided once at startup via the Leptos Context API.

use leptos::prelude::*;
use leptos::task::spawn_local;
use shopping_list_core::{Controller, ControllerError, Effect, Event, Prompt};

use crate::dialog::SweetAlert;
use crate::storage::AppStorage;
use crate::store::{store_apply_view, UiStore};

/// App-wide handles, cheap to copy into event handlers
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Single owner of list state and storage
    controller: StoredValue<Controller<AppStorage>, LocalStorage>,
    /// Projection the components render from
    store: UiStore,
    /// Text entry contents
    pub input: RwSignal<String>,
}

impl AppContext {
    pub fn new(controller: Controller<AppStorage>, store: UiStore) -> Self {
        let input = RwSignal::new(controller.view().input_text);
        Self {
            controller: StoredValue::new_local(controller),
            store,
            input,
        }
    }

    /// Run one event through the controller and act on the outcome
    pub fn dispatch(&self, event: Event) {
        let result = self.controller.try_update_value(|c| c.dispatch(event));
        self.settle(result);
    }

    fn settle(&self, result: Option<Result<Effect, ControllerError>>) {
        self.sync_view();
        match result {
            None => log::error!("Controller already disposed"),
            Some(Err(e)) => log::error!("Event failed: {}", e),
            Some(Ok(Effect::None)) => {}
            Some(Ok(Effect::Notify(dialog))) => SweetAlert.notify(&dialog),
            Some(Ok(Effect::Confirm(dialog))) => {
                let ctx = *self;
                // The controller rejects other events until this resolves
                spawn_local(async move {
                    let confirmed = SweetAlert.confirm(&dialog).await;
                    let result = ctx.controller.try_update_value(|c| c.resolve(confirmed));
                    ctx.settle(result);
                });
            }
        }
    }

    /// Re-project and reset the input after structural changes
    fn sync_view(&self) {
        let Some(view) = self.controller.try_with_value(|c| c.view()) else {
            return;
        };
        let input_text = view.input_text.clone();
        if store_apply_view(&self.store, view) {
            self.input.set(input_text);
        }
    }
}
