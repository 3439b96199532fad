//! Shopping List App
//!
//! Main application component: builds the controller from storage once,
//! then lays out the widget.

use leptos::prelude::*;
use reactive_stores::Store;
use shopping_list_core::{Controller, ItemStore, Theme};

use crate::components::{ClearButton, ItemFilter, ItemForm, ItemList, ThemeToggle};
use crate::context::AppContext;
use crate::storage::AppStorage;
use crate::store::{UiState, UiStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    // Theme and items are loaded before any event is handled
    let controller = Controller::start(ItemStore::new(AppStorage::detect()));
    let store = Store::new(UiState::from_view(controller.view()));
    let ctx = AppContext::new(controller, store);

    // Provide context to all children
    provide_context(store);
    provide_context(ctx);

    Effect::new(move |_| apply_theme(store.theme().get()));

    view! {
        <div class="container">
            <header>
                <h1>"Shopping List"</h1>
                <ThemeToggle />
            </header>

            <ItemForm />
            <ItemFilter />
            <ItemList />
            <ClearButton />
        </div>
    }
}

/// Switch the `dark-mode` class on `<body>`
fn apply_theme(theme: Theme) {
    let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) else {
        return;
    };
    if let Err(e) = body.class_list().toggle_with_force("dark-mode", theme.is_dark()) {
        log::warn!("Could not apply {} theme: {:?}", theme.as_str(), e);
    }
}
