//! Clear Button Component

use leptos::prelude::*;
use shopping_list_core::Event;

use crate::context::AppContext;
use crate::store::{use_ui_store, UiStateStoreFields};

/// Removes every item after confirmation; disabled while editing
#[component]
pub fn ClearButton() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_ui_store();

    view! {
        <button
            id="clear"
            class="btn-clear"
            style:display=move || if store.show_clear().get() { "block" } else { "none" }
            disabled=move || !store.clear_enabled().get()
            on:click=move |_| ctx.dispatch(Event::RequestClearAll)
        >
            "Clear All"
        </button>
    }
}
