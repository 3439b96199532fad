//! Item Filter Component

use leptos::prelude::*;
use shopping_list_core::Event;

use crate::context::AppContext;
use crate::store::{use_ui_store, UiStateStoreFields};

/// Case-insensitive filter, shown only when there are items
#[component]
pub fn ItemFilter() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_ui_store();

    view! {
        <div
            class="filter"
            style:display=move || if store.show_filter().get() { "block" } else { "none" }
        >
            <input
                type="text"
                class="form-input-filter"
                id="filter"
                placeholder="Filter Items"
                on:input=move |ev| ctx.dispatch(Event::FilterInput(event_target_value(&ev)))
            />
        </div>
    }
}
