//! Theme Toggle Component

use leptos::prelude::*;
use shopping_list_core::Event;

use crate::context::AppContext;
use crate::store::{use_ui_store, UiStateStoreFields};

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_ui_store();

    let title = move || format!("Switch to {} mode", store.theme().get().toggled().as_str());

    view! {
        <button
            id="theme-toggle"
            class="btn-theme"
            title=title
            on:click=move |_| ctx.dispatch(Event::ToggleTheme)
        >
            {move || if store.theme().get().is_dark() { "☀" } else { "☾" }}
        </button>
    }
}
