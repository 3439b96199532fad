//! Item Form Component
//!
//! Text entry plus the Add/Update submit button.

use leptos::prelude::*;
use shopping_list_core::{Event, SubmitMode};

use crate::context::AppContext;
use crate::store::{use_ui_store, UiStateStoreFields};

/// Form for adding items and updating the one in edit mode
#[component]
pub fn ItemForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_ui_store();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        ctx.dispatch(Event::Submit(ctx.input.get_untracked()));
    };
    let is_update = move || store.submit_mode().get() == SubmitMode::Update;

    view! {
        <form id="item-form" on:submit=on_submit>
            <div class="form-control">
                <input
                    type="text"
                    class="form-input"
                    id="item-input"
                    placeholder="Enter Item"
                    prop:value=move || ctx.input.get()
                    on:input=move |ev| ctx.input.set(event_target_value(&ev))
                    on:keydown=move |ev: web_sys::KeyboardEvent| {
                        if ev.key() == "Escape" {
                            ctx.dispatch(Event::CancelEdit);
                        }
                    }
                />
            </div>
            <div class="form-control">
                <button type="submit" class="btn" class:btn-update=is_update>
                    {move || store.submit_mode().get().label()}
                </button>
            </div>
        </form>
    }
}
