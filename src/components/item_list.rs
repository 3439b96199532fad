//! Item List Component
//!
//! Renders one row per item. Clicking a row edits it; the × deletes it.

use leptos::prelude::*;
use shopping_list_core::{Event, RowView};

use crate::context::AppContext;
use crate::store::{use_ui_store, UiStateStoreFields};

#[component]
pub fn ItemList() -> impl IntoView {
    let store = use_ui_store();

    let rows = move || store.rows().get().into_iter().enumerate().collect::<Vec<_>>();

    view! {
        <ul id="item-list" class="items">
            <For
                each=rows
                // Rows are immutable snapshots, so any change re-creates the row
                key=|(index, row)| (*index, row.clone())
                children=move |(_, row)| view! { <ItemRow row=row /> }
            />
        </ul>
    }
}

/// A single item row
#[component]
fn ItemRow(row: RowView) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let RowView { label, editing, visible, deletable } = row;
    let select_label = label.clone();
    let delete_label = label.clone();

    view! {
        <li
            class:edit-mode=move || editing
            style:display=if visible { "flex" } else { "none" }
            on:click=move |_| ctx.dispatch(Event::SelectForEdit(select_label.clone()))
        >
            {label}
            // Hidden while an item is being edited
            {deletable.then(move || view! {
                <button
                    class="remove-item btn-link text-red"
                    title="Delete"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        ctx.dispatch(Event::RequestDelete(delete_label.clone()));
                    }
                >
                    "×"
                </button>
            })}
        </li>
    }
}
