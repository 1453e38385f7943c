//! Clear All Button Component
//!
//! Shown only while the list has items; asks before wiping everything.

use leptos::prelude::*;

use crate::components::confirm;
use crate::context::use_app_context;
use crate::store::{use_app_store, AppStateStoreFields};

const CONFIRM_TEXT: &str =
    "Are you sure you want to delete all to-do items? This action cannot be undone.";

#[component]
pub fn ClearAllButton() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    view! {
        <Show when=move || { store.total().get() > 0 }>
            <button
                class="clear-all-btn"
                on:click=move |_| {
                    if confirm(CONFIRM_TEXT) {
                        ctx.clear_all();
                    }
                }
            >
                "Clear All"
            </button>
        </Show>
    }
}
