//! New Item Form Component
//!
//! Text input with an Add button; Enter submits as well.

use leptos::html;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::components::alert;
use crate::context::use_app_context;

/// Form for appending new to-do items
#[component]
pub fn NewItemForm() -> impl IntoView {
    let ctx = use_app_context();
    let input_ref = NodeRef::<html::Input>::new();
    let (new_text, set_new_text) = signal(String::new());

    // Focus the input once mounted, like the page did on load
    Effect::new(move |_| {
        if let Some(input) = input_ref.get() {
            let _ = input.focus();
        }
    });

    let create_item = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        match ctx.add(&new_text.get_untracked()) {
            Ok(_) => set_new_text.set(String::new()),
            Err(_) => alert("Please enter a to-do item!"),
        }
    };

    view! {
        <form class="new-item-form" on:submit=create_item>
            <div class="new-item-row">
                <input
                    type="text"
                    node_ref=input_ref
                    placeholder="Add new item..."
                    prop:value=move || new_text.get()
                    on:input=move |ev| {
                        if let Some(input) = ev.target().and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok()) {
                            set_new_text.set(input.value());
                        }
                    }
                />
                <button type="submit">"Add"</button>
            </div>
        </form>
    }
}
