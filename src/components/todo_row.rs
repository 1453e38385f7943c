//! To-Do Row Component
//!
//! One item of the list. Clicking the text toggles completion; pressing on
//! it and moving starts a drag.

use leptos::prelude::*;
use leptos_dragdrop::{make_on_mousedown, make_on_touchstart};
use todo_core::VisibleItem;

use crate::components::{alert, prompt};
use crate::context::use_app_context;

#[component]
pub fn TodoRow(
    item: VisibleItem,
    /// Source of the current drag: kept in the DOM but out of the layout
    #[prop(into)]
    hidden: Signal<bool>,
) -> impl IntoView {
    let ctx = use_app_context();

    let handle = item.handle;
    let text = item.text.clone();
    let on_mousedown = make_on_mousedown(move |p| ctx.pointer_down(handle, p));
    let on_touchstart = make_on_touchstart(move |p| ctx.pointer_down(handle, p));

    let edit = move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
        if let Some(new_text) = prompt("Edit to-do item:", &text) {
            if ctx.edit(handle, &new_text).is_err() {
                alert("Please enter a to-do item!");
            }
        }
    };

    let completed = item.completed;
    let class = move || {
        let mut class = String::from("todo-row");
        if completed { class.push_str(" completed"); }
        if hidden.get() { class.push_str(" drag-source"); }
        class
    };

    view! {
        <li
            class=class
            data-handle=handle.as_u64().to_string()
            style=move || if hidden.get() { "display: none;" } else { "" }
            on:mousedown=on_mousedown
            on:touchstart=on_touchstart
            on:click=move |_| ctx.click(handle)
        >
            <span class="todo-text">{item.text}</span>
            <button class="edit-btn" on:click=edit>"Edit"</button>
            <button class="delete-btn" on:click=move |ev| {
                ev.stop_propagation();
                ctx.delete(handle);
            }>"Delete"</button>
        </li>
    }
}
