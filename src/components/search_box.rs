//! Search Box Component

use leptos::prelude::*;

use crate::context::use_app_context;

/// Live search; filters rows on every keystroke
#[component]
pub fn SearchBox() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <input
            type="search"
            class="search-box"
            placeholder="Search..."
            on:input=move |ev| ctx.search(&event_target_value(&ev))
        />
    }
}
