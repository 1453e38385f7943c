//! To-Do Frontend Entry Point

mod app;
mod components;
mod context;
mod logger;
mod storage;
mod store;
mod surface;

use app::App;
use leptos::prelude::*;
use todo_core::TodoConfig;

/// Optional JSON overrides in `<script id="todo-config" type="application/json">`
fn page_config() -> TodoConfig {
    let json = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id("todo-config"))
        .and_then(|el| el.text_content());
    match json {
        Some(json) => TodoConfig::from_json(&json).unwrap_or_else(|err| {
            log::warn!("[APP] ignoring invalid todo-config: {}", err);
            TodoConfig::default()
        }),
        None => TodoConfig::default(),
    }
}

fn main() {
    console_error_panic_hook::set_once();
    logger::init();
    let config = page_config();
    mount_to_body(move || view! { <App config=config.clone() /> });
}
