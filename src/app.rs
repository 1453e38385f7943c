//! To-Do App
//!
//! Main application component: wires storage, the render surface and the
//! list controller together, then lays out the page.

use leptos::prelude::*;
use reactive_stores::Store;
use todo_core::{TodoConfig, TodoList};

use crate::components::{ClearAllButton, NewItemForm, SearchBox, TodoListView};
use crate::context::AppContext;
use crate::storage::BrowserStorage;
use crate::store::{store_set_notice, AppState, AppStateStoreFields};
use crate::surface::SignalSurface;

#[component]
pub fn App(#[prop(optional)] config: Option<TodoConfig>) -> impl IntoView {
    let config = config.unwrap_or_default();
    let store = Store::new(AppState::default());
    provide_context(store);

    let list = TodoList::open(BrowserStorage::open(), SignalSurface::new(store), config.clone());
    let ctx = AppContext::new(list, &config);
    provide_context(ctx);

    leptos_dragdrop::bind_global_pointer(
        move |p| ctx.pointer_move(p),
        move || ctx.pointer_up(),
        move || ctx.pointer_cancel(),
    );

    view! {
        <main class="todo-app">
            <h1>"To-Do List"</h1>

            {move || store.notice().get().map(|notice| view! {
                <div class="notice">
                    <span>{notice}</span>
                    <button on:click=move |_| store_set_notice(&store, None)>"×"</button>
                </div>
            })}

            <NewItemForm />
            <SearchBox />
            <TodoListView />

            <p class="item-count">
                {move || format!("{} items, {} done", store.total().get(), store.completed().get())}
            </p>

            <ClearAllButton />
        </main>
    }
}
