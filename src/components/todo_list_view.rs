//! To-Do List View Component
//!
//! Renders the visible rows. While a drag is in progress the source row is
//! hidden, a placeholder marks the drop position and a floating proxy
//! follows the pointer.

use leptos::prelude::*;
use leptos_dragdrop::{DragProxy, DropPlaceholder};
use todo_core::{DragPreview, ItemHandle, VisibleItem};

use crate::components::TodoRow;
use crate::store::{use_app_store, AppStateStoreFields};

#[derive(Clone, PartialEq)]
enum Row {
    Item(VisibleItem),
    Placeholder(f64),
}

type RowKey = (Option<ItemHandle>, String, bool);

/// Interleave the placeholder with the visible items
fn layout_rows(items: Vec<VisibleItem>, preview: Option<&DragPreview>) -> Vec<Row> {
    let mut rows = Vec::with_capacity(items.len() + 1);
    let mut placed = false;
    for item in items {
        if let Some(p) = preview {
            if p.placeholder_before == Some(item.handle) {
                rows.push(Row::Placeholder(p.placeholder_height));
                placed = true;
            }
        }
        rows.push(Row::Item(item));
    }
    if let Some(p) = preview {
        if !placed {
            rows.push(Row::Placeholder(p.placeholder_height));
        }
    }
    rows
}

/// Drag state stays out of the key so a row keeps its element while dragged
fn row_key(row: &Row) -> RowKey {
    match row {
        Row::Item(item) => (Some(item.handle), item.text.clone(), item.completed),
        Row::Placeholder(_) => (None, String::new(), false),
    }
}

#[component]
pub fn TodoListView() -> impl IntoView {
    let store = use_app_store();

    let rows = move || layout_rows(store.items().get(), store.preview().get().as_ref());

    let proxy_position = Signal::derive(move || store.preview().get().map(|p| (p.proxy.x, p.proxy.y)));
    let proxy_width = Signal::derive(move || store.proxy_width().get());
    let proxy_text = move || {
        let preview = store.preview().get()?;
        store
            .items()
            .get()
            .into_iter()
            .find(|i| i.handle == preview.source)
            .map(|i| i.text)
    };

    view! {
        <ul class="todo-list">
            <For
                each=rows
                key=row_key
                children=move |row| match row {
                    Row::Item(item) => {
                        // The source row keeps its element for the whole drag: touch
                        // events stay bound to the node that received touchstart.
                        let handle = item.handle;
                        let hidden = Signal::derive(move || {
                            store.preview().get().is_some_and(|p| p.source == handle)
                        });
                        view! { <TodoRow item=item hidden=hidden /> }.into_any()
                    }
                    Row::Placeholder(height) => view! {
                        <li class="placeholder-row"><DropPlaceholder height=height /></li>
                    }.into_any(),
                }
            />
        </ul>
        <DragProxy position=proxy_position width=proxy_width>
            <div class="todo-row proxy">{proxy_text}</div>
        </DragProxy>
    }
}
