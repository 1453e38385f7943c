//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Written only by
//! the render surface; read by components.

use leptos::prelude::*;
use reactive_stores::Store;
use todo_core::{DragPreview, ListView, VisibleItem};

/// What the page currently shows
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Rows matching the search term, in list order
    pub items: Vec<VisibleItem>,
    /// Number of items, visible or not
    pub total: usize,
    /// Number of completed items
    pub completed: usize,
    /// Placeholder/proxy while a drag is in progress
    pub preview: Option<DragPreview>,
    /// Width of the dragged row, captured when the drag starts
    pub proxy_width: f64,
    /// Last storage problem shown to the user
    pub notice: Option<String>,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace the rendered rows and totals
pub fn store_set_view(store: &AppStore, view: &ListView) {
    store.items().set(view.items.clone());
    store.total().set(view.total);
    store.completed().set(view.completed);
}

/// Update or clear the drag preview
pub fn store_set_preview(store: &AppStore, preview: Option<DragPreview>, proxy_width: Option<f64>) {
    if let Some(width) = proxy_width {
        store.proxy_width().set(width);
    }
    store.preview().set(preview);
}

pub fn store_set_notice(store: &AppStore, notice: Option<String>) {
    store.notice().set(notice);
}
