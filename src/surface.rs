//! Render Surface
//!
//! Connects the list controller to the page: rows are looked up by their
//! `data-handle` attribute for measuring, and every change is pushed into
//! the reactive store the components render from.

use todo_core::{
    CorruptDataWarning, DragPreview, ItemHandle, LayoutProbe, ListView, PersistenceError, Rect,
    RenderSurface,
};

use crate::store::{store_set_notice, store_set_preview, store_set_view, AppStore};

/// Attribute carrying the item handle on each row element
pub const HANDLE_ATTR: &str = "data-handle";

pub struct SignalSurface {
    store: AppStore,
    dragging: bool,
}

impl SignalSurface {
    pub fn new(store: AppStore) -> Self {
        Self { store, dragging: false }
    }
}

fn row_element(handle: ItemHandle) -> Option<web_sys::Element> {
    let doc = web_sys::window()?.document()?;
    doc.query_selector(&format!("[{}=\"{}\"]", HANDLE_ATTR, handle.as_u64()))
        .ok()
        .flatten()
}

impl LayoutProbe for SignalSurface {
    fn measure(&self, handle: ItemHandle) -> Option<Rect> {
        let rect = row_element(handle)?.get_bounding_client_rect();
        Some(Rect::new(rect.left(), rect.top(), rect.width(), rect.height()))
    }
}

impl RenderSurface for SignalSurface {
    fn items_changed(&mut self, view: &ListView) {
        store_set_view(&self.store, view);
    }

    fn drag_preview_changed(&mut self, preview: Option<&DragPreview>) {
        let width = match (preview, self.dragging) {
            // first preview of a drag: size the proxy like the source row
            (Some(p), false) => Some(self.measure(p.source).map(|r| r.width).unwrap_or_default()),
            _ => None,
        };
        self.dragging = preview.is_some();
        store_set_preview(&self.store, preview.cloned(), width);
    }

    fn persistence_failed(&mut self, err: &PersistenceError) {
        store_set_notice(&self.store, Some(format!("Changes could not be saved: {}", err)));
    }

    fn corrupt_data_discarded(&mut self, warning: &CorruptDataWarning) {
        store_set_notice(&self.store, Some(format!("Saved list was discarded: {}", warning)));
    }
}
