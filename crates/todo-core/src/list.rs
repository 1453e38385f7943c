//! To-do list controller
//!
//! Owns the item store, persistence, search filter and drag controller of
//! one list, and talks to the rendering side through [`RenderSurface`].
//! Every accepted mutation is followed by a save and a fresh
//! [`ListView`]; rejected ones change nothing and emit nothing.

use log::{debug, error, info, warn};

use crate::config::TodoConfig;
use crate::domain::{DomainResult, ItemHandle, Point};
use crate::drag::{DragController, DragPreview, Gesture, LayoutProbe, Release};
use crate::filter::FilterEngine;
use crate::repository::{
    CorruptDataWarning, ItemStore, KeyValueStore, PersistenceAdapter, PersistenceError,
};

/// A row the surface should show, in display order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisibleItem {
    pub handle: ItemHandle,
    pub text: String,
    pub completed: bool,
}

/// Filtered list plus totals of the whole list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListView {
    pub items: Vec<VisibleItem>,
    /// Number of items, visible or not
    pub total: usize,
    pub completed: usize,
}

/// Rendering side of a [`TodoList`]
pub trait RenderSurface: LayoutProbe {
    /// The visible rows changed (content, order or filter)
    fn items_changed(&mut self, view: &ListView);

    /// Placeholder or proxy moved; `None` once the drag is over
    fn drag_preview_changed(&mut self, preview: Option<&DragPreview>);

    /// A save did not reach storage; the in-memory list is still intact
    fn persistence_failed(&mut self, err: &PersistenceError);

    /// The stored list was unusable at start-up and has been replaced
    fn corrupt_data_discarded(&mut self, _warning: &CorruptDataWarning) {}
}

pub struct TodoList<S, R> {
    store: ItemStore,
    persistence: PersistenceAdapter<S>,
    filter: FilterEngine,
    drag: DragController,
    surface: R,
}

fn rejected<T>(op: &str, result: DomainResult<T>) -> DomainResult<T> {
    if let Err(err) = &result {
        warn!("[LIST] {} rejected: {}", op, err);
    }
    result
}

impl<S: KeyValueStore, R: RenderSurface> TodoList<S, R> {
    /// Load the stored list and render it
    pub fn open(storage: S, mut surface: R, config: TodoConfig) -> Self {
        let persistence = PersistenceAdapter::new(storage, config.storage_key);
        let loaded = persistence.load();
        if let Some(warning) = &loaded.warning {
            surface.corrupt_data_discarded(warning);
        }
        info!("[LIST] opened with {} item(s)", loaded.items.len());

        let mut list = Self {
            store: ItemStore::from_items(loaded.items),
            persistence,
            filter: FilterEngine::new(),
            drag: DragController::new(config.drag),
            surface,
        };
        list.refresh();
        list
    }

    pub fn items(&self) -> &ItemStore {
        &self.store
    }

    pub fn filter(&self) -> &FilterEngine {
        &self.filter
    }

    pub fn drag(&self) -> &DragController {
        &self.drag
    }

    pub fn surface(&self) -> &R {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut R {
        &mut self.surface
    }

    pub fn storage(&self) -> &S {
        self.persistence.storage()
    }

    pub fn storage_mut(&mut self) -> &mut S {
        self.persistence.storage_mut()
    }

    /// Current filtered rows and totals
    pub fn view(&self) -> ListView {
        ListView {
            items: self
                .store
                .iter()
                .filter(|(_, item)| self.filter.is_visible(item))
                .map(|(handle, item)| VisibleItem {
                    handle,
                    text: item.text.clone(),
                    completed: item.completed,
                })
                .collect(),
            total: self.store.len(),
            completed: self.store.completed_count(),
        }
    }

    fn save(&mut self) {
        if let Err(err) = self.persistence.save(&self.store.snapshot()) {
            error!("[LIST] save failed: {}", err);
            self.surface.persistence_failed(&err);
        }
    }

    fn refresh(&mut self) {
        let view = self.view();
        self.surface.items_changed(&view);
        if let Some(preview) = self.drag.preview(&self.store) {
            self.surface.drag_preview_changed(Some(&preview));
        }
    }

    fn sync(&mut self) {
        self.save();
        self.refresh();
    }

    pub fn on_add(&mut self, text: &str) -> DomainResult<ItemHandle> {
        let handle = rejected("add", self.store.add(text))?;
        debug!("[LIST] added {}", handle);
        self.sync();
        Ok(handle)
    }

    /// Flip completion, returning the new state
    pub fn on_toggle(&mut self, handle: ItemHandle) -> DomainResult<bool> {
        let completed = rejected("toggle", self.store.toggle_completed(handle))?;
        self.sync();
        Ok(completed)
    }

    /// A click on a row. Toggles completion unless the click is the tail of
    /// a drag that just ended, in which case `Ok(None)` is returned.
    pub fn on_item_click(&mut self, handle: ItemHandle) -> DomainResult<Option<bool>> {
        if self.drag.take_click_guard() {
            debug!("[LIST] click on {} swallowed after drag", handle);
            return Ok(None);
        }
        self.on_toggle(handle).map(Some)
    }

    pub fn on_edit(&mut self, handle: ItemHandle, text: &str) -> DomainResult<()> {
        rejected("edit", self.store.edit_text(handle, text))?;
        self.sync();
        Ok(())
    }

    pub fn on_delete(&mut self, handle: ItemHandle) -> DomainResult<()> {
        rejected("delete", self.store.remove(handle))?;
        debug!("[LIST] deleted {}", handle);
        self.sync();
        Ok(())
    }

    /// Empty the list and its stored record. Confirmation is the caller's job.
    pub fn on_clear_all(&mut self) {
        self.store.clear_all();
        if let Err(err) = self.persistence.clear() {
            error!("[LIST] clearing storage failed: {}", err);
            self.surface.persistence_failed(&err);
        }
        info!("[LIST] cleared");
        self.refresh();
    }

    pub fn on_search_term_change(&mut self, term: &str) {
        self.filter.set_term(term);
        self.refresh();
    }

    pub fn on_pointer_down(&mut self, handle: ItemHandle, point: Point) -> DomainResult<()> {
        rejected(
            "pointer down",
            self.drag.pointer_down(&self.store, &self.surface, handle, point),
        )?;
        Ok(())
    }

    pub fn on_pointer_move(&mut self, point: Point) -> Gesture {
        let gesture = self
            .drag
            .pointer_move(&self.store, &self.filter, &self.surface, point);
        if let Some(preview) = self.drag.preview(&self.store) {
            self.surface.drag_preview_changed(Some(&preview));
        }
        gesture
    }

    pub fn on_pointer_up(&mut self) -> Release {
        self.finish_drag()
    }

    /// Treated as a drop at the current placeholder position
    pub fn on_pointer_cancel(&mut self) -> Release {
        debug!("[DND] pointer cancelled");
        self.finish_drag()
    }

    fn finish_drag(&mut self) -> Release {
        let release = self.drag.release(&mut self.store);
        match release {
            Release::NoSession | Release::Tap => {}
            Release::Dropped { .. } => {
                self.surface.drag_preview_changed(None);
                self.sync();
            }
            Release::Abandoned => {
                self.surface.drag_preview_changed(None);
                self.refresh();
            }
        }
        release
    }

    /// Stop swallowing the trailing click of the last drag
    pub fn release_click_guard(&mut self) {
        self.drag.release_click_guard();
    }
}
