//! Application Context
//!
//! Shared list controller provided via Leptos Context API. All UI events
//! enter the core through here.

use std::cell::RefCell;

use leptos::prelude::*;
use leptos_dragdrop::{schedule_guard_release, MoveResponse, PointerSample};
use todo_core::{DomainResult, Gesture, ItemHandle, Point, Release, TodoConfig, TodoList};

use crate::storage::BrowserStorage;
use crate::surface::SignalSurface;

pub type List = TodoList<BrowserStorage, SignalSurface>;

/// App-wide handle to the list controller
#[derive(Clone, Copy)]
pub struct AppContext {
    list: StoredValue<RefCell<List>, LocalStorage>,
    click_guard_ms: u32,
}

fn point(sample: PointerSample) -> Point {
    Point::new(sample.x, sample.y)
}

impl AppContext {
    pub fn new(list: List, config: &TodoConfig) -> Self {
        Self {
            list: StoredValue::new_local(RefCell::new(list)),
            click_guard_ms: config.drag.click_guard_ms,
        }
    }

    fn with_list<T>(&self, f: impl FnOnce(&mut List) -> T) -> T {
        self.list.with_value(|cell| f(&mut cell.borrow_mut()))
    }

    pub fn add(&self, text: &str) -> DomainResult<ItemHandle> {
        self.with_list(|l| l.on_add(text))
    }

    pub fn click(&self, handle: ItemHandle) {
        let _ = self.with_list(|l| l.on_item_click(handle));
    }

    pub fn edit(&self, handle: ItemHandle, text: &str) -> DomainResult<()> {
        self.with_list(|l| l.on_edit(handle, text))
    }

    pub fn delete(&self, handle: ItemHandle) {
        let _ = self.with_list(|l| l.on_delete(handle));
    }

    pub fn clear_all(&self) {
        self.with_list(|l| l.on_clear_all());
    }

    pub fn search(&self, term: &str) {
        self.with_list(|l| l.on_search_term_change(term));
    }

    pub fn pointer_down(&self, handle: ItemHandle, sample: PointerSample) {
        let _ = self.with_list(|l| l.on_pointer_down(handle, point(sample)));
    }

    pub fn pointer_move(&self, sample: PointerSample) -> MoveResponse {
        match self.with_list(|l| l.on_pointer_move(point(sample))) {
            Gesture::Captured => MoveResponse::Capture,
            Gesture::Passthrough => MoveResponse::Ignore,
        }
    }

    pub fn pointer_up(&self) {
        let release = self.with_list(|l| l.on_pointer_up());
        self.after_release(release);
    }

    pub fn pointer_cancel(&self) {
        let release = self.with_list(|l| l.on_pointer_cancel());
        self.after_release(release);
    }

    fn after_release(&self, release: Release) {
        if matches!(release, Release::Dropped { .. } | Release::Abandoned) {
            let ctx = *self;
            schedule_guard_release(self.click_guard_ms, move || {
                ctx.with_list(|l| l.release_click_guard());
            });
        }
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
