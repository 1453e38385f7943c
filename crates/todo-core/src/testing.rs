//! Test doubles: a deterministic stacked layout and a recording surface.

use std::collections::HashMap;

use crate::domain::{ItemHandle, Rect};
use crate::drag::{DragPreview, LayoutProbe};
use crate::list::{ListView, RenderSurface};
use crate::repository::{CorruptDataWarning, PersistenceError};

pub const ROW_HEIGHT: f64 = 20.0;

/// Rows stacked from `y = 0`, each [`ROW_HEIGHT`] tall. While dragging the
/// source row is hidden and the placeholder takes its height in front of
/// its anchor, like the real list does.
#[derive(Debug, Default)]
pub struct StackedLayout {
    rects: HashMap<ItemHandle, Rect>,
}

impl StackedLayout {
    pub fn update(&mut self, visible: &[ItemHandle], preview: Option<&DragPreview>) {
        self.rects.clear();
        let mut top = 0.0;
        for handle in visible {
            if let Some(p) = preview {
                if *handle == p.source {
                    continue;
                }
                if p.placeholder_before == Some(*handle) {
                    top += p.placeholder_height;
                }
            }
            self.rects.insert(*handle, Rect::new(0.0, top, 200.0, ROW_HEIGHT));
            top += ROW_HEIGHT;
        }
    }
}

impl LayoutProbe for StackedLayout {
    fn measure(&self, handle: ItemHandle) -> Option<Rect> {
        self.rects.get(&handle).copied()
    }
}

/// Surface that records every call and lays rows out with [`StackedLayout`]
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub views: Vec<ListView>,
    pub previews: Vec<Option<DragPreview>>,
    pub persistence_failures: Vec<String>,
    pub corrupt_warnings: Vec<String>,
    visible: Vec<ItemHandle>,
    preview: Option<DragPreview>,
    layout: StackedLayout,
}

impl RecordingSurface {
    pub fn last_view(&self) -> &ListView {
        self.views.last().expect("no items_changed call recorded")
    }

    pub fn visible_texts(&self) -> Vec<String> {
        self.last_view().items.iter().map(|i| i.text.clone()).collect()
    }

    fn relayout(&mut self) {
        self.layout.update(&self.visible, self.preview.as_ref());
    }
}

impl LayoutProbe for RecordingSurface {
    fn measure(&self, handle: ItemHandle) -> Option<Rect> {
        self.layout.measure(handle)
    }
}

impl RenderSurface for RecordingSurface {
    fn items_changed(&mut self, view: &ListView) {
        self.visible = view.items.iter().map(|i| i.handle).collect();
        self.views.push(view.clone());
        self.relayout();
    }

    fn drag_preview_changed(&mut self, preview: Option<&DragPreview>) {
        self.preview = preview.cloned();
        self.previews.push(preview.cloned());
        self.relayout();
    }

    fn persistence_failed(&mut self, err: &PersistenceError) {
        self.persistence_failures.push(err.to_string());
    }

    fn corrupt_data_discarded(&mut self, warning: &CorruptDataWarning) {
        self.corrupt_warnings.push(warning.to_string());
    }
}
