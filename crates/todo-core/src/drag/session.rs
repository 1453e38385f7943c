//! Drag session state

use crate::domain::{ItemHandle, Point};

/// One pointer-down-to-pointer-up interaction
#[derive(Debug, Clone, PartialEq)]
pub struct DragSession {
    /// Item picked up
    pub source: ItemHandle,
    /// Pointer position at pointer-down
    pub origin: Point,
    /// Pointer position relative to the source row's top-left corner
    pub grab_offset: Point,
    /// Latest pointer position
    pub pointer: Point,
    /// Placeholder sits in front of this item; `None` = at the end
    pub placeholder_before: Option<ItemHandle>,
    /// Height of the source row, reserved by the placeholder
    pub placeholder_height: f64,
}

impl DragSession {
    /// Where the floating proxy's top-left corner goes
    pub fn proxy_position(&self) -> Point {
        self.pointer - self.grab_offset
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum DragState {
    #[default]
    Idle,
    /// Pointer is down but has not moved past the threshold
    Armed(DragSession),
    /// Threshold crossed; placeholder and proxy are live
    Dragging(DragSession),
}

impl DragState {
    pub fn session(&self) -> Option<&DragSession> {
        match self {
            DragState::Idle => None,
            DragState::Armed(s) | DragState::Dragging(s) => Some(s),
        }
    }
}

/// What the surface should show while dragging
#[derive(Debug, Clone, PartialEq)]
pub struct DragPreview {
    /// The item being dragged; its row stays hidden until the drop
    pub source: ItemHandle,
    /// Render the placeholder in front of this item, or last when `None`
    pub placeholder_before: Option<ItemHandle>,
    /// Placeholder position in the list without the source
    pub placeholder_index: usize,
    pub placeholder_height: f64,
    /// Top-left corner of the floating proxy
    pub proxy: Point,
}
