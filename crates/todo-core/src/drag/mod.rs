//! Drag-and-drop reordering
//!
//! A pointer-driven state machine (`Idle → Armed → Dragging → Idle`) that
//! previews the drop position on every move and commits a single reorder
//! on release. It never touches a rendering surface directly: geometry is
//! read through [`LayoutProbe`] and results are returned as values.

mod session;
mod placement;
mod controller;

pub use session::{DragPreview, DragSession, DragState};
pub use placement::placeholder_anchor;
pub use controller::{DragController, Gesture, Release};

use crate::domain::{ItemHandle, Rect};

/// Read access to the live layout of rendered rows
pub trait LayoutProbe {
    /// Current box of the row showing `handle`, `None` if it is not rendered
    fn measure(&self, handle: ItemHandle) -> Option<Rect>;
}
