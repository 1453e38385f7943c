//! To-Do Core
//!
//! Headless engine of a drag-reorderable to-do list:
//! - domain: items, handles, geometry and errors
//! - repository: the ordered item store and its key-value persistence
//! - filter: search-term visibility
//! - drag: pointer state machine for drag-and-drop reordering
//! - list: the controller tying them together behind a render surface

pub mod config;
pub mod domain;
pub mod drag;
pub mod filter;
pub mod list;
pub mod repository;

#[cfg(test)]
mod testing;

pub use config::{DragConfig, TodoConfig};
pub use domain::{DomainError, DomainResult, ItemHandle, Point, Rect, TodoItem};
pub use drag::{DragPreview, Gesture, LayoutProbe, Release};
pub use filter::FilterEngine;
pub use list::{ListView, RenderSurface, TodoList, VisibleItem};
pub use repository::{
    CorruptDataWarning, KeyValueStore, MemoryStore, PersistenceError, StorageError,
};
