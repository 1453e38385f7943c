//! Domain Layer
//!
//! Contains the to-do entities, handles, geometry and error types.
//! This layer has NO external dependencies (except serde and thiserror).

mod entity;
mod item;
mod geometry;

pub use entity::{DomainError, DomainResult};
pub use item::{ItemHandle, TodoItem};
pub use geometry::{Point, Rect};
