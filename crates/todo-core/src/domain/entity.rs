//! Domain Layer - Errors
//!
//! Errors raised by operations on the in-memory list.
//! None of them are fatal: the caller rejects the operation and carries on.

use thiserror::Error;

use super::item::ItemHandle;

/// Common result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Text was empty after trimming; nothing was changed
    #[error("Invalid input: {0}")]
    Validation(String),
    /// The handle refers to an item that has been removed
    #[error("Stale reference: {0} no longer exists")]
    StaleReference(ItemHandle),
    /// A positional argument was outside the sequence
    #[error("Index {index} out of range for list of {len} items")]
    InvalidIndex { index: usize, len: usize },
}

impl DomainError {
    pub fn empty_text() -> Self {
        DomainError::Validation("to-do text must not be empty".to_string())
    }
}
