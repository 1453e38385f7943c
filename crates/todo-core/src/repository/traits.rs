//! Repository Layer - Storage Trait
//!
//! Defines the abstract interface of the durable key-value store.
//! Implementations can use `localStorage`, an in-memory map, etc.

use thiserror::Error;

/// Errors reported by a [`KeyValueStore`] backend
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    /// The backend cannot be reached at all (disabled, private mode, ...)
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    /// The backend refused the write (quota exceeded, ...)
    #[error("storage write rejected: {0}")]
    Rejected(String),
}

/// Durable string slots addressed by key
///
/// A `set` either stores the whole value or fails; backends must not leave
/// a partially written value behind.
pub trait KeyValueStore {
    /// Read a slot, `Ok(None)` if it was never written
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Overwrite a slot
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete a slot; deleting an absent slot is not an error
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}
