//! Repository Layer
//!
//! The in-memory item store and its persistence to a key-value slot.

mod traits;
mod memory;
mod item_store;
mod item_positioning;
mod persistence;

#[cfg(test)]
mod tests;

pub use traits::{KeyValueStore, StorageError};
pub use memory::MemoryStore;
pub use item_store::ItemStore;
pub use persistence::{CorruptDataWarning, Loaded, PersistenceAdapter, PersistenceError, DEFAULT_STORAGE_KEY};
