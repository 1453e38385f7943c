//! Persistence Adapter
//!
//! Serializes the whole list into one JSON array stored under a single key.
//! Writes are all-or-nothing: each save rewrites the full record from the
//! current in-memory state, so a failed save is repaired by the next one.

use log::{debug, warn};
use thiserror::Error;

use crate::domain::TodoItem;

use super::traits::{KeyValueStore, StorageError};

/// Slot name used by the original page
pub const DEFAULT_STORAGE_KEY: &str = "todoListItems";

/// A save (or clear) did not reach durable storage
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    #[error("failed to write to-do list: {0}")]
    WriteFailed(String),
    #[error("failed to serialize to-do list: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl From<StorageError> for PersistenceError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::Unavailable(msg) => PersistenceError::Unavailable(msg),
            StorageError::Rejected(msg) => PersistenceError::WriteFailed(msg),
        }
    }
}

/// The stored record could not be used as-is; loading fell back
#[derive(Debug, Error)]
pub enum CorruptDataWarning {
    #[error("stored to-do list could not be read: {0}")]
    Unreadable(String),
    #[error("stored to-do list is malformed: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("dropped {dropped} stored to-do item(s) with empty text")]
    InvalidEntries { dropped: usize },
}

/// Result of [`PersistenceAdapter::load`]
#[derive(Debug, Default)]
pub struct Loaded {
    pub items: Vec<TodoItem>,
    pub warning: Option<CorruptDataWarning>,
}

impl Loaded {
    fn fallback(warning: CorruptDataWarning) -> Self {
        warn!("[STORE] {}; starting with an empty list", warning);
        Self {
            items: Vec::new(),
            warning: Some(warning),
        }
    }
}

/// Reads and writes the list record in a [`KeyValueStore`]
#[derive(Debug)]
pub struct PersistenceAdapter<S> {
    storage: S,
    key: String,
}

impl<S: KeyValueStore> PersistenceAdapter<S> {
    pub fn new(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn storage_mut(&mut self) -> &mut S {
        &mut self.storage
    }

    /// Overwrite the record with `items`
    pub fn save(&mut self, items: &[TodoItem]) -> Result<(), PersistenceError> {
        let record = serde_json::to_string(items)?;
        self.storage.set(&self.key, &record)?;
        debug!("[STORE] saved {} item(s) under '{}'", items.len(), self.key);
        Ok(())
    }

    /// Read the record. Never fails: problems degrade to an empty list plus
    /// a warning.
    pub fn load(&self) -> Loaded {
        let record = match self.storage.get(&self.key) {
            Ok(Some(record)) => record,
            Ok(None) => return Loaded::default(),
            Err(err) => return Loaded::fallback(CorruptDataWarning::Unreadable(err.to_string())),
        };

        let parsed: Vec<TodoItem> = match serde_json::from_str(&record) {
            Ok(items) => items,
            Err(err) => return Loaded::fallback(CorruptDataWarning::Malformed(err)),
        };

        let total = parsed.len();
        let items: Vec<TodoItem> = parsed.into_iter().filter(TodoItem::has_valid_text).collect();
        let dropped = total - items.len();
        let warning = if dropped > 0 {
            warn!("[STORE] dropped {} stored item(s) with empty text", dropped);
            Some(CorruptDataWarning::InvalidEntries { dropped })
        } else {
            None
        };
        debug!("[STORE] loaded {} item(s) from '{}'", items.len(), self.key);
        Loaded { items, warning }
    }

    /// Delete the record
    pub fn clear(&mut self) -> Result<(), PersistenceError> {
        self.storage.remove(&self.key)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MemoryStore;
    use pretty_assertions::assert_eq;

    fn adapter(storage: MemoryStore) -> PersistenceAdapter<MemoryStore> {
        PersistenceAdapter::new(storage, DEFAULT_STORAGE_KEY)
    }

    #[test]
    fn test_record_format() {
        let mut p = adapter(MemoryStore::new());
        p.save(&[TodoItem::new("Buy milk").with_completed(true)]).unwrap();
        assert_eq!(
            p.storage().peek(DEFAULT_STORAGE_KEY),
            Some(r#"[{"text":"Buy milk","completed":true}]"#)
        );
    }

    #[test]
    fn test_absent_slot_loads_empty_without_warning() {
        let loaded = adapter(MemoryStore::new()).load();
        assert!(loaded.items.is_empty());
        assert!(loaded.warning.is_none());
    }

    #[test]
    fn test_malformed_record_falls_back_to_empty() {
        for record in ["{not json", r#"{"text":"a"}"#, r#"[{"text":1,"completed":false}]"#] {
            let loaded = adapter(MemoryStore::new().with_slot(DEFAULT_STORAGE_KEY, record)).load();
            assert!(loaded.items.is_empty(), "{record}");
            assert!(matches!(loaded.warning, Some(CorruptDataWarning::Malformed(_))), "{record}");
        }
    }

    #[test]
    fn test_blank_entries_are_dropped_with_warning() {
        let record = r#"[{"text":"a","completed":false},{"text":"  ","completed":true}]"#;
        let loaded = adapter(MemoryStore::new().with_slot(DEFAULT_STORAGE_KEY, record)).load();
        assert_eq!(loaded.items, vec![TodoItem::new("a")]);
        assert!(matches!(
            loaded.warning,
            Some(CorruptDataWarning::InvalidEntries { dropped: 1 })
        ));
    }

    #[test]
    fn test_unreadable_store_falls_back_to_empty() {
        let mut storage = MemoryStore::new().with_slot(DEFAULT_STORAGE_KEY, "[]");
        storage.set_unavailable(true);
        let loaded = adapter(storage).load();
        assert!(loaded.items.is_empty());
        assert!(matches!(loaded.warning, Some(CorruptDataWarning::Unreadable(_))));
    }

    #[test]
    fn test_failed_save_keeps_previous_record() {
        let mut p = adapter(MemoryStore::new());
        p.save(&[TodoItem::new("a")]).unwrap();
        p.storage_mut().set_quota(Some(10));

        let err = p.save(&[TodoItem::new("a"), TodoItem::new("b")]).unwrap_err();
        assert!(matches!(err, PersistenceError::WriteFailed(_)));
        assert_eq!(p.load().items, vec![TodoItem::new("a")]);
    }

    #[test]
    fn test_clear_removes_record() {
        let mut p = adapter(MemoryStore::new());
        p.save(&[TodoItem::new("a")]).unwrap();
        p.clear().unwrap();
        assert_eq!(p.storage().peek(DEFAULT_STORAGE_KEY), None);
    }
}
