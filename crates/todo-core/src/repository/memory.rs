//! In-memory [`KeyValueStore`] for tests and native embedding.
//!
//! Can be switched into a failing mode to exercise the persistence error paths.

use std::collections::HashMap;

use super::traits::{KeyValueStore, StorageError};

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    slots: HashMap<String, String>,
    /// Simulated capacity in bytes per value; `None` = unlimited
    quota: Option<usize>,
    unavailable: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate a slot, e.g. with a record written by an older session
    pub fn with_slot(mut self, key: &str, value: &str) -> Self {
        self.slots.insert(key.to_string(), value.to_string());
        self
    }

    /// Reject writes longer than `bytes`
    pub fn set_quota(&mut self, bytes: Option<usize>) {
        self.quota = bytes;
    }

    /// Make every operation fail as if the store were disabled
    pub fn set_unavailable(&mut self, unavailable: bool) {
        self.unavailable = unavailable;
    }

    /// Raw slot content, bypassing the failure switches
    pub fn peek(&self, key: &str) -> Option<&str> {
        self.slots.get(key).map(String::as_str)
    }

    fn check_available(&self) -> Result<(), StorageError> {
        if self.unavailable {
            Err(StorageError::Unavailable("memory store switched off".to_string()))
        } else {
            Ok(())
        }
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.check_available()?;
        Ok(self.slots.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.check_available()?;
        if let Some(quota) = self.quota {
            if value.len() > quota {
                return Err(StorageError::Rejected(format!(
                    "{} bytes exceeds quota of {}",
                    value.len(),
                    quota
                )));
            }
        }
        self.slots.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.check_available()?;
        self.slots.remove(key);
        Ok(())
    }
}
