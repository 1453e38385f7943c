//! To-Do Item Entity
//!
//! A single entry of the list. Items carry no identifier of their own:
//! in storage, position is identity. At runtime the store hands out
//! [`ItemHandle`]s so the UI can address an entry across reorders.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque reference to an entry in an [`ItemStore`](crate::repository::ItemStore).
///
/// Stable across reorders and edits, invalidated on removal, never reused
/// by the store that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ItemHandle(u64);

impl ItemHandle {
    pub(crate) fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Raw value, used by the UI as a `data-handle` attribute.
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for ItemHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "item #{}", self.0)
    }
}

/// A to-do record as persisted: `{ "text": ..., "completed": ... }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    /// Item text, never empty after trimming once inside a store
    pub text: String,
    /// Completion status
    pub completed: bool,
}

impl TodoItem {
    /// Create a new, not yet completed item
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            completed: false,
        }
    }

    pub fn with_completed(mut self, completed: bool) -> Self {
        self.completed = completed;
        self
    }

    /// Whether the text satisfies the store invariant
    pub fn has_valid_text(&self) -> bool {
        !self.text.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_creation() {
        let item = TodoItem::new("Buy milk");
        assert_eq!(item.text, "Buy milk");
        assert!(!item.completed);
        assert!(item.has_valid_text());
        assert!(!TodoItem::new(" \t ").has_valid_text());
    }

    #[test]
    fn test_field_order_in_json() {
        let json = serde_json::to_string(&TodoItem::new("a").with_completed(true)).unwrap();
        assert_eq!(json, r#"{"text":"a","completed":true}"#);
    }
}
