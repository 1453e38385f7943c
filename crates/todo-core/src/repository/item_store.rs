//! Item Store - Core CRUD Operations
//!
//! Ordered in-memory sequence of to-do records; the single source of truth
//! for order, text and completion state.
//! Position management lives in `item_positioning`.
//!
//! The store has no side effects: callers sequence persistence and
//! re-filtering after each mutation.

use crate::domain::{DomainError, DomainResult, ItemHandle, TodoItem};

#[derive(Debug, Clone)]
pub(super) struct Entry {
    pub(super) handle: ItemHandle,
    pub(super) item: TodoItem,
}

/// In-memory ordered list of to-do items
#[derive(Debug, Clone, Default)]
pub struct ItemStore {
    pub(super) entries: Vec<Entry>,
    next_handle: u64,
}

fn validated_text(text: &str) -> DomainResult<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(DomainError::empty_text());
    }
    Ok(trimmed.to_string())
}

impl ItemStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from a loaded sequence, issuing fresh handles in order.
    ///
    /// Entries that break the non-empty text invariant are skipped.
    pub fn from_items(items: impl IntoIterator<Item = TodoItem>) -> Self {
        let mut store = Self::new();
        for item in items {
            if item.has_valid_text() {
                store.push(item);
            }
        }
        store
    }

    fn push(&mut self, item: TodoItem) -> ItemHandle {
        let handle = ItemHandle::new(self.next_handle);
        self.next_handle += 1;
        self.entries.push(Entry { handle, item });
        handle
    }

    pub(super) fn position(&self, handle: ItemHandle) -> DomainResult<usize> {
        self.entries
            .iter()
            .position(|e| e.handle == handle)
            .ok_or(DomainError::StaleReference(handle))
    }

    fn entry_mut(&mut self, handle: ItemHandle) -> DomainResult<&mut TodoItem> {
        let index = self.position(handle)?;
        Ok(&mut self.entries[index].item)
    }

    /// Append a new item with `completed = false`
    pub fn add(&mut self, text: &str) -> DomainResult<ItemHandle> {
        let text = validated_text(text)?;
        Ok(self.push(TodoItem::new(text)))
    }

    /// Flip the completion flag, returning the new value
    pub fn toggle_completed(&mut self, handle: ItemHandle) -> DomainResult<bool> {
        let item = self.entry_mut(handle)?;
        item.completed = !item.completed;
        Ok(item.completed)
    }

    /// Overwrite the text, keeping position and completion flag
    pub fn edit_text(&mut self, handle: ItemHandle, text: &str) -> DomainResult<()> {
        let text = validated_text(text)?;
        self.entry_mut(handle)?.text = text;
        Ok(())
    }

    /// Remove an item; its handle becomes stale
    pub fn remove(&mut self, handle: ItemHandle) -> DomainResult<TodoItem> {
        let index = self.position(handle)?;
        Ok(self.entries.remove(index).item)
    }

    /// Empty the list unconditionally
    pub fn clear_all(&mut self) {
        self.entries.clear();
    }

    pub fn get(&self, handle: ItemHandle) -> Option<&TodoItem> {
        self.entries.iter().find(|e| e.handle == handle).map(|e| &e.item)
    }

    pub fn contains(&self, handle: ItemHandle) -> bool {
        self.get(handle).is_some()
    }

    pub fn index_of(&self, handle: ItemHandle) -> Option<usize> {
        self.position(handle).ok()
    }

    pub fn handle_at(&self, index: usize) -> Option<ItemHandle> {
        self.entries.get(index).map(|e| e.handle)
    }

    /// Handles in display order
    pub fn handles(&self) -> Vec<ItemHandle> {
        self.entries.iter().map(|e| e.handle).collect()
    }

    /// `(handle, item)` pairs in display order
    pub fn iter(&self) -> impl Iterator<Item = (ItemHandle, &TodoItem)> {
        self.entries.iter().map(|e| (e.handle, &e.item))
    }

    /// Copy of the ordered sequence, as handed to persistence
    pub fn snapshot(&self) -> Vec<TodoItem> {
        self.entries.iter().map(|e| e.item.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn completed_count(&self) -> usize {
        self.entries.iter().filter(|e| e.item.completed).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_add_appends_trimmed_item() {
        let mut store = ItemStore::new();
        store.add("first").unwrap();
        let handle = store.add("  second  ").unwrap();

        assert_eq!(store.len(), 2);
        assert_eq!(store.index_of(handle), Some(1));
        assert_eq!(store.get(handle), Some(&TodoItem::new("second")));
    }

    #[test]
    fn test_add_rejects_blank_text() {
        let mut store = ItemStore::new();
        store.add("keep").unwrap();
        for blank in ["", "   ", "\t\n"] {
            assert!(matches!(store.add(blank), Err(DomainError::Validation(_))));
        }
        assert_eq!(store.snapshot(), vec![TodoItem::new("keep")]);
    }

    #[test]
    fn test_toggle_and_edit_preserve_position() {
        let mut store = ItemStore::new();
        let a = store.add("a").unwrap();
        let b = store.add("b").unwrap();

        assert_eq!(store.toggle_completed(b), Ok(true));
        store.edit_text(b, " bee ").unwrap();
        assert_eq!(store.edit_text(a, "  "), Err(DomainError::empty_text()));

        assert_eq!(
            store.snapshot(),
            vec![TodoItem::new("a"), TodoItem::new("bee").with_completed(true)]
        );
    }

    #[test]
    fn test_removed_handle_is_stale() {
        let mut store = ItemStore::new();
        let a = store.add("a").unwrap();
        store.remove(a).unwrap();

        assert_eq!(store.toggle_completed(a), Err(DomainError::StaleReference(a)));
        assert_eq!(store.edit_text(a, "x"), Err(DomainError::StaleReference(a)));
        assert_eq!(store.remove(a), Err(DomainError::StaleReference(a)));
    }

    #[test]
    fn test_handles_are_not_reused() {
        let mut store = ItemStore::new();
        let a = store.add("a").unwrap();
        store.clear_all();
        let b = store.add("b").unwrap();
        assert_ne!(a, b);
        assert!(!store.contains(a));
    }

    #[test]
    fn test_from_items_skips_blank_entries() {
        let store = ItemStore::from_items(vec![
            TodoItem::new("x"),
            TodoItem::new("   "),
            TodoItem::new("y").with_completed(true),
        ]);
        assert_eq!(store.len(), 2);
        assert_eq!(store.completed_count(), 1);
    }
}
