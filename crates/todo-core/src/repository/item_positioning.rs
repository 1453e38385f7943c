//! Item Positioning Operations
//!
//! Splice-reordering of the store, used by drag-and-drop commits.

use crate::domain::{DomainError, DomainResult, ItemHandle};

use super::item_store::ItemStore;

impl ItemStore {
    /// Move the item at `source_index` to `target_index`.
    ///
    /// `target_index` is counted in the sequence *without* the moving item and
    /// is clamped to its length, so `len - 1` or more means "last".
    pub fn reorder(&mut self, source_index: usize, target_index: usize) -> DomainResult<()> {
        let len = self.entries.len();
        if source_index >= len {
            return Err(DomainError::InvalidIndex { index: source_index, len });
        }
        let entry = self.entries.remove(source_index);
        let target = target_index.min(self.entries.len());
        self.entries.insert(target, entry);
        Ok(())
    }

    /// Move `handle` directly in front of `anchor`, or to the end when
    /// `anchor` is `None` or no longer in the store.
    ///
    /// Returns the `(source_index, target_index)` pair that was applied.
    pub fn move_before(
        &mut self,
        handle: ItemHandle,
        anchor: Option<ItemHandle>,
    ) -> DomainResult<(usize, usize)> {
        let source = self.position(handle)?;
        let rest_len = self.entries.len() - 1;
        let target = anchor
            .filter(|a| *a != handle)
            .and_then(|a| self.index_of(a))
            .map(|i| if i > source { i - 1 } else { i })
            .unwrap_or(rest_len);
        self.reorder(source, target)?;
        Ok((source, target))
    }
}

#[cfg(test)]
mod tests {
    use crate::domain::TodoItem;
    use crate::repository::ItemStore;
    use pretty_assertions::assert_eq;

    fn texts(store: &ItemStore) -> Vec<String> {
        store.snapshot().into_iter().map(|i| i.text).collect()
    }

    fn store_of(items: &[&str]) -> ItemStore {
        ItemStore::from_items(items.iter().map(|t| TodoItem::new(*t)))
    }

    #[test]
    fn test_reorder_first_to_last() {
        let mut store = store_of(&["A", "B", "C"]);
        store.reorder(0, 2).unwrap();
        assert_eq!(texts(&store), ["B", "C", "A"]);
    }

    #[test]
    fn test_reorder_moves_item_to_target_keeping_others() {
        let items = ["A", "B", "C", "D", "E"];
        for i in 0..items.len() {
            for j in 0..items.len() {
                let mut store = store_of(&items);
                store.reorder(i, j).unwrap();
                let after = texts(&store);
                assert_eq!(after[j], items[i], "reorder({i}, {j})");

                let others_before: Vec<_> = items.iter().filter(|t| **t != items[i]).collect();
                let others_after: Vec<_> = after.iter().filter(|t| *t != items[i]).collect();
                assert_eq!(others_before, others_after, "reorder({i}, {j})");
            }
        }
    }

    #[test]
    fn test_reorder_clamps_target_and_rejects_bad_source() {
        let mut store = store_of(&["A", "B", "C"]);
        store.reorder(0, 3).unwrap();
        assert_eq!(texts(&store), ["B", "C", "A"]);
        assert!(store.reorder(3, 0).is_err());
    }

    #[test]
    fn test_move_before_anchor_and_end() {
        let mut store = store_of(&["A", "B", "C", "D"]);
        let a = store.handle_at(0).unwrap();
        let d = store.handle_at(3).unwrap();

        assert_eq!(store.move_before(a, Some(d)).unwrap(), (0, 2));
        assert_eq!(texts(&store), ["B", "C", "A", "D"]);

        assert_eq!(store.move_before(d, Some(store.handle_at(0).unwrap())).unwrap(), (3, 0));
        assert_eq!(texts(&store), ["D", "B", "C", "A"]);

        store.move_before(d, None).unwrap();
        assert_eq!(texts(&store), ["B", "C", "A", "D"]);
    }
}
