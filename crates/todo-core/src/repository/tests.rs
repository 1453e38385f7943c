//! Repository Integration Tests
//!
//! Item store + persistence adapter over an in-memory key-value store.

#[cfg(test)]
mod tests {
    use crate::domain::TodoItem;
    use crate::repository::{ItemStore, MemoryStore, PersistenceAdapter, DEFAULT_STORAGE_KEY};
    use pretty_assertions::assert_eq;

    fn setup() -> PersistenceAdapter<MemoryStore> {
        PersistenceAdapter::new(MemoryStore::new(), DEFAULT_STORAGE_KEY)
    }

    fn roundtrip(items: Vec<TodoItem>) {
        let mut p = setup();
        p.save(&items).expect("save failed");
        let loaded = p.load();
        assert!(loaded.warning.is_none());
        assert_eq!(loaded.items, items);
    }

    #[test]
    fn test_roundtrip_empty_list() {
        roundtrip(Vec::new());
    }

    #[test]
    fn test_roundtrip_text_variety() {
        roundtrip(vec![
            TodoItem::new("Buy milk"),
            TodoItem::new("Café au lait ☕ — «quoted»").with_completed(true),
            TodoItem::new(r#"quotes " and \ backslashes"#),
            TodoItem::new("日本語のタスク"),
            TodoItem::new("emoji 🚀🔥, punctuation!?;:").with_completed(true),
            TodoItem::new("line\nbreak"),
        ]);
    }

    #[test]
    fn test_buy_milk_walk_dog_scenario() {
        let mut store = ItemStore::new();
        let milk = store.add("Buy milk").unwrap();
        store.add("Walk dog").unwrap();
        store.toggle_completed(milk).unwrap();

        let expected = vec![
            TodoItem::new("Buy milk").with_completed(true),
            TodoItem::new("Walk dog"),
        ];
        assert_eq!(store.snapshot(), expected);

        let mut p = setup();
        p.save(&store.snapshot()).unwrap();
        let reloaded = ItemStore::from_items(p.load().items);
        assert_eq!(reloaded.snapshot(), expected);
    }

    #[test]
    fn test_reorder_persists_new_order() {
        let mut store = ItemStore::new();
        for t in ["A", "B", "C"] {
            store.add(t).unwrap();
        }
        store.reorder(0, 2).unwrap();

        let mut p = setup();
        p.save(&store.snapshot()).unwrap();
        let texts: Vec<_> = p.load().items.into_iter().map(|i| i.text).collect();
        assert_eq!(texts, ["B", "C", "A"]);
    }

    #[test]
    fn test_reads_record_written_by_original_page() {
        let record = r#"[{"text":"Old entry","completed":false},{"text":"Done","completed":true}]"#;
        let p = PersistenceAdapter::new(
            MemoryStore::new().with_slot(DEFAULT_STORAGE_KEY, record),
            DEFAULT_STORAGE_KEY,
        );
        assert_eq!(
            p.load().items,
            vec![TodoItem::new("Old entry"), TodoItem::new("Done").with_completed(true)]
        );
    }
}
