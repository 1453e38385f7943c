//! Search filter: which items are visible for the current search term.
//!
//! Visibility never changes order or content.

use crate::domain::TodoItem;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterEngine {
    /// Trimmed, lowercased term; empty matches everything
    term: String,
}

impl FilterEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_term(&mut self, term: &str) {
        self.term = term.trim().to_lowercase();
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn is_active(&self) -> bool {
        !self.term.is_empty()
    }

    /// Case-insensitive substring match of the term in the item text
    pub fn is_visible(&self, item: &TodoItem) -> bool {
        self.term.is_empty() || item.text.to_lowercase().contains(&self.term)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_term_matches_everything() {
        let filter = FilterEngine::new();
        assert!(!filter.is_active());
        assert!(filter.is_visible(&TodoItem::new("anything")));
    }

    #[test]
    fn test_case_insensitive_substring() {
        let mut filter = FilterEngine::new();
        filter.set_term("  MiLK ");
        assert_eq!(filter.term(), "milk");
        assert!(filter.is_visible(&TodoItem::new("Buy Milk today")));
        assert!(!filter.is_visible(&TodoItem::new("Walk dog")));

        filter.set_term("ÉCOLE");
        assert!(filter.is_visible(&TodoItem::new("Aller à l'école")));
    }

    #[test]
    fn test_clearing_term_shows_all_again() {
        let mut filter = FilterEngine::new();
        filter.set_term("zzz");
        assert!(!filter.is_visible(&TodoItem::new("Walk dog")));
        filter.set_term("");
        assert!(filter.is_visible(&TodoItem::new("Walk dog")));
    }
}
