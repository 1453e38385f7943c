//! Drop placement: where the placeholder goes for a pointer position.

use crate::domain::{ItemHandle, Rect};

/// Pick the item the placeholder should be inserted in front of.
///
/// Among `candidates` (visible rows, source and placeholder excluded), this is
/// the row whose vertical midpoint lies below `pointer_y` by the smallest
/// non-negative margin. `None` means the placeholder goes to the end. A
/// pointer exactly on a midpoint lands in front of that row.
pub fn placeholder_anchor<I>(pointer_y: f64, candidates: I) -> Option<ItemHandle>
where
    I: IntoIterator<Item = (ItemHandle, Rect)>,
{
    candidates
        .into_iter()
        .map(|(handle, rect)| (handle, rect.mid_y() - pointer_y))
        .filter(|(_, margin)| *margin >= 0.0)
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(handle, _)| handle)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(mids: &[f64]) -> Vec<(ItemHandle, Rect)> {
        mids.iter()
            .enumerate()
            .map(|(i, mid)| (ItemHandle::new(i as u64), Rect::new(0.0, mid - 5.0, 100.0, 10.0)))
            .collect()
    }

    #[test]
    fn test_first_midpoint_below_pointer_wins() {
        let candidates = rows(&[10.0, 30.0, 50.0]);
        assert_eq!(placeholder_anchor(25.0, candidates.clone()), Some(ItemHandle::new(1)));
        assert_eq!(placeholder_anchor(0.0, candidates.clone()), Some(ItemHandle::new(0)));
        assert_eq!(placeholder_anchor(60.0, candidates), None);
    }

    #[test]
    fn test_pointer_on_midpoint_goes_before_row() {
        assert_eq!(placeholder_anchor(30.0, rows(&[10.0, 30.0, 50.0])), Some(ItemHandle::new(1)));
        assert_eq!(placeholder_anchor(50.0, rows(&[10.0, 30.0, 50.0])), Some(ItemHandle::new(2)));
    }

    #[test]
    fn test_candidate_order_does_not_matter() {
        let mut candidates = rows(&[10.0, 30.0, 50.0]);
        candidates.reverse();
        assert_eq!(placeholder_anchor(25.0, candidates), Some(ItemHandle::new(1)));
    }

    #[test]
    fn test_no_candidates_means_end() {
        assert_eq!(placeholder_anchor(25.0, Vec::new()), None);
    }
}
