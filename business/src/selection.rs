//! Row selection for the guest table's bulk actions.
//!
//! The set only ever holds identifiers of rows that are eligible and visible
//! on the current page; the owning widget calls
//! [`retain_visible`](SelectionState::retain_visible) every render pass with
//! the current page's eligible ids, the same way the page number is
//! re-clamped.

use std::collections::BTreeSet;

/// Ordered set of selected row identifiers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    selected: BTreeSet<u64>,
}

impl SelectionState {
    pub fn is_selected(&self, id: u64) -> bool {
        self.selected.contains(&id)
    }

    pub fn toggle(&mut self, id: u64) {
        if !self.selected.remove(&id) {
            self.selected.insert(id);
        }
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Select every eligible row on the current page. Rows on other pages are
    /// not touched (they were pruned by `retain_visible` when the page
    /// changed).
    pub fn select_all(&mut self, eligible: impl IntoIterator<Item = u64>) {
        self.selected.extend(eligible);
    }

    /// Drives the select-all checkbox: true only when every eligible row on
    /// the current page is selected. An empty eligible set reads as false so
    /// the checkbox never shows checked over nothing.
    pub fn all_selected(&self, eligible: impl IntoIterator<Item = u64>) -> bool {
        let mut any = false;
        for id in eligible {
            if !self.selected.contains(&id) {
                return false;
            }
            any = true;
        }
        any
    }

    /// Drop ids that are no longer eligible/visible.
    pub fn retain_visible(&mut self, eligible: impl IntoIterator<Item = u64>) {
        let keep: BTreeSet<u64> = eligible.into_iter().collect();
        self.selected.retain(|id| keep.contains(id));
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }

    /// Hand the ordered ids to a bulk action and clear the set.
    pub fn take_all(&mut self) -> Vec<u64> {
        let ids: Vec<u64> = self.selected.iter().copied().collect();
        self.selected.clear();
        ids
    }

    pub fn ids(&self) -> impl Iterator<Item = u64> + '_ {
        self.selected.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_adds_and_removes() {
        let mut selection = SelectionState::default();
        selection.toggle(3);
        assert!(selection.is_selected(3));

        selection.toggle(3);
        assert!(!selection.is_selected(3));
        assert!(selection.is_empty());
    }

    #[test]
    fn test_select_all_only_touches_eligible_rows() {
        // Five rows on the page, two of which are ineligible (no email):
        // select-all picks exactly the three eligible ones.
        let eligible = [1u64, 3, 5];
        let mut selection = SelectionState::default();
        selection.select_all(eligible);

        assert_eq!(selection.len(), 3);
        assert!(!selection.is_selected(2));
        assert!(!selection.is_selected(4));

        let ids = selection.take_all();
        assert_eq!(ids, vec![1, 3, 5]);
        assert!(selection.is_empty(), "selection must clear after bulk handoff");
    }

    #[test]
    fn test_all_selected_requires_every_eligible_row() {
        let mut selection = SelectionState::default();
        selection.toggle(1);
        selection.toggle(3);

        assert!(!selection.all_selected([1, 3, 5]));
        selection.toggle(5);
        assert!(selection.all_selected([1, 3, 5]));

        // Extra selected ids do not break the indicator.
        selection.toggle(7);
        assert!(selection.all_selected([1, 3, 5]));
    }

    #[test]
    fn test_all_selected_is_false_with_no_eligible_rows() {
        let selection = SelectionState::default();
        assert!(!selection.all_selected(std::iter::empty()));
    }

    #[test]
    fn test_retain_visible_prunes_stale_ids() {
        let mut selection = SelectionState::default();
        selection.select_all([1, 2, 3, 4]);

        // Page changed; only 2 and 4 are still visible and eligible.
        selection.retain_visible([2, 4]);
        assert_eq!(selection.take_all(), vec![2, 4]);
    }

    #[test]
    fn test_take_all_returns_ordered_ids() {
        let mut selection = SelectionState::default();
        selection.toggle(9);
        selection.toggle(1);
        selection.toggle(5);
        assert_eq!(selection.take_all(), vec![1, 5, 9]);
    }
}
