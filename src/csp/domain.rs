//! A variable's domain, represented as a partitioned array.
//!
//! Positions `0..=last_valid_index` are the live values; positions beyond
//! are values pruned at some ancestor in the search tree. Removal swaps the
//! removed value into the current last-valid slot and decrements the
//! cursor, so the vector never reallocates or shifts during search.

use std::fmt::Debug;

/// The live values of a single variable, plus the cursor that separates
/// them from values pruned earlier on the current search path.
#[derive(Debug, Clone)]
pub struct Domain<V> {
    values: Vec<V>,
    last_valid_index: usize,
}

impl<V: Clone + PartialEq + Debug> Domain<V> {
    /// Builds a domain from its initial set of values. Panics if `values`
    /// is empty — an empty domain at construction time is a modeling error,
    /// not a search outcome.
    pub fn new(values: Vec<V>) -> Self {
        assert!(!values.is_empty(), "a domain must start with at least one value");
        let last_valid_index = values.len() - 1;
        Domain {
            values,
            last_valid_index,
        }
    }

    /// The values still consistent with all propagations recorded on the
    /// current search path.
    pub fn live_slice(&self) -> &[V] {
        &self.values[..=self.last_valid_index]
    }

    /// Number of live values.
    pub fn live_count(&self) -> usize {
        self.last_valid_index + 1
    }

    pub fn last_valid_index(&self) -> usize {
        self.last_valid_index
    }

    /// Removes the live value at `index` by swapping it with the current
    /// last-valid value and decrementing the cursor.
    ///
    /// # Panics
    ///
    /// Panics if the domain only has one live value left — callers must
    /// check [`Domain::would_empty_if_removed`] first and treat that case as
    /// an emptied domain instead of calling this.
    pub fn remove_live(&mut self, index: usize) {
        debug_assert!(index <= self.last_valid_index);
        assert!(
            self.last_valid_index != 0,
            "remove_live called on a domain with a single live value"
        );
        self.values.swap(index, self.last_valid_index);
        self.last_valid_index -= 1;
    }

    /// `true` if removing the live value at `index` would leave the domain
    /// with zero live values.
    pub fn would_empty_if_removed(&self, index: usize) -> bool {
        debug_assert!(index <= self.last_valid_index);
        self.last_valid_index == 0
    }

    /// Grows the cursor back by `count` positions, undoing `count` prior
    /// calls to [`Domain::remove_live`]. Swap-to-end removal is its own
    /// inverse in aggregate: restoring the cursor uncovers exactly the
    /// values that earlier removals pushed past it, so no position log is
    /// needed beyond the count.
    pub fn restore(&mut self, count: usize) {
        self.last_valid_index += count;
        debug_assert!(self.last_valid_index < self.values.len());
    }

    /// Moves `value` to position 0 and collapses the cursor to 0, so a
    /// just-assigned variable presents a singleton domain to propagators.
    /// Returns the position `value` was swapped in from and the previous
    /// cursor, which the caller must pass back to [`Domain::unpin`] — the
    /// same swap undoes itself, so that position (not the old head value) is
    /// what makes the round trip exact.
    pub fn pin(&mut self, value: &V) -> (usize, usize) {
        let prior_cursor = self.last_valid_index;
        let pos = self.values[..=prior_cursor]
            .iter()
            .position(|v| v == value)
            .unwrap_or(0);
        self.values.swap(0, pos);
        self.last_valid_index = 0;
        (pos, prior_cursor)
    }

    /// Reverses a prior [`Domain::pin`] call using its saved return value.
    pub fn unpin(&mut self, pos: usize, prior_cursor: usize) {
        self.values.swap(0, pos);
        self.last_valid_index = prior_cursor;
    }

    /// The full original multiset of values, ignoring the cursor. Used only
    /// by invariant checks and tests.
    pub fn all_values(&self) -> &[V] {
        &self.values
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn remove_live_swaps_to_end_and_preserves_multiset() {
        let mut d = Domain::new(vec![1, 2, 3, 4]);
        d.remove_live(1); // removes the "2"
        assert_eq!(d.live_count(), 3);
        assert!(!d.live_slice().contains(&2));
        let mut all: Vec<i32> = d.all_values().to_vec();
        all.sort();
        assert_eq!(all, vec![1, 2, 3, 4]);
    }

    #[test]
    fn restore_undoes_removals_by_count() {
        let mut d = Domain::new(vec![1, 2, 3, 4]);
        d.remove_live(0);
        d.remove_live(0);
        assert_eq!(d.live_count(), 2);
        d.restore(2);
        assert_eq!(d.live_count(), 4);
        let mut all: Vec<i32> = d.all_values().to_vec();
        all.sort();
        assert_eq!(all, vec![1, 2, 3, 4]);
    }

    #[test]
    fn pin_then_unpin_restores_head_and_cursor() {
        let mut d = Domain::new(vec![1, 2, 3]);
        let (pos, prior_cursor) = d.pin(&3);
        assert_eq!(d.live_slice(), &[3]);
        d.unpin(pos, prior_cursor);
        assert_eq!(d.live_count(), 3);
        assert_eq!(d.values[0], 1);
    }

    #[test]
    fn pin_then_unpin_preserves_the_full_multiset_when_pinned_value_is_not_the_head() {
        // Pinning 3 (at index 2, not the head) swaps it to position 0; the
        // old head must swap back in on unpin rather than being dropped.
        let mut d = Domain::new(vec![1, 2, 3]);
        let mut original = d.all_values().to_vec();
        original.sort();

        let (pos, prior_cursor) = d.pin(&3);
        assert_eq!(d.live_slice(), &[3]);
        d.unpin(pos, prior_cursor);

        assert_eq!(d.live_count(), 3);
        assert_eq!(d.values[0], 1);
        let mut after: Vec<i32> = d.all_values().to_vec();
        after.sort();
        assert_eq!(after, original);
    }

    #[test]
    fn would_empty_if_removed_detects_last_value() {
        let d = Domain::new(vec![7]);
        assert!(d.would_empty_if_removed(0));
    }

    proptest::proptest! {
        /// Any sequence of removals that stops short of emptying the domain
        /// is exactly undone by restoring the same count: live count and
        /// the full multiset of values both come back unchanged.
        #[test]
        fn restore_is_the_exact_inverse_of_any_removal_sequence(
            size in 2usize..10,
            raw_indices in proptest::collection::vec(0usize..1000, 0..9),
        ) {
            let values: Vec<i32> = (0..size as i32).collect();
            let mut original = values.clone();
            original.sort();

            let mut d = Domain::new(values);
            let removals = raw_indices.len().min(size - 1);
            for raw in &raw_indices[..removals] {
                let index = raw % (d.last_valid_index() + 1);
                d.remove_live(index);
            }
            assert_eq!(d.live_count(), size - removals);

            d.restore(removals);
            assert_eq!(d.live_count(), size);
            let mut after: Vec<i32> = d.all_values().to_vec();
            after.sort();
            assert_eq!(after, original);
        }
    }
}
