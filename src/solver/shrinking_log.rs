//! Per-node record of how many values were removed from each variable's
//! live slice, so a dead end can be rolled back in O(k) where k is the
//! number of distinct variables pruned — not the number of values pruned.

use std::collections::HashMap;
use std::fmt::Debug;

use crate::csp::Csp;

#[derive(Debug, Default)]
pub struct ShrinkingLog {
    counts: HashMap<usize, u32>,
}

impl ShrinkingLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records that one more value was removed from `var`'s domain.
    pub fn record(&mut self, var: usize) {
        *self.counts.entry(var).or_insert(0) += 1;
    }

    /// Restores every pruned domain's cursor by exactly the amount this log
    /// recorded for it, then clears the log.
    pub fn rollback<V: Clone + PartialEq + Debug + 'static>(&mut self, csp: &mut Csp<V>) {
        for (&var, &count) in &self.counts {
            csp.domain_mut(var).restore(count as usize);
        }
        self.counts.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}
