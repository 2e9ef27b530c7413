//! Forward checking: after assigning a variable, prune the domains of its
//! unassigned neighbors and detect an immediate dead end.

use std::collections::HashMap;
use std::fmt::Debug;

use tracing::trace;

use crate::csp::Csp;
use crate::solver::shrinking_log::ShrinkingLog;

/// Prunes the domains of `last_assigned`'s unassigned neighbors against the
/// value just given to `last_assigned`. Returns the index of the first
/// neighbor whose live slice became empty, if any. A root call
/// (`last_assigned = None`) is a no-op.
pub fn forward_check<V: Clone + PartialEq + Debug + 'static>(
    csp: &mut Csp<V>,
    state: &HashMap<usize, V>,
    last_assigned: Option<usize>,
    log: &mut ShrinkingLog,
) -> Option<usize> {
    let Some(l) = last_assigned else {
        return None;
    };
    let value_l = state[&l].clone();

    let neighbors: Vec<usize> = csp.neighbors(l).iter().copied().collect();
    for y in neighbors {
        if state.contains_key(&y) {
            continue;
        }

        let mut index = 0;
        loop {
            if index > csp.domain(y).last_valid_index() {
                break;
            }
            let v_y = csp.domain(y).live_slice()[index].clone();
            if csp.check(l, y, &value_l, &v_y) {
                index += 1;
                continue;
            }

            if csp.domain(y).would_empty_if_removed(index) {
                log.record(y);
                trace!(variable = y, "forward checking emptied domain");
                return Some(y);
            }
            csp.domain_mut(y).remove_live(index);
            log.record(y);
            // the value swapped into `index` hasn't been tested yet; don't advance
        }
    }
    None
}
