//! AC-3 arc-consistency propagation, run either globally (root) or
//! incrementally around a newly assigned variable.

use std::collections::{HashMap, HashSet, VecDeque};
use std::fmt::Debug;

use tracing::trace;

use crate::csp::Csp;
use crate::solver::shrinking_log::ShrinkingLog;

/// Re-establishes arc consistency over the work set seeded from
/// `last_assigned` (or, at the root, every constraint arc). Returns `true`
/// if some domain was emptied in the process.
pub fn ac3<V: Clone + PartialEq + Debug + 'static>(
    csp: &mut Csp<V>,
    state: &HashMap<usize, V>,
    last_assigned: Option<usize>,
    log: &mut ShrinkingLog,
) -> bool {
    let mut queue: VecDeque<(usize, usize)> = VecDeque::new();
    let mut queued: HashSet<(usize, usize)> = HashSet::new();

    match last_assigned {
        None => {
            for &key in csp.constraint_keys().collect::<Vec<_>>() {
                if queued.insert(key) {
                    queue.push_back(key);
                }
            }
        }
        Some(l) => {
            for z in csp.neighbors(l).iter().copied() {
                let arc = (z, l);
                if queued.insert(arc) {
                    queue.push_back(arc);
                }
            }
        }
    }

    while let Some((x, y)) = queue.pop_front() {
        queued.remove(&(x, y));

        if let Some(emptied) = revise(csp, state, x, y, log) {
            if emptied {
                trace!(variable = x, "AC-3 emptied domain");
                return true;
            }
            for z in csp.neighbors(x).iter().copied() {
                if z == y {
                    continue;
                }
                let arc = (z, x);
                if queued.insert(arc) {
                    queue.push_back(arc);
                }
            }
        }
    }
    false
}

/// Revises the arc `(x, y)`: removes every live value of `x` with no
/// supporting value in `y`'s live slice. Returns `None` if `x` is already
/// assigned (pruning it is pointless) or nothing changed; otherwise
/// `Some(emptied)`.
fn revise<V: Clone + PartialEq + Debug + 'static>(
    csp: &mut Csp<V>,
    state: &HashMap<usize, V>,
    x: usize,
    y: usize,
    log: &mut ShrinkingLog,
) -> Option<bool> {
    if state.contains_key(&x) {
        return None;
    }
    let y_values: Vec<V> = csp.domain(y).live_slice().to_vec();
    let mut shrunk = false;

    let mut index = 0;
    loop {
        if index > csp.domain(x).last_valid_index() {
            break;
        }
        let v_x = csp.domain(x).live_slice()[index].clone();
        let supported = y_values.iter().any(|v_y| csp.check(x, y, &v_x, v_y));
        if supported {
            index += 1;
            continue;
        }

        if csp.domain(x).would_empty_if_removed(index) {
            log.record(x);
            return Some(true);
        }
        csp.domain_mut(x).remove_live(index);
        log.record(x);
        shrunk = true;
    }

    if shrunk {
        Some(false)
    } else {
        None
    }
}
