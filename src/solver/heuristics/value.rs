//! Strategies for ordering the candidate values tried for a chosen variable.

use std::cell::RefCell;
use std::fmt::Debug;

use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::csp::Csp;

/// Returns the live values of `var`, in the order the engine should try
/// them.
pub trait ValueHeuristic<V: Clone + PartialEq + Debug + 'static>: Debug {
    fn order(&self, csp: &Csp<V>, var: usize) -> Vec<V>;
}

/// Tries values in the order they currently sit in the live slice. Cheap,
/// deterministic, and exactly what a caller sees with no heuristic at all.
#[derive(Debug, Default)]
pub struct NaiveValueHeuristic;

impl<V: Clone + PartialEq + Debug + 'static> ValueHeuristic<V> for NaiveValueHeuristic {
    fn order(&self, csp: &Csp<V>, var: usize) -> Vec<V> {
        csp.domain(var).live_slice().to_vec()
    }
}

/// Shuffles the live values with an RNG owned by the heuristic instance.
///
/// The engine never seeds or touches entropy itself — a caller wanting
/// reproducible search must construct this heuristic with a fixed seed.
#[derive(Debug)]
pub struct RandomValueHeuristic {
    rng: RefCell<ChaCha8Rng>,
}

impl RandomValueHeuristic {
    pub fn new(rng: ChaCha8Rng) -> Self {
        Self {
            rng: RefCell::new(rng),
        }
    }
}

impl<V: Clone + PartialEq + Debug + 'static> ValueHeuristic<V> for RandomValueHeuristic {
    fn order(&self, csp: &Csp<V>, var: usize) -> Vec<V> {
        let mut values = csp.domain(var).live_slice().to_vec();
        values.shuffle(&mut *self.rng.borrow_mut());
        values
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::csp::constraint::not_equal;
    use rand::SeedableRng;

    fn csp() -> Csp<i32> {
        Csp::construct(
            vec!["a".into(), "b".into()],
            vec![vec![0, 1, 2, 3], vec![0, 1]],
            vec![(0, 1, not_equal())],
        )
        .unwrap()
    }

    #[test]
    fn naive_preserves_live_order() {
        let c = csp();
        assert_eq!(NaiveValueHeuristic.order(&c, 0), vec![0, 1, 2, 3]);
    }

    #[test]
    fn random_is_a_permutation_of_live_values() {
        let c = csp();
        let heuristic = RandomValueHeuristic::new(ChaCha8Rng::seed_from_u64(7));
        let mut ordered = heuristic.order(&c, 0);
        ordered.sort();
        assert_eq!(ordered, vec![0, 1, 2, 3]);
    }

    #[test]
    fn random_is_deterministic_given_the_same_seed() {
        let c = csp();
        let a = RandomValueHeuristic::new(ChaCha8Rng::seed_from_u64(42)).order(&c, 0);
        let b = RandomValueHeuristic::new(ChaCha8Rng::seed_from_u64(42)).order(&c, 0);
        assert_eq!(a, b);
    }
}
