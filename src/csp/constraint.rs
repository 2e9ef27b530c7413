//! Binary constraint predicates.
//!
//! A constraint is a first-class predicate `c(v_i, v_j) -> bool`, not a
//! class hierarchy: global/n-ary constraints and soft constraints are
//! explicitly out of scope, so a single closure type covers everything the
//! engine needs. Conjunction of two constraints on the same pair is a
//! combinator over these closures, not a rewrite of either body.

use std::sync::Arc;

/// A binary predicate over two variables' values.
pub type PredicateFn<V> = Arc<dyn Fn(&V, &V) -> bool + Send + Sync>;

/// Builds the argument-swapped form of a predicate, so that `swapped(b, a)
/// == original(a, b)`. Used to populate the `(j, i)` entry from an `(i, j)`
/// predicate.
pub fn swapped<V: 'static>(predicate: PredicateFn<V>) -> PredicateFn<V> {
    Arc::new(move |a: &V, b: &V| predicate(b, a))
}

/// Combines two predicates on the same ordered pair into their logical
/// conjunction.
pub fn and<V: 'static>(a: PredicateFn<V>, b: PredicateFn<V>) -> PredicateFn<V> {
    Arc::new(move |x: &V, y: &V| a(x, y) && b(x, y))
}

/// A predicate requiring the two values to differ. Building block for
/// `all_different`-style demo constraints.
pub fn not_equal<V: PartialEq + Send + Sync + 'static>() -> PredicateFn<V> {
    Arc::new(|a: &V, b: &V| a != b)
}

#[cfg(test)]
mod tests {
    use super::*;

    proptest::proptest! {
        #[test]
        fn swapped_mirrors_argument_order(a in -100i32..100, b in -100i32..100) {
            let less_than: PredicateFn<i32> = Arc::new(|x: &i32, y: &i32| x < y);
            let flipped = swapped(less_than.clone());
            assert_eq!(flipped(&a, &b), less_than(&b, &a));
        }

        #[test]
        fn and_is_logical_conjunction(a in -100i32..100, b in -100i32..100) {
            let not_eq: PredicateFn<i32> = not_equal();
            let positive_sum: PredicateFn<i32> = Arc::new(|x: &i32, y: &i32| x + y > 0);
            let both = and(not_eq.clone(), positive_sum.clone());
            assert_eq!(both(&a, &b), not_eq(&a, &b) && positive_sum(&a, &b));
        }
    }
}
