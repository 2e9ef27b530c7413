//! The CSP model: variables, domains, constraints and the constraint
//! graph. Built once before search; search mutates domain cursors in place
//! and restores them before returning, so the model is observationally
//! unchanged regardless of the outcome of a `run()`.

use std::collections::{HashMap, HashSet};
use std::fmt::Debug;

use crate::csp::constraint::{and, swapped, PredicateFn};
use crate::csp::domain::Domain;
use crate::error::{Error, Result};

/// A constraint satisfaction problem over variables `0..n`.
pub struct Csp<V> {
    /// External names, purely for display and for translating the final
    /// assignment back into a `variable_label -> value` map.
    labels: Vec<String>,
    domains: Vec<Domain<V>>,
    constraints: HashMap<(usize, usize), PredicateFn<V>>,
    neigh: Vec<HashSet<usize>>,
}

impl<V: Clone + PartialEq + Debug + 'static> Csp<V> {
    /// Builds a CSP from ordered variable labels, one domain per variable,
    /// and a list of `(i, j, predicate)` triples. Constraints are added via
    /// [`Csp::add_constraint`], so duplicate pairs are conjoined and both
    /// `(i, j)` and `(j, i)` entries end up populated.
    pub fn construct(
        labels: Vec<String>,
        domains: Vec<Vec<V>>,
        constraints: Vec<(usize, usize, PredicateFn<V>)>,
    ) -> Result<Self> {
        assert_eq!(labels.len(), domains.len(), "one domain per variable label");
        let n = labels.len();
        let mut csp = Csp {
            labels,
            domains: domains.into_iter().map(Domain::new).collect(),
            constraints: HashMap::new(),
            neigh: vec![HashSet::new(); n],
        };
        for (i, j, predicate) in constraints {
            csp.add_constraint(i, j, predicate)?;
        }
        Ok(csp)
    }

    /// Adds a constraint between `i` and `j`. If a predicate already exists
    /// for this pair, the stored predicate becomes the conjunction of the
    /// old and new ones. Always populates both `(i, j)` and its
    /// argument-swapped `(j, i)` counterpart.
    pub fn add_constraint(&mut self, i: usize, j: usize, predicate: PredicateFn<V>) -> Result<()> {
        self.check_index(i)?;
        self.check_index(j)?;
        if i == j {
            return Err(Error::SelfLoop { index: i });
        }

        let combined = match self.constraints.get(&(i, j)) {
            Some(existing) => and(existing.clone(), predicate),
            None => predicate,
        };
        let combined_swapped = swapped(combined.clone());

        self.constraints.insert((i, j), combined);
        self.constraints.insert((j, i), combined_swapped);
        self.neigh[i].insert(j);
        self.neigh[j].insert(i);
        Ok(())
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index >= self.labels.len() {
            return Err(Error::InvalidIndex {
                index,
                num_variables: self.labels.len(),
            });
        }
        Ok(())
    }

    pub fn num_variables(&self) -> usize {
        self.labels.len()
    }

    pub fn label(&self, i: usize) -> &str {
        &self.labels[i]
    }

    pub fn neighbors(&self, i: usize) -> &HashSet<usize> {
        &self.neigh[i]
    }

    pub fn domain(&self, i: usize) -> &Domain<V> {
        &self.domains[i]
    }

    pub fn domain_mut(&mut self, i: usize) -> &mut Domain<V> {
        &mut self.domains[i]
    }

    /// All stored constraint keys, i.e. every directed arc `(i, j)` for
    /// which a predicate is recorded. Used to seed AC-3's root work set.
    pub fn constraint_keys(&self) -> impl Iterator<Item = &(usize, usize)> {
        self.constraints.keys()
    }

    /// Evaluates `c(i, j, v_i, v_j)`, or `true` if no constraint exists
    /// between `i` and `j`.
    pub fn check(&self, i: usize, j: usize, v_i: &V, v_j: &V) -> bool {
        match self.constraints.get(&(i, j)) {
            Some(predicate) => predicate(v_i, v_j),
            None => true,
        }
    }

    pub fn has_constraint(&self, i: usize, j: usize) -> bool {
        self.constraints.contains_key(&(i, j))
    }
}
