//! Strategies for ordering the candidate values of a branching variable.

use std::cell::RefCell;

use im::HashSet;
use rand::{seq::SliceRandom, Rng};
use rand_chacha::ChaCha8Rng;
use rand_core::SeedableRng;

use crate::representation::{value::ValueEquality, variable::Variable};

/// A value-ordering strategy. The domain handed in is never mutated; the
/// ordering is returned as a fresh sequence.
pub trait ValueOrderingHeuristic<V: ValueEquality> {
    fn ordering(&self, variable: &Variable<V>, domain: &HashSet<V>) -> Vec<V>;
}

/// Returns values in the domain's natural iteration order.
#[derive(Debug, Clone)]
pub struct IdentityValueHeuristic;

impl<V: ValueEquality> ValueOrderingHeuristic<V> for IdentityValueHeuristic {
    fn ordering(&self, _variable: &Variable<V>, domain: &HashSet<V>) -> Vec<V> {
        domain.iter().cloned().collect()
    }
}

/// Returns values in a uniformly shuffled order drawn from an injected
/// seedable random source; two instances built from the same seed produce
/// the same orderings. The engine is single-threaded, so the generator state
/// lives behind a `RefCell`.
#[derive(Debug)]
pub struct RandomValueHeuristic<R: Rng> {
    rng: RefCell<R>,
}

impl<R: Rng> RandomValueHeuristic<R> {
    pub fn new(rng: R) -> Self {
        Self {
            rng: RefCell::new(rng),
        }
    }
}

impl RandomValueHeuristic<ChaCha8Rng> {
    /// A heuristic whose randomness is fully determined by `seed`.
    pub fn seeded(seed: u64) -> Self {
        Self::new(ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<V: ValueEquality, R: Rng> ValueOrderingHeuristic<V> for RandomValueHeuristic<R> {
    fn ordering(&self, _variable: &Variable<V>, domain: &HashSet<V>) -> Vec<V> {
        let mut values: Vec<V> = domain.iter().cloned().collect();
        values.shuffle(&mut *self.rng.borrow_mut());
        values
    }
}

#[cfg(test)]
mod tests {
    use super::{IdentityValueHeuristic, RandomValueHeuristic, ValueOrderingHeuristic};
    use crate::representation::{value::StandardValue, variable::Variable};

    fn ints(values: &[i64]) -> im::HashSet<StandardValue> {
        values.iter().map(|v| StandardValue::Int(*v)).collect()
    }

    #[test]
    fn identity_returns_every_value_once() {
        let x = Variable::new("x", ints(&[1, 2, 3]));
        let ordered = IdentityValueHeuristic.ordering(&x, x.domain());
        assert_eq!(ordered.len(), 3);
        let as_set: im::HashSet<StandardValue> = ordered.into_iter().collect();
        assert_eq!(as_set, ints(&[1, 2, 3]));
    }

    #[test]
    fn shuffle_is_a_permutation_of_the_domain() {
        let x = Variable::new("x", ints(&[1, 2, 3, 4, 5]));
        let heuristic = RandomValueHeuristic::seeded(7);
        let ordered = heuristic.ordering(&x, x.domain());
        assert_eq!(ordered.len(), 5);
        let as_set: im::HashSet<StandardValue> = ordered.into_iter().collect();
        assert_eq!(as_set, ints(&[1, 2, 3, 4, 5]));
    }

    #[test]
    fn same_seed_gives_the_same_ordering() {
        let x = Variable::new("x", ints(&[1, 2, 3, 4, 5, 6, 7, 8]));
        let first = RandomValueHeuristic::seeded(42);
        let second = RandomValueHeuristic::seeded(42);
        assert_eq!(
            first.ordering(&x, x.domain()),
            second.ordering(&x, x.domain())
        );

        // Repeated draws from one instance advance its generator.
        let third = RandomValueHeuristic::seeded(42);
        let a = third.ordering(&x, x.domain());
        let b = third.ordering(&x, x.domain());
        // Not a strict guarantee for tiny domains, but with 8 values two
        // consecutive identical shuffles would be a 1-in-40320 fluke.
        assert_ne!(a, b);
    }
}
