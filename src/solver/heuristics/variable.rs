//! Strategies for choosing which variable to branch on next.

use std::cmp::Reverse;

use crate::representation::{
    constraint::ConstraintRef, value::ValueEquality, variable::Variable, Domains, VariableSet,
};

/// A variable-selection strategy.
///
/// Implementations must be pure functions of the arguments: they may not
/// mutate the remaining-variable set or the domain mapping, and they should
/// carry no hidden mutable state.
pub trait VariableSelectionHeuristic<V: ValueEquality> {
    /// Picks the next variable to branch on, or `None` when `variables` is
    /// empty.
    fn best(&self, variables: &VariableSet<V>, domains: &Domains<V>) -> Option<Variable<V>>;
}

/// Selects by current domain cardinality: the minimum (fail-first — the most
/// constrained variable either succeeds quickly or fails quickly) or, with
/// `maximize`, the maximum (mostly useful for benchmarking pessimal
/// orderings). Ties are broken by variable name so selection is
/// deterministic.
#[derive(Debug, Clone)]
pub struct DomainSizeHeuristic {
    pub maximize: bool,
}

impl<V: ValueEquality> VariableSelectionHeuristic<V> for DomainSizeHeuristic {
    fn best(&self, variables: &VariableSet<V>, domains: &Domains<V>) -> Option<Variable<V>> {
        let size = |variable: &Variable<V>| domains.get(variable).map_or(0, |domain| domain.len());
        if self.maximize {
            variables
                .iter()
                .max_by_key(|variable| (size(variable), Reverse(variable.name())))
                .cloned()
        } else {
            variables
                .iter()
                .min_by_key(|variable| (size(variable), variable.name()))
                .cloned()
        }
    }
}

/// Selects by how many constraints of the full constraint set mention the
/// variable anywhere in their scope — not just the constraints still
/// undecided. Same name tie-break as [`DomainSizeHeuristic`].
#[derive(Debug, Clone)]
pub struct ConstraintCountHeuristic<V: ValueEquality> {
    constraints: Vec<ConstraintRef<V>>,
    maximize: bool,
}

impl<V: ValueEquality> ConstraintCountHeuristic<V> {
    pub fn new(constraints: Vec<ConstraintRef<V>>, maximize: bool) -> Self {
        Self {
            constraints,
            maximize,
        }
    }

    fn mentions(&self, variable: &Variable<V>) -> usize {
        self.constraints
            .iter()
            .filter(|constraint| constraint.scope().contains(variable))
            .count()
    }
}

impl<V: ValueEquality> VariableSelectionHeuristic<V> for ConstraintCountHeuristic<V> {
    fn best(&self, variables: &VariableSet<V>, _domains: &Domains<V>) -> Option<Variable<V>> {
        if self.maximize {
            variables
                .iter()
                .max_by_key(|variable| (self.mentions(variable), Reverse(variable.name())))
                .cloned()
        } else {
            variables
                .iter()
                .min_by_key(|variable| (self.mentions(variable), variable.name()))
                .cloned()
        }
    }
}
