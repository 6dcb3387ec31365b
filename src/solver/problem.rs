use crate::{
    error::Result,
    representation::{
        constraint::ConstraintRef, value::ValueEquality, Assignment, Domains, VariableSet,
    },
};

/// The fixed variable and constraint sets every solver variant works over,
/// plus the consistency check they share.
#[derive(Debug, Clone)]
pub struct Problem<V: ValueEquality> {
    variables: VariableSet<V>,
    constraints: Vec<ConstraintRef<V>>,
}

impl<V: ValueEquality> Problem<V> {
    pub fn new(variables: VariableSet<V>, constraints: Vec<ConstraintRef<V>>) -> Self {
        Self {
            variables,
            constraints,
        }
    }

    pub fn variables(&self) -> &VariableSet<V> {
        &self.variables
    }

    pub fn constraints(&self) -> &[ConstraintRef<V>] {
        &self.constraints
    }

    /// Whether a partial assignment violates no constraint.
    ///
    /// Three-valued applicability: a constraint whose scope is fully covered
    /// by the assignment must be satisfied; a constraint with any unassigned
    /// scope variable is not yet applicable and is ignored.
    pub fn is_consistent(&self, assignment: &Assignment<V>) -> Result<bool> {
        for constraint in &self.constraints {
            let fully_assigned = constraint
                .scope()
                .iter()
                .all(|variable| assignment.contains_key(variable));
            if fully_assigned && !constraint.is_satisfied_by(assignment)? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// A fresh domain snapshot: every variable mapped to its declared domain.
    pub fn initial_domains(&self) -> Domains<V> {
        self.variables
            .iter()
            .map(|variable| (variable.clone(), variable.domain().clone()))
            .collect()
    }
}
