use im::HashSet;

use crate::{
    error::{Result, SolverError},
    representation::{
        constraint::Constraint, value::ValueEquality, variable::Variable, Assignment, VariableSet,
    },
};

/// Restricts a single variable to a sub-domain of its declared domain.
#[derive(Debug, Clone)]
pub struct UnaryConstraint<V: ValueEquality> {
    variable: Variable<V>,
    allowed: HashSet<V>,
    scope: VariableSet<V>,
}

impl<V: ValueEquality> UnaryConstraint<V> {
    /// # Errors
    ///
    /// [`SolverError::SubDomainNotContained`] if `allowed` is not a subset of
    /// the variable's declared domain.
    pub fn new(variable: Variable<V>, allowed: HashSet<V>) -> Result<Self> {
        if !allowed.is_subset(variable.domain()) {
            return Err(SolverError::SubDomainNotContained {
                variable: variable.name().to_owned(),
            }
            .into());
        }
        let scope = VariableSet::unit(variable.clone());
        Ok(Self {
            variable,
            allowed,
            scope,
        })
    }

    pub fn variable(&self) -> &Variable<V> {
        &self.variable
    }

    pub fn allowed(&self) -> &HashSet<V> {
        &self.allowed
    }
}

impl<V: ValueEquality> Constraint<V> for UnaryConstraint<V> {
    fn scope(&self) -> &VariableSet<V> {
        &self.scope
    }

    fn is_satisfied_by(&self, assignment: &Assignment<V>) -> Result<bool> {
        let Some(value) = assignment.get(&self.variable) else {
            return Err(SolverError::UnassignedVariable {
                variable: self.variable.name().to_owned(),
                constraint: format!("UnaryConstraint on {}", self.variable),
            }
            .into());
        };
        Ok(self.allowed.contains(value))
    }
}
