use im::HashSet;

use crate::{
    error::{Result, SolverError},
    representation::{
        binary_scope, constraint::Constraint, value::ValueEquality, variable::Variable,
        Assignment, VariableSet,
    },
};

/// A conditional binary constraint: if the first variable's value lies in
/// `when`, the second variable's value must lie in `then`. Vacuously true
/// whenever the first value is outside `when`.
#[derive(Debug, Clone)]
pub struct ImplicationConstraint<V: ValueEquality> {
    first: Variable<V>,
    when: HashSet<V>,
    second: Variable<V>,
    then: HashSet<V>,
    scope: VariableSet<V>,
}

impl<V: ValueEquality> ImplicationConstraint<V> {
    /// # Errors
    ///
    /// [`SolverError::SubDomainNotContained`] if `when` is not a subset of the
    /// first variable's declared domain, or `then` not a subset of the
    /// second's.
    pub fn new(
        first: Variable<V>,
        when: HashSet<V>,
        second: Variable<V>,
        then: HashSet<V>,
    ) -> Result<Self> {
        if !when.is_subset(first.domain()) {
            return Err(SolverError::SubDomainNotContained {
                variable: first.name().to_owned(),
            }
            .into());
        }
        if !then.is_subset(second.domain()) {
            return Err(SolverError::SubDomainNotContained {
                variable: second.name().to_owned(),
            }
            .into());
        }
        let scope = binary_scope(&first, &second);
        Ok(Self {
            first,
            when,
            second,
            then,
            scope,
        })
    }
}

impl<V: ValueEquality> Constraint<V> for ImplicationConstraint<V> {
    fn scope(&self) -> &VariableSet<V> {
        &self.scope
    }

    fn is_satisfied_by(&self, assignment: &Assignment<V>) -> Result<bool> {
        for variable in &self.scope {
            if !assignment.contains_key(variable) {
                return Err(SolverError::UnassignedVariable {
                    variable: variable.name().to_owned(),
                    constraint: format!("ImplicationConstraint [{}, {}]", self.first, self.second),
                }
                .into());
            }
        }
        let premise_holds = assignment
            .get(&self.first)
            .is_some_and(|value| self.when.contains(value));
        if !premise_holds {
            return Ok(true);
        }
        Ok(assignment
            .get(&self.second)
            .is_some_and(|value| self.then.contains(value)))
    }
}
