use std::sync::Arc;

use crate::{
    error::Result,
    representation::{value::ValueEquality, Assignment, VariableSet},
};

/// A shareable, type-erased constraint.
///
/// Solvers and the propagator hold constraints behind `Arc` so that the same
/// constraint objects can be partitioned, filtered, and counted without
/// copying their sub-domains.
pub type ConstraintRef<V> = Arc<dyn Constraint<V>>;

/// A rule restricting the joint values of a set of variables.
///
/// A constraint is identified by its *scope* — the non-empty set of variables
/// it restricts — and a satisfaction predicate over an assignment covering
/// that scope. The crate ships the three canonical constraint kinds
/// ([`UnaryConstraint`](crate::representation::constraints::unary::UnaryConstraint),
/// [`DifferenceConstraint`](crate::representation::constraints::difference::DifferenceConstraint),
/// [`ImplicationConstraint`](crate::representation::constraints::implication::ImplicationConstraint));
/// problem encoders may implement their own, but only unary and binary
/// constraints can be arc-consistency processed.
pub trait Constraint<V: ValueEquality>: std::fmt::Debug {
    /// The set of variables this constraint restricts. Never empty.
    fn scope(&self) -> &VariableSet<V>;

    /// Whether `assignment` satisfies this constraint.
    ///
    /// # Errors
    ///
    /// [`SolverError::UnassignedVariable`](crate::error::SolverError) if the
    /// assignment does not cover the full scope. Callers that only check
    /// fully-assigned constraints (the solvers) never hit this.
    fn is_satisfied_by(&self, assignment: &Assignment<V>) -> Result<bool>;
}

/// Checks a whole set of constraints against one assignment.
///
/// Every constraint's scope must be covered by the assignment; this is a
/// convenience for validating complete solutions, not a partial-assignment
/// check (for that, see [`Problem::is_consistent`](crate::solver::problem::Problem::is_consistent)).
pub fn satisfies_all<'a, V: ValueEquality>(
    assignment: &Assignment<V>,
    constraints: impl IntoIterator<Item = &'a ConstraintRef<V>>,
) -> Result<bool> {
    for constraint in constraints {
        if !constraint.is_satisfied_by(assignment)? {
            return Ok(false);
        }
    }
    Ok(true)
}
