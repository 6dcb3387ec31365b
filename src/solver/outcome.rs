use crate::representation::{value::ValueEquality, Assignment};

/// The result of a `solve` call.
///
/// Absence of a solution is a defined outcome, not an error, and it is kept
/// distinct from an assignment so "no solution" can never be confused with an
/// empty or partial assignment. A problem with zero variables is satisfiable
/// with the empty assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveOutcome<V: ValueEquality> {
    /// A complete assignment satisfying every constraint.
    Satisfiable(Assignment<V>),
    /// No assignment within the declared domains satisfies all constraints.
    Unsatisfiable,
}

impl<V: ValueEquality> SolveOutcome<V> {
    pub fn is_satisfiable(&self) -> bool {
        matches!(self, SolveOutcome::Satisfiable(_))
    }

    pub fn assignment(&self) -> Option<&Assignment<V>> {
        match self {
            SolveOutcome::Satisfiable(assignment) => Some(assignment),
            SolveOutcome::Unsatisfiable => None,
        }
    }

    pub fn into_assignment(self) -> Option<Assignment<V>> {
        match self {
            SolveOutcome::Satisfiable(assignment) => Some(assignment),
            SolveOutcome::Unsatisfiable => None,
        }
    }
}

impl<V: ValueEquality> From<Option<Assignment<V>>> for SolveOutcome<V> {
    fn from(found: Option<Assignment<V>>) -> Self {
        match found {
            Some(assignment) => SolveOutcome::Satisfiable(assignment),
            None => SolveOutcome::Unsatisfiable,
        }
    }
}
