use tracing::debug;

use crate::{
    error::Result,
    representation::{
        constraint::ConstraintRef, value::ValueEquality, Assignment, VariableSet,
    },
    solver::{outcome::SolveOutcome, problem::Problem, stats::SearchStats, Solver},
};

/// Chronological backtracking over the declared domains, with no domain
/// filtering at all. Slow on anything non-trivial, but its simplicity makes
/// it the reference the propagating solvers are checked against.
#[derive(Debug)]
pub struct BacktrackSolver<V: ValueEquality> {
    problem: Problem<V>,
}

impl<V: ValueEquality> BacktrackSolver<V> {
    pub fn new(variables: VariableSet<V>, constraints: Vec<ConstraintRef<V>>) -> Self {
        Self {
            problem: Problem::new(variables, constraints),
        }
    }

    pub fn problem(&self) -> &Problem<V> {
        &self.problem
    }

    fn search(
        &self,
        partial: Assignment<V>,
        unassigned: VariableSet<V>,
        stats: &mut SearchStats,
    ) -> Result<Option<Assignment<V>>> {
        stats.nodes_visited += 1;

        // Selection order among remaining variables is arbitrary, not a
        // heuristic.
        let Some(variable) = unassigned.iter().next().cloned() else {
            return Ok(Some(partial));
        };
        let remaining = unassigned.without(&variable);

        for value in variable.domain() {
            let extended = partial.update(variable.clone(), value.clone());
            if !self.problem.is_consistent(&extended)? {
                continue;
            }
            if let Some(solution) = self.search(extended, remaining.clone(), stats)? {
                return Ok(Some(solution));
            }
        }

        stats.backtracks += 1;
        Ok(None)
    }
}

impl<V: ValueEquality> Solver<V> for BacktrackSolver<V> {
    fn solve(&self) -> Result<(SolveOutcome<V>, SearchStats)> {
        let mut stats = SearchStats::default();
        let found = self.search(
            Assignment::new(),
            self.problem.variables().clone(),
            &mut stats,
        )?;
        debug!(nodes = stats.nodes_visited, backtracks = stats.backtracks, "search finished");
        Ok((found.into(), stats))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use im::hashset;

    use super::BacktrackSolver;
    use crate::{
        representation::{
            constraint::{satisfies_all, ConstraintRef},
            constraints::difference::DifferenceConstraint,
            value::StandardValue,
            variable::Variable,
        },
        solver::{outcome::SolveOutcome, Solver},
    };

    fn ints(values: &[i64]) -> im::HashSet<StandardValue> {
        values.iter().map(|v| StandardValue::Int(*v)).collect()
    }

    #[test]
    fn finds_a_permutation_for_pairwise_difference() {
        // Three variables over {1,2,3}, all pairs different: any solution is
        // a permutation of {1,2,3}.
        let a = Variable::new("a", ints(&[1, 2, 3]));
        let b = Variable::new("b", ints(&[1, 2, 3]));
        let c = Variable::new("c", ints(&[1, 2, 3]));
        let constraints: Vec<ConstraintRef<StandardValue>> = vec![
            Arc::new(DifferenceConstraint::new(a.clone(), b.clone())),
            Arc::new(DifferenceConstraint::new(b.clone(), c.clone())),
            Arc::new(DifferenceConstraint::new(a.clone(), c.clone())),
        ];
        let solver = BacktrackSolver::new(
            hashset![a.clone(), b.clone(), c.clone()],
            constraints.clone(),
        );

        let (outcome, stats) = solver.solve().unwrap();
        let assignment = outcome.into_assignment().expect("satisfiable");
        assert_eq!(assignment.len(), 3);
        assert!(satisfies_all(&assignment, &constraints).unwrap());

        let values: im::HashSet<StandardValue> = assignment.values().cloned().collect();
        assert_eq!(values, ints(&[1, 2, 3]));
        assert!(stats.nodes_visited >= 4);
    }

    #[test]
    fn reports_unsatisfiable_without_erroring() {
        let x = Variable::new("x", ints(&[1]));
        let y = Variable::new("y", ints(&[1]));
        let constraints: Vec<ConstraintRef<StandardValue>> =
            vec![Arc::new(DifferenceConstraint::new(x.clone(), y.clone()))];
        let solver = BacktrackSolver::new(hashset![x, y], constraints);

        let (outcome, _stats) = solver.solve().unwrap();
        assert_eq!(outcome, SolveOutcome::Unsatisfiable);
    }

    #[test]
    fn zero_variables_yield_the_empty_assignment() {
        let solver: BacktrackSolver<StandardValue> = BacktrackSolver::new(hashset![], vec![]);
        let (outcome, _stats) = solver.solve().unwrap();
        assert_eq!(outcome.assignment().unwrap().len(), 0);
    }
}
