use tracing::debug;

use crate::{
    error::{Result, SolverError},
    representation::{
        constraint::ConstraintRef, value::ValueEquality, Assignment, Domains, VariableSet,
    },
    solver::{
        arc_consistency::ArcConsistency, outcome::SolveOutcome, problem::Problem,
        stats::SearchStats, Solver,
    },
};

/// Backtracking search that re-establishes arc consistency before every
/// branching decision (Maintaining Arc Consistency).
///
/// Compared to [`BacktrackSolver`](crate::solver::backtrack::BacktrackSolver),
/// dead ends are detected as soon as propagation wipes out a domain, and
/// values are drawn from the current filtered domains instead of the declared
/// ones. Each child branch receives its own domain snapshot with the chosen
/// variable restricted to a singleton.
pub struct MacSolver<V: ValueEquality> {
    problem: Problem<V>,
    propagator: ArcConsistency<V>,
}

impl<V: ValueEquality> MacSolver<V> {
    /// # Errors
    ///
    /// [`SolverError::UnsupportedArity`] if any constraint has a scope size
    /// other than 1 or 2 — MAC needs every constraint to be propagatable.
    pub fn new(
        variables: VariableSet<V>,
        constraints: Vec<ConstraintRef<V>>,
        use_ac3: bool,
    ) -> Result<Self> {
        let propagator = ArcConsistency::new(&constraints, use_ac3)?;
        Ok(Self {
            problem: Problem::new(variables, constraints),
            propagator,
        })
    }

    pub fn problem(&self) -> &Problem<V> {
        &self.problem
    }

    pub fn propagator(&self) -> &ArcConsistency<V> {
        &self.propagator
    }

    fn search(
        &self,
        partial: Assignment<V>,
        unassigned: VariableSet<V>,
        domains: Domains<V>,
        stats: &mut SearchStats,
    ) -> Result<Option<Assignment<V>>> {
        if unassigned.is_empty() {
            return Ok(Some(partial));
        }
        stats.nodes_visited += 1;

        let Some(domains) =
            self.propagator
                .arc_consistency(domains, self.problem.variables(), stats)?
        else {
            // Propagation proved this branch infeasible before any guess.
            return Ok(None);
        };

        let Some(variable) = unassigned.iter().next().cloned() else {
            return Ok(Some(partial));
        };
        let remaining = unassigned.without(&variable);
        let domain = domains
            .get(&variable)
            .ok_or_else(|| SolverError::UnknownVariable {
                variable: variable.name().to_owned(),
            })?
            .clone();

        for value in &domain {
            let extended = partial.update(variable.clone(), value.clone());
            if !self.problem.is_consistent(&extended)? {
                continue;
            }
            let narrowed = domains.update(variable.clone(), im::HashSet::unit(value.clone()));
            if let Some(solution) = self.search(extended, remaining.clone(), narrowed, stats)? {
                return Ok(Some(solution));
            }
            stats.backtracks += 1;
        }

        Ok(None)
    }
}

impl<V: ValueEquality> Solver<V> for MacSolver<V> {
    fn solve(&self) -> Result<(SolveOutcome<V>, SearchStats)> {
        let mut stats = SearchStats::default();
        let found = self.search(
            Assignment::new(),
            self.problem.variables().clone(),
            self.problem.initial_domains(),
            &mut stats,
        )?;
        debug!(
            nodes = stats.nodes_visited,
            pruned = stats.values_pruned,
            "MAC search finished"
        );
        Ok((found.into(), stats))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use im::hashset;
    use pretty_assertions::assert_eq;

    use super::MacSolver;
    use crate::{
        representation::{
            constraint::{satisfies_all, ConstraintRef},
            constraints::{
                difference::DifferenceConstraint, implication::ImplicationConstraint,
                unary::UnaryConstraint,
            },
            value::StandardValue,
            variable::Variable,
        },
        solver::{outcome::SolveOutcome, Solver},
    };

    fn ints(values: &[i64]) -> im::HashSet<StandardValue> {
        values.iter().map(|v| StandardValue::Int(*v)).collect()
    }

    fn pairwise_different_triple() -> (
        Vec<Variable<StandardValue>>,
        Vec<ConstraintRef<StandardValue>>,
    ) {
        let a = Variable::new("a", ints(&[1, 2, 3]));
        let b = Variable::new("b", ints(&[1, 2, 3]));
        let c = Variable::new("c", ints(&[1, 2, 3]));
        let constraints: Vec<ConstraintRef<StandardValue>> = vec![
            Arc::new(DifferenceConstraint::new(a.clone(), b.clone())),
            Arc::new(DifferenceConstraint::new(b.clone(), c.clone())),
            Arc::new(DifferenceConstraint::new(a.clone(), c.clone())),
        ];
        (vec![a, b, c], constraints)
    }

    #[test]
    fn finds_a_permutation_in_both_propagation_modes() {
        for use_ac3 in [false, true] {
            let (variables, constraints) = pairwise_different_triple();
            let solver = MacSolver::new(
                variables.iter().cloned().collect(),
                constraints.clone(),
                use_ac3,
            )
            .unwrap();

            let (outcome, _stats) = solver.solve().unwrap();
            let assignment = outcome.into_assignment().expect("satisfiable");
            assert!(satisfies_all(&assignment, &constraints).unwrap());
            let values: im::HashSet<StandardValue> = assignment.values().cloned().collect();
            assert_eq!(values, ints(&[1, 2, 3]));
        }
    }

    #[test]
    fn implication_and_unary_constraints_are_honoured() {
        let x = Variable::new("x", ints(&[1, 2, 3, 4]));
        let y = Variable::new("y", ints(&[1, 2, 3, 4]));
        let constraints: Vec<ConstraintRef<StandardValue>> = vec![
            Arc::new(UnaryConstraint::new(x.clone(), ints(&[1])).unwrap()),
            Arc::new(
                ImplicationConstraint::new(x.clone(), ints(&[1]), y.clone(), ints(&[3, 4]))
                    .unwrap(),
            ),
        ];
        let solver = MacSolver::new(hashset![x.clone(), y.clone()], constraints, true).unwrap();

        let (outcome, _stats) = solver.solve().unwrap();
        let assignment = outcome.into_assignment().expect("satisfiable");
        assert_eq!(assignment.get(&x), Some(&StandardValue::Int(1)));
        let y_value = assignment.get(&y).unwrap();
        assert!(ints(&[3, 4]).contains(y_value));
    }

    #[test]
    fn empty_effective_domain_is_unsatisfiable_not_a_panic() {
        let x = Variable::new("x", ints(&[1, 2]));
        let constraints: Vec<ConstraintRef<StandardValue>> =
            vec![Arc::new(UnaryConstraint::new(x.clone(), ints(&[])).unwrap())];
        let solver = MacSolver::new(hashset![x], constraints, false).unwrap();

        let (outcome, _stats) = solver.solve().unwrap();
        assert_eq!(outcome, SolveOutcome::Unsatisfiable);
    }

    #[test]
    fn prunes_more_than_plain_backtracking_on_a_dead_problem() {
        // Four mutually-different variables over a three-value domain:
        // propagation alone cannot spot it, but MAC fails fast per branch.
        let names = ["a", "b", "c", "d"];
        let variables: Vec<Variable<StandardValue>> = names
            .iter()
            .map(|n| Variable::new(*n, ints(&[1, 2, 3])))
            .collect();
        let mut constraints: Vec<ConstraintRef<StandardValue>> = Vec::new();
        for i in 0..variables.len() {
            for j in (i + 1)..variables.len() {
                constraints.push(Arc::new(DifferenceConstraint::new(
                    variables[i].clone(),
                    variables[j].clone(),
                )));
            }
        }
        let solver =
            MacSolver::new(variables.iter().cloned().collect(), constraints, true).unwrap();

        let (outcome, stats) = solver.solve().unwrap();
        assert_eq!(outcome, SolveOutcome::Unsatisfiable);
        assert!(stats.values_pruned > 0);
    }
}
