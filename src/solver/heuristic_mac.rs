use tracing::debug;

use crate::{
    error::{Result, SolverError},
    representation::{
        constraint::ConstraintRef, value::ValueEquality, Assignment, Domains, VariableSet,
    },
    solver::{
        arc_consistency::ArcConsistency,
        heuristics::{value::ValueOrderingHeuristic, variable::VariableSelectionHeuristic},
        outcome::SolveOutcome,
        problem::Problem,
        stats::SearchStats,
        Solver,
    },
};

/// [`MacSolver`](crate::solver::mac::MacSolver) with the two branching
/// decisions delegated to injected strategies: which variable to assign next,
/// and in what order to try its candidate values.
pub struct HeuristicMacSolver<V: ValueEquality> {
    problem: Problem<V>,
    propagator: ArcConsistency<V>,
    variable_heuristic: Box<dyn VariableSelectionHeuristic<V>>,
    value_heuristic: Box<dyn ValueOrderingHeuristic<V>>,
}

impl<V: ValueEquality> HeuristicMacSolver<V> {
    /// # Errors
    ///
    /// [`SolverError::UnsupportedArity`] if any constraint has a scope size
    /// other than 1 or 2.
    pub fn new(
        variables: VariableSet<V>,
        constraints: Vec<ConstraintRef<V>>,
        variable_heuristic: Box<dyn VariableSelectionHeuristic<V>>,
        value_heuristic: Box<dyn ValueOrderingHeuristic<V>>,
        use_ac3: bool,
    ) -> Result<Self> {
        let propagator = ArcConsistency::new(&constraints, use_ac3)?;
        Ok(Self {
            problem: Problem::new(variables, constraints),
            propagator,
            variable_heuristic,
            value_heuristic,
        })
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
            return Ok(None);
        };

        let Some(variable) = self.variable_heuristic.best(&unassigned, &domains) else {
            return Ok(Some(partial));
        };
        let remaining = unassigned.without(&variable);
        let domain = domains
            .get(&variable)
            .ok_or_else(|| SolverError::UnknownVariable {
                variable: variable.name().to_owned(),
            })?;

        for value in self.value_heuristic.ordering(&variable, domain) {
            let extended = partial.update(variable.clone(), value.clone());
            if !self.problem.is_consistent(&extended)? {
                continue;
            }
            let narrowed = domains.update(variable.clone(), im::HashSet::unit(value));
            if let Some(solution) = self.search(extended, remaining.clone(), narrowed, stats)? {
                return Ok(Some(solution));
            }
            stats.backtracks += 1;
        }

        Ok(None)
    }
}

impl<V: ValueEquality> Solver<V> for HeuristicMacSolver<V> {
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
            backtracks = stats.backtracks,
            "heuristic MAC search finished"
        );
        Ok((found.into(), stats))
    }
}
