//! Constraint propagation and backtracking search.
//!
//! Three solver variants share one [`Problem`](problem::Problem):
//!
//! - [`BacktrackSolver`](backtrack::BacktrackSolver): pure recursive search
//!   over declared domains, no filtering. The baseline correctness reference.
//! - [`MacSolver`](mac::MacSolver): re-establishes arc consistency at every
//!   search node before branching (Maintaining Arc Consistency).
//! - [`HeuristicMacSolver`](heuristic_mac::HeuristicMacSolver): MAC with
//!   pluggable variable-selection and value-ordering strategies.
//!
//! Execution is strictly single-threaded and recursive; depth is bounded by
//! the number of variables. Each recursive step receives its own persistent
//! snapshot of the search state, so sibling branches never observe each
//! other's restrictions and failure paths have nothing to restore.

pub mod arc_consistency;
pub mod backtrack;
pub mod heuristic_mac;
pub mod heuristics;
pub mod mac;
pub mod outcome;
pub mod problem;
pub mod stats;
pub mod work_list;

use crate::{
    error::Result,
    representation::value::ValueEquality,
    solver::{outcome::SolveOutcome, stats::SearchStats},
};

/// The single operation every solver variant exposes.
pub trait Solver<V: ValueEquality> {
    /// Searches for an assignment satisfying every constraint.
    ///
    /// Returns [`SolveOutcome::Unsatisfiable`] when the problem has no
    /// solution within the declared domains; errors are reserved for
    /// malformed inputs, never for search exhaustion.
    fn solve(&self) -> Result<(SolveOutcome<V>, SearchStats)>;
}
