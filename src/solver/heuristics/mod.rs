//! Pluggable variable-selection and value-ordering strategies for
//! [`HeuristicMacSolver`](crate::solver::heuristic_mac::HeuristicMacSolver).

pub mod value;
pub mod variable;
