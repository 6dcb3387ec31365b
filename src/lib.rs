//! Crible is a generic, reusable constraint satisfaction problem (CSP) engine.
//!
//! Given a finite set of variables with finite discrete domains and a set of
//! unary or binary constraints over them, the engine finds one assignment
//! satisfying every constraint, or proves that none exists within the
//! declared domains.
//!
//! # Core Concepts
//!
//! - **[`Variable`]**: a named variable with a declared domain. Names are the
//!   sole basis of variable identity.
//! - **[`Constraint`]**: a trait representing a rule over one or two
//!   variables. The crate ships the canonical kinds: [`UnaryConstraint`],
//!   [`DifferenceConstraint`] and [`ImplicationConstraint`].
//! - **Solvers**: [`BacktrackSolver`] (pure search), [`MacSolver`] (search
//!   interleaved with arc-consistency propagation) and
//!   [`HeuristicMacSolver`] (MAC with pluggable branching strategies). All
//!   expose a single [`Solver::solve`] operation returning a
//!   [`SolveOutcome`].
//!
//! # Example: `?A != ?B`
//!
//! `?A` can be `1` or `2`, `?B` can only be `1`; the solver must put `?A`
//! at `2`.
//!
//! ```
//! use std::sync::Arc;
//!
//! use crible::representation::{
//!     constraint::ConstraintRef,
//!     constraints::difference::DifferenceConstraint,
//!     value::StandardValue,
//!     variable::Variable,
//! };
//! use crible::solver::{mac::MacSolver, Solver};
//!
//! let ints = |values: &[i64]| -> im::HashSet<StandardValue> {
//!     values.iter().map(|v| StandardValue::Int(*v)).collect()
//! };
//!
//! let a = Variable::new("a", ints(&[1, 2]));
//! let b = Variable::new("b", ints(&[1]));
//! let constraints: Vec<ConstraintRef<StandardValue>> =
//!     vec![Arc::new(DifferenceConstraint::new(a.clone(), b.clone()))];
//!
//! let solver = MacSolver::new(
//!     [a.clone(), b.clone()].iter().cloned().collect(),
//!     constraints,
//!     true, // use AC-3
//! )
//! .unwrap();
//!
//! let (outcome, _stats) = solver.solve().unwrap();
//! let assignment = outcome.into_assignment().unwrap();
//! assert_eq!(assignment.get(&a), Some(&StandardValue::Int(2)));
//! assert_eq!(assignment.get(&b), Some(&StandardValue::Int(1)));
//! ```
//!
//! [`Variable`]: representation::variable::Variable
//! [`Constraint`]: representation::constraint::Constraint
//! [`UnaryConstraint`]: representation::constraints::unary::UnaryConstraint
//! [`DifferenceConstraint`]: representation::constraints::difference::DifferenceConstraint
//! [`ImplicationConstraint`]: representation::constraints::implication::ImplicationConstraint
//! [`BacktrackSolver`]: solver::backtrack::BacktrackSolver
//! [`MacSolver`]: solver::mac::MacSolver
//! [`HeuristicMacSolver`]: solver::heuristic_mac::HeuristicMacSolver
//! [`Solver::solve`]: solver::Solver::solve
//! [`SolveOutcome`]: solver::outcome::SolveOutcome

pub mod error;
pub mod examples;
pub mod representation;
pub mod solver;
