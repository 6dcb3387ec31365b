//! The immutable description of a problem: variables, values, and constraints.
//!
//! Everything in this module is constructed once by the problem encoder and
//! treated as read-only by the engine. The mutable search state (domain
//! snapshots, partial assignments) lives in persistent `im` collections, so
//! "copying" a state for a search branch is cheap structural sharing.

pub mod constraint;
pub mod constraints;
pub mod value;
pub mod variable;

use crate::representation::{value::ValueEquality, variable::Variable};

/// A partial or complete assignment: one value per assigned variable.
pub type Assignment<V> = im::HashMap<Variable<V>, V>;

/// A per-branch domain mapping: the candidate values still viable for each
/// variable. Filtering always happens on these snapshots, never on the
/// declared domains inside [`Variable`].
pub type Domains<V> = im::HashMap<Variable<V>, im::HashSet<V>>;

/// A set of variables.
pub type VariableSet<V> = im::HashSet<Variable<V>>;

/// Builds the scope set of a binary relation, collapsing to a single element
/// when both endpoints are the same variable.
pub(crate) fn binary_scope<V: ValueEquality>(
    first: &Variable<V>,
    second: &Variable<V>,
) -> VariableSet<V> {
    let mut scope = VariableSet::new();
    scope.insert(first.clone());
    scope.insert(second.clone());
    scope
}
