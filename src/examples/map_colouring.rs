//! The classic map-colouring problem, built entirely from
//! [`DifferenceConstraint`]s: adjacent regions must not share a colour.
//!
//! Doubles as an end-to-end exercise of every solver variant and as the
//! problem the benchmarks are run on.

use std::sync::Arc;

use crate::representation::{
    constraint::ConstraintRef, constraints::difference::DifferenceConstraint, variable::Variable,
    VariableSet,
};

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Colour {
    Red,
    Green,
    Blue,
}

/// The states and territories of Australia with their adjacencies. Tasmania
/// is unconstrained.
pub fn australia() -> (VariableSet<Colour>, Vec<ConstraintRef<Colour>>) {
    let palette: im::HashSet<Colour> = [Colour::Red, Colour::Green, Colour::Blue]
        .iter()
        .cloned()
        .collect();

    let region = |name: &str| Variable::new(name, palette.clone());
    let wa = region("WA");
    let nt = region("NT");
    let sa = region("SA");
    let q = region("Q");
    let nsw = region("NSW");
    let v = region("V");
    let t = region("T");

    let borders = [
        (&wa, &nt),
        (&wa, &sa),
        (&nt, &sa),
        (&nt, &q),
        (&sa, &q),
        (&sa, &nsw),
        (&sa, &v),
        (&q, &nsw),
        (&nsw, &v),
    ];
    let constraints: Vec<ConstraintRef<Colour>> = borders
        .iter()
        .map(|(a, b)| {
            Arc::new(DifferenceConstraint::new((*a).clone(), (*b).clone()))
                as ConstraintRef<Colour>
        })
        .collect();

    let variables: VariableSet<Colour> = [wa, nt, sa, q, nsw, v, t].iter().cloned().collect();
    (variables, constraints)
}
