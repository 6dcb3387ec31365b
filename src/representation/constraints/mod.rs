//! The canonical constraint kinds shipped with the engine.

pub mod difference;
pub mod implication;
pub mod unary;
