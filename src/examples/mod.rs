//! Worked problems kept in-crate as integration exercises for the engine.

pub mod map_colouring;
