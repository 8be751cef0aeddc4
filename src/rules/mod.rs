//! Win and loss conditions.
//!
//! The session calls `evaluate` at each point the game could end and
//! never decides the outcome on its own.

pub mod engine;

pub use engine::{evaluate, Outcome};
