//! Core types: configuration, errors, RNG.
//!
//! Nothing in here knows about cards or turns. The rest of the crate
//! builds on these.

pub mod config;
pub mod error;
pub mod rng;

pub use config::MatchConfig;
pub use error::{MatchError, Result};
pub use rng::{GameRng, GameRngState};
