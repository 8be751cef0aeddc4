//! Adapter between a presentation layer and a `GameSession`.
//!
//! The host translates platform input into `Input` values and renders
//! whatever reaches its `EventSink`. The session itself stays free of
//! any UI dependency.

pub mod queue;
pub mod sink;

pub use queue::{Driver, Input};
pub use sink::{EventSink, FnSink};
