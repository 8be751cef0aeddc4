//! Game session: the flip/match state machine and its clock.
//!
//! ## Card States
//!
//! `FaceDown -> FaceUp -> {Matched | FaceDown}`. Matched is terminal.
//!
//! ## Inputs
//!
//! - `flip(index)`: player taps a card
//! - `tick(elapsed)`: countdown update
//!
//! Each input returns the `GameEvent`s it caused, in order.

pub mod clock;
pub mod event;
pub mod game;

pub use clock::Countdown;
pub use event::{Events, GameEvent};
pub use game::{GameSession, SessionStats, SessionStatus};
