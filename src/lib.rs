//! # memory-match
//!
//! Rules core for a single-player memory matching card game.
//!
//! A board of face-down cards is dealt with every value appearing twice.
//! The player flips two cards at a time; equal values leave the board,
//! different values turn back over. Finding every pair before the
//! countdown runs out wins.
//!
//! ## Design Principles
//!
//! 1. **No UI**: The core takes two inputs (`flip`, `tick`) and returns
//!    events. Rendering, animation, and sound live in the host.
//!
//! 2. **Deterministic**: All randomness flows through a seeded `GameRng`,
//!    so a deal can be reproduced from its seed.
//!
//! 3. **Configuration Over Literals**: Board size, value range, countdown
//!    and mismatch delay come from `MatchConfig`.
//!
//! ## Modules
//!
//! - `core`: Configuration, errors, RNG
//! - `cards`: Card state and deck generation
//! - `rules`: Win/loss evaluation
//! - `session`: The flip/match state machine and countdown
//! - `driver`: Serialized input queue and event sinks for hosts
//!
//! ## Example
//!
//! ```
//! use std::time::Duration;
//! use memory_match::{Deck, GameEvent, GameSession, MatchConfig};
//!
//! let config = MatchConfig::new()
//!     .with_pair_count(2)
//!     .with_value_range(1..=2)
//!     .with_countdown(Duration::from_millis(1000));
//! let deck = Deck::from_values([1, 2, 1, 2]).unwrap();
//! let mut session = GameSession::with_deck(config, deck).unwrap();
//!
//! session.flip(0);
//! let events = session.flip(2);
//! assert!(events.contains(&GameEvent::CardsMatched(0, 2)));
//! ```

pub mod cards;
pub mod core;
pub mod driver;
pub mod rules;
pub mod session;

// Re-export commonly used types
pub use crate::core::{GameRng, GameRngState, MatchConfig, MatchError, Result};

pub use crate::cards::{Card, CardFace, CardValue, Deck};

pub use crate::rules::Outcome;

pub use crate::session::{Countdown, Events, GameEvent, GameSession, SessionStats, SessionStatus};

pub use crate::driver::{Driver, EventSink, FnSink, Input};
