//! End-of-game evaluation.
//!
//! Checked after every match and when the clock reaches zero. A full
//! board of matches always beats the clock.

use serde::{Deserialize, Serialize};

use crate::cards::Deck;
use crate::session::Countdown;

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// All pairs found.
    Victory,
    /// Time ran out first.
    Defeat,
}

/// Decide whether the game is over.
///
/// Returns `None` while unmatched cards remain and time is left.
#[must_use]
pub fn evaluate(deck: &Deck, clock: &Countdown) -> Option<Outcome> {
    if deck.all_matched() {
        Some(Outcome::Victory)
    } else if clock.is_expired() {
        Some(Outcome::Defeat)
    } else {
        None
    }
}
