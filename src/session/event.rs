//! Events emitted by a session for the presentation layer.
//!
//! Card positions are board indices into the session's `Deck`.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Something the presentation layer should render, animate, or play a
/// sound for.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A card turned face up.
    CardFlipped(usize),
    /// The two cards formed a pair and leave play.
    CardsMatched(usize, usize),
    /// The two cards differ. They stay visible until `CardsHidden`.
    CardsMismatched(usize, usize),
    /// A mismatched pair turned face down again.
    CardsHidden(usize, usize),
    /// Clock update after a tick.
    TimeRemaining(Duration),
    /// Every pair was found.
    GameWon,
    /// Time ran out with pairs left on the board.
    GameLost,
}

impl GameEvent {
    /// Does this event end the game?
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, GameEvent::GameWon | GameEvent::GameLost)
    }
}

/// Events produced by a single input. Rarely more than four.
pub type Events = SmallVec<[GameEvent; 4]>;
