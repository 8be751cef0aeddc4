//! The session state machine.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::clock::Countdown;
use super::event::{Events, GameEvent};
use crate::cards::{CardFace, Deck};
use crate::core::error::{MatchError, Result};
use crate::core::{GameRng, MatchConfig};
use crate::rules::{self, Outcome};

/// Where the session is in its lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SessionStatus {
    #[default]
    InProgress,
    Won,
    Lost,
}

impl SessionStatus {
    #[must_use]
    pub fn is_over(self) -> bool {
        self != SessionStatus::InProgress
    }
}

impl From<Outcome> for SessionStatus {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Victory => SessionStatus::Won,
            Outcome::Defeat => SessionStatus::Lost,
        }
    }
}

/// Counters for a finished or running game.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionStats {
    /// Accepted flips.
    pub flips: u32,
    pub matches: u32,
    pub mismatches: u32,
}

/// A mismatched pair still showing its faces.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
struct Reveal {
    first: usize,
    second: usize,
    remaining: Duration,
}

impl Reveal {
    fn contains(&self, index: usize) -> bool {
        self.first == index || self.second == index
    }
}

/// One game from deal to victory or defeat.
///
/// ## Invariants
///
/// - At most one card is pending a second flip.
/// - Matched cards never change again.
/// - Once `status` is over, every input is ignored and the clock is stopped.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameSession {
    config: MatchConfig,
    deck: Deck,
    clock: Countdown,
    pending: Option<usize>,
    revealing: Option<Reveal>,
    status: SessionStatus,
    stats: SessionStats,
}

impl GameSession {
    /// Deal a fresh deck and start the clock.
    pub fn new(config: MatchConfig, rng: &mut GameRng) -> Result<Self> {
        let deck = Deck::from_config(&config, rng)?;
        tracing::info!(
            seed = rng.seed(),
            cards = deck.len(),
            countdown_ms = config.countdown.as_millis() as u64,
            "dealt new game"
        );
        Self::with_deck(config, deck)
    }

    /// Start a game on a prepared board.
    ///
    /// `config.pair_count` and `config.value_range` are not consulted;
    /// the deck is taken as-is.
    pub fn with_deck(config: MatchConfig, deck: Deck) -> Result<Self> {
        if config.countdown.is_zero() {
            return Err(MatchError::invalid("countdown must be greater than zero"));
        }

        Ok(Self {
            clock: Countdown::new(config.countdown),
            config,
            deck,
            pending: None,
            revealing: None,
            status: SessionStatus::InProgress,
            stats: SessionStats::default(),
        })
    }

    // === Inputs ===

    /// The player taps the card at `index`.
    ///
    /// Ignored (no events) when the game is over, the index is off the
    /// board, or the card is matched or already face up.
    pub fn flip(&mut self, index: usize) -> Events {
        let mut events = Events::new();

        if self.status.is_over() || self.clock.is_expired() {
            tracing::debug!(index, "flip ignored: game over");
            return events;
        }

        let Some(card) = self.deck.get(index) else {
            tracing::debug!(index, "flip ignored: no such card");
            return events;
        };

        let in_reveal = self.revealing.is_some_and(|r| r.contains(index));
        if card.matched || (card.flipped && !in_reveal) {
            tracing::debug!(index, face = ?card.face(), "flip ignored");
            return events;
        }

        // A new flip cuts the mismatch reveal short.
        self.hide_revealed(&mut events);

        if let Some(card) = self.deck.get_mut(index) {
            card.flipped = true;
        }
        self.stats.flips += 1;
        events.push(GameEvent::CardFlipped(index));

        match self.pending.take() {
            None => self.pending = Some(index),
            Some(first) => self.compare(first, index, &mut events),
        }

        events
    }

    /// Advance the clock by `elapsed`.
    ///
    /// Also counts down a pending mismatch reveal. Reaching zero ends the
    /// game unless it was already won.
    pub fn tick(&mut self, elapsed: Duration) -> Events {
        let mut events = Events::new();

        if self.status.is_over() {
            return events;
        }

        if let Some(reveal) = self.revealing.as_mut() {
            reveal.remaining = reveal.remaining.saturating_sub(elapsed);
            if reveal.remaining.is_zero() {
                self.hide_revealed(&mut events);
            }
        }

        let remaining = self.clock.advance(elapsed);
        events.push(GameEvent::TimeRemaining(remaining));

        if self.clock.is_expired() {
            self.clock.stop();
            self.check_end(&mut events);
        }

        events
    }

    // === Transitions ===

    fn compare(&mut self, first: usize, second: usize, events: &mut Events) {
        let delay = self.config.mismatch_delay;
        let Some((a, b)) = self.deck.pair_mut(first, second) else {
            return;
        };

        if a.pairs_with(b) {
            a.matched = true;
            b.matched = true;
            self.stats.matches += 1;
            tracing::debug!(first, second, value = %a.value, "cards matched");
            events.push(GameEvent::CardsMatched(first, second));
            self.check_end(events);
        } else {
            self.stats.mismatches += 1;
            tracing::debug!(first, second, "cards mismatched");
            events.push(GameEvent::CardsMismatched(first, second));
            self.revealing = Some(Reveal {
                first,
                second,
                remaining: delay,
            });
            if delay.is_zero() {
                self.hide_revealed(events);
            }
        }
    }

    fn hide_revealed(&mut self, events: &mut Events) {
        let Some(reveal) = self.revealing.take() else {
            return;
        };

        if let Some((a, b)) = self.deck.pair_mut(reveal.first, reveal.second) {
            a.flipped = false;
            b.flipped = false;
        }
        events.push(GameEvent::CardsHidden(reveal.first, reveal.second));
    }

    fn check_end(&mut self, events: &mut Events) {
        let Some(outcome) = rules::evaluate(&self.deck, &self.clock) else {
            return;
        };

        self.status = outcome.into();
        self.clock.stop();
        self.pending = None;
        // No tick runs after the game ends, so the reveal cannot expire later.
        self.hide_revealed(events);

        tracing::info!(
            ?outcome,
            remaining_ms = self.clock.remaining().as_millis() as u64,
            flips = self.stats.flips,
            matched_pairs = self.deck.matched_pairs(),
            "game over"
        );

        events.push(match outcome {
            Outcome::Victory => GameEvent::GameWon,
            Outcome::Defeat => GameEvent::GameLost,
        });
    }

    // === Accessors ===

    #[must_use]
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    #[must_use]
    pub fn status(&self) -> SessionStatus {
        self.status
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.status.is_over()
    }

    /// Time left on the clock.
    #[must_use]
    pub fn remaining(&self) -> Duration {
        self.clock.remaining()
    }

    #[must_use]
    pub fn clock(&self) -> &Countdown {
        &self.clock
    }

    /// The card waiting for a second flip, if any.
    #[must_use]
    pub fn pending(&self) -> Option<usize> {
        self.pending
    }

    /// The mismatched pair still face up, if any.
    #[must_use]
    pub fn revealing(&self) -> Option<(usize, usize)> {
        self.revealing.map(|r| (r.first, r.second))
    }

    #[must_use]
    pub fn card_face(&self, index: usize) -> Option<CardFace> {
        self.deck.get(index).map(|c| c.face())
    }

    #[must_use]
    pub fn stats(&self) -> SessionStats {
        self.stats
    }
}
