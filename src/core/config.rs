//! Game configuration.
//!
//! `MatchConfig` carries every tunable the rules depend on. The defaults
//! reproduce the classic layout: 8 pairs drawn from values 1 through 13
//! with a ten second clock.

use std::ops::RangeInclusive;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::error::{MatchError, Result};

/// Configuration for a single game.
///
/// Deserializing a partial document fills missing fields from `Default`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Number of distinct values on the board. Board size is twice this.
    pub pair_count: usize,

    /// Values the deck is drawn from, without replacement.
    pub value_range: RangeInclusive<u32>,

    /// Time allowed before the game is lost.
    pub countdown: Duration,

    /// How long a mismatched pair stays face up before turning back.
    ///
    /// Zero turns the pair back as part of the second flip.
    pub mismatch_delay: Duration,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            pair_count: 8,
            value_range: 1..=13,
            countdown: Duration::from_secs(10),
            mismatch_delay: Duration::from_millis(500),
        }
    }
}

impl MatchConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of pairs.
    #[must_use]
    pub fn with_pair_count(mut self, pair_count: usize) -> Self {
        self.pair_count = pair_count;
        self
    }

    /// Set the range values are drawn from.
    #[must_use]
    pub fn with_value_range(mut self, range: RangeInclusive<u32>) -> Self {
        self.value_range = range;
        self
    }

    /// Set the countdown length.
    #[must_use]
    pub fn with_countdown(mut self, countdown: Duration) -> Self {
        self.countdown = countdown;
        self
    }

    /// Set the mismatch reveal delay.
    #[must_use]
    pub fn with_mismatch_delay(mut self, delay: Duration) -> Self {
        self.mismatch_delay = delay;
        self
    }

    /// Board size (two cards per pair).
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.pair_count * 2
    }

    /// Number of distinct values in `value_range`.
    #[must_use]
    pub fn available_values(&self) -> usize {
        let (start, end) = (*self.value_range.start(), *self.value_range.end());
        if start > end {
            0
        } else {
            (end - start) as usize + 1
        }
    }

    /// Check that a deck can be dealt and a game can be played.
    pub fn validate(&self) -> Result<()> {
        if self.pair_count == 0 {
            return Err(MatchError::invalid("pair_count must be at least 1"));
        }

        let available = self.available_values();
        if available == 0 {
            return Err(MatchError::invalid(format!(
                "value_range {}..={} is empty",
                self.value_range.start(),
                self.value_range.end()
            )));
        }

        if self.pair_count > available {
            return Err(MatchError::invalid(format!(
                "pair_count {} exceeds {} available values",
                self.pair_count, available
            )));
        }

        if self.countdown.is_zero() {
            return Err(MatchError::invalid("countdown must be greater than zero"));
        }

        Ok(())
    }
}
