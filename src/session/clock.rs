//! Countdown clock.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// A countdown that runs from `total` to zero and then stays there.
///
/// Once stopped it ignores further time.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Countdown {
    total: Duration,
    remaining: Duration,
    stopped: bool,
}

impl Countdown {
    #[must_use]
    pub fn new(total: Duration) -> Self {
        Self {
            total,
            remaining: total,
            stopped: false,
        }
    }

    /// Subtract `elapsed`, clamping at zero. Returns the time left.
    pub fn advance(&mut self, elapsed: Duration) -> Duration {
        if !self.stopped {
            self.remaining = self.remaining.saturating_sub(elapsed);
        }
        self.remaining
    }

    /// Freeze the clock at its current value.
    pub fn stop(&mut self) {
        self.stopped = true;
    }

    #[must_use]
    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.remaining.is_zero()
    }

    #[must_use]
    pub fn remaining(&self) -> Duration {
        self.remaining
    }

    #[must_use]
    pub fn total(&self) -> Duration {
        self.total
    }

    /// Share of the countdown still left, in `0.0..=1.0`.
    #[must_use]
    pub fn fraction_remaining(&self) -> f64 {
        if self.total.is_zero() {
            return 0.0;
        }
        self.remaining.as_secs_f64() / self.total.as_secs_f64()
    }
}
