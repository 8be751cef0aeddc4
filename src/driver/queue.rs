//! Serialized input dispatch.
//!
//! Flips and ticks from different sources go through one FIFO queue, so a
//! tick is never applied in the middle of a flip comparison.

use std::collections::VecDeque;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::sink::EventSink;
use crate::session::{GameSession, SessionStatus};

/// An input from the presentation layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Input {
    /// Player tapped the card at this board index.
    Flip(usize),
    /// Clock advanced by this much.
    Tick(Duration),
}

/// Owns a session and feeds it one input at a time.
pub struct Driver<S> {
    session: GameSession,
    sink: S,
    queue: VecDeque<Input>,
}

impl<S: EventSink> Driver<S> {
    #[must_use]
    pub fn new(session: GameSession, sink: S) -> Self {
        Self {
            session,
            sink,
            queue: VecDeque::new(),
        }
    }

    /// Queue an input. Nothing happens until `pump`.
    pub fn submit(&mut self, input: Input) {
        self.queue.push_back(input);
    }

    /// Number of inputs waiting.
    #[must_use]
    pub fn queued(&self) -> usize {
        self.queue.len()
    }

    /// Apply every queued input in order, forwarding events to the sink.
    ///
    /// Inputs left over after the game ends are discarded. Returns the
    /// number of inputs applied.
    pub fn pump(&mut self) -> usize {
        let mut applied = 0;

        while let Some(input) = self.queue.pop_front() {
            if self.session.is_over() {
                tracing::debug!(dropped = self.queue.len() + 1, "game over, dropping inputs");
                self.queue.clear();
                break;
            }

            let events = match input {
                Input::Flip(index) => self.session.flip(index),
                Input::Tick(elapsed) => self.session.tick(elapsed),
            };
            for event in &events {
                self.sink.emit(event);
            }
            applied += 1;
        }

        applied
    }

    /// Submit all `inputs` and pump. Returns the final status.
    pub fn run(&mut self, inputs: impl IntoIterator<Item = Input>) -> SessionStatus {
        self.queue.extend(inputs);
        self.pump();
        self.session.status()
    }

    #[must_use]
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    #[must_use]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_parts(self) -> (GameSession, S) {
        (self.session, self.sink)
    }
}
