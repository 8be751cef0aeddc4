//! Event sinks: where a driver delivers session events.

use crate::session::GameEvent;

/// Receives events in the order the session produced them.
///
/// Presentation layers implement this to render, animate, or play sound.
pub trait EventSink {
    fn emit(&mut self, event: &GameEvent);
}

/// Collects events, mostly for tests and replays.
impl EventSink for Vec<GameEvent> {
    fn emit(&mut self, event: &GameEvent) {
        self.push(event.clone());
    }
}

/// Adapts a closure into an `EventSink`.
pub struct FnSink<F>(pub F);

impl<F: FnMut(&GameEvent)> EventSink for FnSink<F> {
    fn emit(&mut self, event: &GameEvent) {
        (self.0)(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec_sink() {
        let mut sink = Vec::new();
        sink.emit(&GameEvent::GameWon);
        assert_eq!(sink, vec![GameEvent::GameWon]);
    }

    #[test]
    fn test_fn_sink() {
        let mut count = 0;
        {
            let mut sink = FnSink(|_: &GameEvent| count += 1);
            sink.emit(&GameEvent::CardFlipped(0));
            sink.emit(&GameEvent::CardFlipped(1));
        }
        assert_eq!(count, 2);
    }
}
