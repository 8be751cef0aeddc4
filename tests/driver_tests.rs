//! Driver tests: inputs from several sources, one ordered event stream.

use std::time::Duration;

use memory_match::{Deck, Driver, FnSink, GameEvent, GameSession, Input, MatchConfig, SessionStatus};

fn session(values: &[u32]) -> GameSession {
    let config = MatchConfig::new()
        .with_countdown(Duration::from_millis(1000))
        .with_mismatch_delay(Duration::from_millis(200));
    let deck = Deck::from_values(values.iter().copied()).unwrap();
    GameSession::with_deck(config, deck).unwrap()
}

/// Ticks queued between the two flips of a pair do not disturb the
/// comparison.
#[test]
fn test_tick_between_flips_is_serialized() {
    let mut driver = Driver::new(session(&[1, 2, 1, 2]), Vec::new());

    driver.submit(Input::Flip(0));
    driver.submit(Input::Tick(Duration::from_millis(16)));
    driver.submit(Input::Flip(2));
    driver.pump();

    assert_eq!(
        driver.sink().as_slice(),
        &[
            GameEvent::CardFlipped(0),
            GameEvent::TimeRemaining(Duration::from_millis(984)),
            GameEvent::CardFlipped(2),
            GameEvent::CardsMatched(0, 2),
        ]
    );
}

#[test]
fn test_full_game_through_closure_sink() {
    let mut sounds = Vec::new();
    let status = {
        let sink = FnSink(|event: &GameEvent| match event {
            GameEvent::CardFlipped(_) => sounds.push("flip"),
            GameEvent::CardsMatched(..) => sounds.push("match"),
            GameEvent::CardsMismatched(..) => sounds.push("nomatch"),
            _ => {}
        });
        let mut driver = Driver::new(session(&[1, 2, 1, 2]), sink);
        driver.run([
            Input::Flip(0),
            Input::Flip(1),
            Input::Tick(Duration::from_millis(200)),
            Input::Flip(0),
            Input::Flip(2),
            Input::Flip(1),
            Input::Flip(3),
        ])
    };

    assert_eq!(status, SessionStatus::Won);
    assert_eq!(
        sounds,
        vec!["flip", "flip", "nomatch", "flip", "flip", "match", "flip", "flip", "match"]
    );
}

#[test]
fn test_inputs_deserialize() {
    let inputs: Vec<Input> =
        serde_json::from_str(r#"[{"Flip": 3}, {"Tick": {"secs": 0, "nanos": 5000000}}]"#).unwrap();

    assert_eq!(
        inputs,
        vec![Input::Flip(3), Input::Tick(Duration::from_millis(5))]
    );
}
