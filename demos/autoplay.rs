//! Plays one game with a perfect-memory bot and logs every event.
//!
//! ```text
//! RUST_LOG=debug cargo run --example autoplay -- 42
//! ```
//!
//! The optional argument is the deal seed.

use std::time::Duration;

use memory_match::{
    CardFace, CardValue, Driver, EventSink, FnSink, GameEvent, GameRng, GameSession, Input, MatchConfig,
};
use rustc_hash::FxHashMap;
use tracing_subscriber::EnvFilter;

/// Time the bot "thinks" between flips.
const THINK: Duration = Duration::from_millis(250);

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut rng = match std::env::args().nth(1) {
        Some(seed) => GameRng::new(seed.parse()?),
        None => GameRng::from_entropy(),
    };

    let session = GameSession::new(MatchConfig::default(), &mut rng)?;
    let sink = FnSink(|event: &GameEvent| match event {
        GameEvent::TimeRemaining(_) => {}
        other => tracing::info!(?other, "event"),
    });
    let mut driver = Driver::new(session, sink);

    let board = driver.session().deck().len();
    let mut seen: FxHashMap<CardValue, Vec<usize>> = FxHashMap::default();
    let mut next_unseen = 0;

    while !driver.session().is_over() {
        let target = seen
            .values()
            .find(|idx| idx.len() == 2)
            .map(|idx| (idx[0], idx[1]));

        let (first, second) = match target {
            Some(pair) => pair,
            None if next_unseen < board => {
                let first = next_unseen;
                next_unseen += 1;
                let value = flip_and_look(&mut driver, first);
                remember(&mut seen, value, first);

                match seen.get(&value).filter(|idx| idx.len() == 2) {
                    Some(idx) => (idx[0], idx[1]),
                    None if next_unseen < board => {
                        let second = next_unseen;
                        next_unseen += 1;
                        (first, second)
                    }
                    None => break,
                }
            }
            None => break,
        };

        for index in [first, second] {
            if driver.session().card_face(index) == Some(CardFace::FaceDown) {
                let value = flip_and_look(&mut driver, index);
                remember(&mut seen, value, index);
            }
        }

        let deck = driver.session().deck();
        seen.retain(|_, idx| idx.iter().all(|&i| deck.get(i).is_some_and(|c| !c.matched)));
    }

    let (session, _) = driver.into_parts();
    tracing::info!(
        status = ?session.status(),
        remaining_ms = session.remaining().as_millis() as u64,
        stats = ?session.stats(),
        "finished"
    );

    Ok(())
}

/// Flip a card, let the clock run, and read the face that was revealed.
fn flip_and_look<S: EventSink>(driver: &mut Driver<S>, index: usize) -> CardValue {
    driver.submit(Input::Flip(index));
    driver.submit(Input::Tick(THINK));
    driver.pump();

    driver
        .session()
        .deck()
        .get(index)
        .map_or(CardValue::new(0), |c| c.value)
}

fn remember(seen: &mut FxHashMap<CardValue, Vec<usize>>, value: CardValue, index: usize) {
    let slots = seen.entry(value).or_default();
    if !slots.contains(&index) {
        slots.push(index);
    }
}
