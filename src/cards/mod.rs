//! Cards and decks.
//!
//! ## Key Types
//!
//! - `CardValue`: Face value; equal values pair up
//! - `Card`: Runtime card state (flipped, matched)
//! - `CardFace`: What the player sees, derived from `Card`
//! - `Deck`: Shuffled board of exactly two cards per value

pub mod card;
pub mod deck;

pub use card::{Card, CardFace, CardValue};
pub use deck::Deck;
