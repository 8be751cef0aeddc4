//! Deck generation.
//!
//! A deck holds exactly two cards per value in random order. Values are
//! drawn without replacement by a set-based rejection sampler; the count
//! check happens first so sampling always terminates.

use std::ops::RangeInclusive;

use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};

use super::card::{Card, CardValue};
use crate::core::error::{MatchError, Result};
use crate::core::{GameRng, MatchConfig};

/// The ordered board of cards for one game.
///
/// Serializes as the card list. Deserializing runs the same pairing
/// checks as `from_values`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Card>", into = "Vec<Card>")]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Deal a shuffled deck of `pair_count` pairs drawn from `value_range`.
    ///
    /// Fails with `InvalidConfiguration` if the range cannot supply
    /// `pair_count` distinct values.
    pub fn generate(
        pair_count: usize,
        value_range: RangeInclusive<u32>,
        rng: &mut GameRng,
    ) -> Result<Self> {
        let config = MatchConfig::new()
            .with_pair_count(pair_count)
            .with_value_range(value_range);
        Self::from_config(&config, rng)
    }

    /// Deal a deck for a configuration.
    ///
    /// Value selection and shuffling draw from separate forks of `rng`.
    pub fn from_config(config: &MatchConfig, rng: &mut GameRng) -> Result<Self> {
        config.validate()?;

        let mut select_rng = rng.fork();
        let mut shuffle_rng = rng.fork();

        let values = select_values(config.pair_count, &config.value_range, &mut select_rng);

        let mut cards = Vec::with_capacity(config.card_count());
        for value in values {
            cards.push(Card::new(value));
            cards.push(Card::new(value));
        }

        shuffle_rng.shuffle(&mut cards);
        Ok(Self { cards })
    }

    /// Build a deck from an explicit layout.
    ///
    /// Every value must appear exactly twice. Used to replay a known board.
    pub fn from_values(values: impl IntoIterator<Item = u32>) -> Result<Self> {
        let cards: Vec<Card> = values
            .into_iter()
            .map(|v| Card::new(CardValue::new(v)))
            .collect();
        Self::try_from(cards)
    }

    /// Number of cards on the board.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of pairs on the board.
    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.cards.len() / 2
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Card> {
        self.cards.get_mut(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Card values in board order.
    #[must_use]
    pub fn values(&self) -> Vec<CardValue> {
        self.cards.iter().map(|c| c.value).collect()
    }

    /// Have all pairs been found?
    #[must_use]
    pub fn all_matched(&self) -> bool {
        self.cards.iter().all(|c| c.matched)
    }

    /// Cards still in play.
    #[must_use]
    pub fn unmatched_count(&self) -> usize {
        self.cards.iter().filter(|c| !c.matched).count()
    }

    /// Pairs already removed from play.
    #[must_use]
    pub fn matched_pairs(&self) -> usize {
        (self.cards.len() - self.unmatched_count()) / 2
    }

    /// Mutable access to two distinct cards at once.
    ///
    /// Returns `None` if the indices are equal or out of bounds.
    pub(crate) fn pair_mut(&mut self, a: usize, b: usize) -> Option<(&mut Card, &mut Card)> {
        if a == b || a >= self.cards.len() || b >= self.cards.len() {
            return None;
        }

        if a < b {
            let (left, right) = self.cards.split_at_mut(b);
            Some((&mut left[a], &mut right[0]))
        } else {
            let (left, right) = self.cards.split_at_mut(a);
            Some((&mut right[0], &mut left[b]))
        }
    }
}

impl TryFrom<Vec<Card>> for Deck {
    type Error = MatchError;

    /// Accepts a board only if every value appears exactly twice and both
    /// cards of a pair agree on `matched`.
    fn try_from(cards: Vec<Card>) -> Result<Self> {
        if cards.is_empty() {
            return Err(MatchError::invalid("deck layout is empty"));
        }

        if let Some(reason) = pairing_error(&cards) {
            return Err(MatchError::invalid(reason));
        }

        Ok(Self { cards })
    }
}

impl From<Deck> for Vec<Card> {
    fn from(deck: Deck) -> Self {
        deck.cards
    }
}

/// First pairing problem in a layout, by value order.
fn pairing_error(cards: &[Card]) -> Option<String> {
    let mut pairs: FxHashMap<CardValue, (usize, usize)> = FxHashMap::default();
    for card in cards {
        let (total, matched) = pairs.entry(card.value).or_insert((0, 0));
        *total += 1;
        *matched += usize::from(card.matched);
    }

    let mut values: Vec<_> = pairs.into_iter().collect();
    values.sort_unstable();

    values.into_iter().find_map(|(value, (total, matched))| {
        if total != 2 {
            Some(format!("{value} appears {total} times, expected exactly 2"))
        } else if matched == 1 {
            Some(format!("{value} is matched on only one card"))
        } else {
            None
        }
    })
}

/// Pick `count` distinct values from `range`. Caller guarantees
/// `count` does not exceed the size of the range.
fn select_values(count: usize, range: &RangeInclusive<u32>, rng: &mut GameRng) -> Vec<CardValue> {
    let mut seen: FxHashSet<u32> = FxHashSet::default();
    let mut selected = Vec::with_capacity(count);

    while selected.len() < count {
        let candidate = rng.gen_range_inclusive(range.clone());
        if seen.insert(candidate) {
            tracing::debug!(value = candidate, "selected card value");
            selected.push(CardValue::new(candidate));
        }
    }

    selected
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts(deck: &Deck) -> FxHashMap<CardValue, usize> {
        let mut counts = FxHashMap::default();
        for card in deck.iter() {
            *counts.entry(card.value).or_insert(0) += 1;
        }
        counts
    }

    #[test]
    fn test_default_deal() {
        let mut rng = GameRng::new(42);
        let deck = Deck::from_config(&MatchConfig::default(), &mut rng).unwrap();

        assert_eq!(deck.len(), 16);
        assert_eq!(deck.pair_count(), 8);

        let counts = counts(&deck);
        assert_eq!(counts.len(), 8);
        assert!(counts.values().all(|&n| n == 2));
        assert!(counts.keys().all(|v| (1..=13).contains(&v.raw())));
        assert!(deck.iter().all(|c| c.is_flippable()));
    }

    #[test]
    fn test_same_seed_same_deal() {
        let a = Deck::generate(8, 1..=13, &mut GameRng::new(9)).unwrap();
        let b = Deck::generate(8, 1..=13, &mut GameRng::new(9)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_exhausts_range() {
        // Every value in the range must be used exactly once as a pair.
        let deck = Deck::generate(13, 1..=13, &mut GameRng::new(1)).unwrap();
        let mut values: Vec<u32> = counts(&deck).keys().map(|v| v.raw()).collect();
        values.sort_unstable();
        assert_eq!(values, (1..=13).collect::<Vec<_>>());
    }

    #[test]
    fn test_too_many_pairs_fails_fast() {
        let result = Deck::generate(3, 1..=2, &mut GameRng::new(1));
        assert!(matches!(result, Err(MatchError::InvalidConfiguration { .. })));
    }

    #[test]
    fn test_from_values() {
        let deck = Deck::from_values([1, 2, 1, 2]).unwrap();
        assert_eq!(
            deck.values(),
            vec![CardValue(1), CardValue(2), CardValue(1), CardValue(2)]
        );
    }

    #[test]
    fn test_from_values_rejects_unpaired() {
        assert!(Deck::from_values([1, 2, 1]).is_err());
        assert!(Deck::from_values([1, 1, 1, 1]).is_err());
        assert!(Deck::from_values(std::iter::empty()).is_err());
    }

    #[test]
    fn test_matched_counts() {
        let mut deck = Deck::from_values([1, 2, 1, 2]).unwrap();
        assert_eq!(deck.unmatched_count(), 4);
        assert!(!deck.all_matched());

        let (a, b) = deck.pair_mut(2, 0).unwrap();
        a.matched = true;
        b.matched = true;

        assert_eq!(deck.matched_pairs(), 1);
        assert_eq!(deck.unmatched_count(), 2);
        assert!(deck.get(0).unwrap().matched);
        assert!(deck.get(2).unwrap().matched);
    }

    #[test]
    fn test_pair_mut_rejects_bad_indices() {
        let mut deck = Deck::from_values([1, 1]).unwrap();
        assert!(deck.pair_mut(0, 0).is_none());
        assert!(deck.pair_mut(0, 2).is_none());
    }

    #[test]
    fn test_deal_uses_separate_streams() {
        let config = MatchConfig::new().with_pair_count(4).with_value_range(1..=9);
        let deck = Deck::from_config(&config, &mut GameRng::new(11)).unwrap();

        let mut rng = GameRng::new(11);
        let mut select_rng = rng.fork();
        let mut shuffle_rng = rng.fork();
        let mut expected: Vec<Card> = select_values(4, &(1..=9), &mut select_rng)
            .into_iter()
            .flat_map(|v| [Card::new(v), Card::new(v)])
            .collect();
        shuffle_rng.shuffle(&mut expected);

        assert_eq!(Vec::from(deck), expected);
    }

    #[test]
    fn test_deserialize_round_trip() {
        let mut deck = Deck::from_values([1, 2, 1, 2]).unwrap();
        let (a, b) = deck.pair_mut(0, 2).unwrap();
        a.matched = true;
        b.matched = true;

        let json = serde_json::to_string(&deck).unwrap();
        let back: Deck = serde_json::from_str(&json).unwrap();
        assert_eq!(back, deck);
    }

    #[test]
    fn test_deserialize_rejects_unpaired() {
        let json = r#"[
            {"value": 1, "flipped": false, "matched": false},
            {"value": 2, "flipped": false, "matched": false},
            {"value": 3, "flipped": false, "matched": true}
        ]"#;

        let err = serde_json::from_str::<Deck>(json).unwrap_err();
        assert!(err.to_string().contains("card1 appears 1 times"));
    }

    #[test]
    fn test_deserialize_rejects_half_matched_pair() {
        let json = r#"[
            {"value": 4, "flipped": false, "matched": true},
            {"value": 4, "flipped": false, "matched": false}
        ]"#;

        let err = serde_json::from_str::<Deck>(json).unwrap_err();
        assert!(err.to_string().contains("card4 is matched on only one card"));
    }
}
