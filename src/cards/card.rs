//! A single card on the board.

use serde::{Deserialize, Serialize};

/// Face value of a card. Two cards with the same value form a pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardValue(pub u32);

impl CardValue {
    /// Create a new card value.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Get the raw value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "card{}", self.0)
    }
}

/// What the player currently sees for a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardFace {
    /// Hidden and available to flip.
    FaceDown,
    /// Showing its value, waiting for comparison or the mismatch revert.
    FaceUp,
    /// Removed from play. Terminal.
    Matched,
}

/// A card instance in a game.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// Face value shared with exactly one other card.
    pub value: CardValue,

    /// Is the face showing? Set on flip, cleared when a mismatch turns back.
    pub flipped: bool,

    /// Has this card's pair been found? Never cleared once set.
    pub matched: bool,
}

impl Card {
    /// Create a face-down card.
    #[must_use]
    pub fn new(value: CardValue) -> Self {
        Self {
            value,
            flipped: false,
            matched: false,
        }
    }

    /// Current face. `matched` takes precedence over `flipped`.
    #[must_use]
    pub fn face(&self) -> CardFace {
        if self.matched {
            CardFace::Matched
        } else if self.flipped {
            CardFace::FaceUp
        } else {
            CardFace::FaceDown
        }
    }

    /// Only face-down, unmatched cards respond to a flip.
    #[must_use]
    pub fn is_flippable(&self) -> bool {
        self.face() == CardFace::FaceDown
    }

    /// Does this card pair with `other`?
    #[must_use]
    pub fn pairs_with(&self, other: &Card) -> bool {
        self.value == other.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_display() {
        assert_eq!(CardValue::new(7).to_string(), "card7");
        assert_eq!(CardValue::new(7).raw(), 7);
    }

    #[test]
    fn test_faces() {
        let mut card = Card::new(CardValue::new(3));
        assert_eq!(card.face(), CardFace::FaceDown);
        assert!(card.is_flippable());

        card.flipped = true;
        assert_eq!(card.face(), CardFace::FaceUp);
        assert!(!card.is_flippable());

        card.matched = true;
        assert_eq!(card.face(), CardFace::Matched);
        assert!(!card.is_flippable());

        // Matched wins even if the flip flag is cleared.
        card.flipped = false;
        assert_eq!(card.face(), CardFace::Matched);
        assert!(!card.is_flippable());
    }

    #[test]
    fn test_pairs_with() {
        let a = Card::new(CardValue::new(1));
        let b = Card::new(CardValue::new(1));
        let c = Card::new(CardValue::new(2));

        assert!(a.pairs_with(&b));
        assert!(!a.pairs_with(&c));
    }
}
