//! Per-suit foundation piles.

use crate::card::{RANK_KING, Suit};

/// A per-suit ascending accumulator from Ace to King.
///
/// Only the highest rank accepted so far is tracked; foundation sequencing is
/// fully determined by the suit plus that count, so the cards themselves are
/// not retained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FoundationPile {
    /// The suit this pile accepts.
    suit: Suit,
    /// Highest rank accepted so far (0 = empty).
    value: u8,
}

impl FoundationPile {
    /// Creates an empty foundation pile for the given suit.
    #[must_use]
    pub const fn new(suit: Suit) -> Self {
        Self { suit, value: 0 }
    }

    /// Returns the suit this pile accepts.
    #[must_use]
    pub const fn suit(&self) -> Suit {
        self.suit
    }

    /// Returns the highest rank accepted so far (0 = empty).
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.value
    }

    /// Returns whether the pile has reached the King.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.value == RANK_KING
    }

    /// Empties the pile.
    pub const fn reset(&mut self) {
        self.value = 0;
    }

    /// Records one more accepted card.
    ///
    /// Legality must already have been checked with
    /// [`rules::foundation_accepts`](crate::rules::foundation_accepts); this
    /// is the unconditional apply step.
    pub const fn add_card(&mut self) {
        self.value += 1;
    }
}
