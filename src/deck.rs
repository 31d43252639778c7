//! The draw pile and discard pile.

use alloc::vec::Vec;

use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, RANK_KING, Suit};

/// The 52-card universe, partitioned between a draw pile and a discard pile.
///
/// Both piles are ordered with the top card last. The piles are only mutated
/// through the methods below, so the deck never duplicates or loses a card:
/// every card that leaves one pile is either returned to the caller or lands
/// in the other pile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    /// Undealt cards, face down, top last.
    draw_pile: Vec<Card>,
    /// Dealt-but-unplayed cards, face up, most recent last.
    discard_pile: Vec<Card>,
}

impl Deck {
    /// Creates an empty deck. Call [`Deck::reset`] before first use.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            draw_pile: Vec::new(),
            discard_pile: Vec::new(),
        }
    }

    /// Creates a deck with the given draw pile (top card last) and an empty
    /// discard pile.
    ///
    /// Intended for setting up deterministic positions in tests and demos;
    /// the caller is responsible for providing sensible contents.
    #[must_use]
    pub const fn with_draw_pile(draw_pile: Vec<Card>) -> Self {
        Self {
            draw_pile,
            discard_pile: Vec::new(),
        }
    }

    /// Rebuilds the full 52-card set face down, shuffles it into the draw
    /// pile, and clears the discard pile.
    pub fn reset(&mut self, rng: &mut ChaCha8Rng) {
        self.draw_pile.clear();
        self.draw_pile.reserve(DECK_SIZE);

        for suit in Suit::ALL {
            for rank in 1..=RANK_KING {
                self.draw_pile.push(Card::new(suit, rank));
            }
        }

        self.draw_pile.shuffle(rng);
        self.discard_pile.clear();
    }

    /// Removes and returns the top card of the draw pile.
    ///
    /// The card's face orientation is left untouched; the caller decides
    /// whether to flip it.
    pub fn draw(&mut self) -> Option<Card> {
        self.draw_pile.pop()
    }

    /// Moves every discard card back into the draw pile, face down, in a
    /// freshly shuffled order, leaving the discard pile empty.
    ///
    /// The caller is expected to have checked that the draw pile is empty;
    /// any cards still in it simply join the reshuffle.
    pub fn shuffle_in_discard_pile(&mut self, rng: &mut ChaCha8Rng) {
        for mut card in self.discard_pile.drain(..) {
            if card.is_face_up() {
                card.flip();
            }
            self.draw_pile.push(card);
        }

        self.draw_pile.shuffle(rng);
    }

    /// Places a card on top of the discard pile.
    pub fn push_discard(&mut self, card: Card) {
        self.discard_pile.push(card);
    }

    /// Removes and returns the top card of the discard pile.
    pub fn pop_discard(&mut self) -> Option<Card> {
        self.discard_pile.pop()
    }

    /// Returns the top card of the discard pile without removing it.
    #[must_use]
    pub fn peek_discard(&self) -> Option<Card> {
        self.discard_pile.last().copied()
    }

    /// The draw pile, top card last.
    #[must_use]
    pub fn draw_pile(&self) -> &[Card] {
        &self.draw_pile
    }

    /// The discard pile, most recent card last.
    #[must_use]
    pub fn discard_pile(&self) -> &[Card] {
        &self.discard_pile
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}
