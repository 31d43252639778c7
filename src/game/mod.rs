//! Solitaire engine and state management.

use alloc::vec::Vec;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, Suit};
use crate::deck::Deck;
use crate::error::{DrawError, ReshuffleError};
use crate::foundation::FoundationPile;
use crate::sync::Mutex;

mod moves;

/// Number of tableau piles dealt at the start of a game.
pub const TABLEAU_PILES: usize = 7;

/// A Klondike solitaire engine that owns the authoritative game state and
/// enforces the legality of every move.
///
/// The engine owns the deck, the four foundation piles, and the seven
/// tableau piles. All coordination flows through it; a front-end reads pile
/// contents through the accessors and calls the mutating operations in
/// response to gestures, treating any `Err` as "snap the drag back".
pub struct Solitaire {
    /// The draw and discard piles.
    pub deck: Mutex<Deck>,
    /// Foundation piles, indexed by [`Suit::index`].
    pub foundations: Mutex<[FoundationPile; 4]>,
    /// The seven tableau piles, each ordered bottom to top.
    pub tableau: Mutex<[Vec<Card>; TABLEAU_PILES]>,
    /// Random number generator, the sole source of randomness.
    rng: Mutex<ChaCha8Rng>,
}

impl Solitaire {
    /// Creates a new engine with the given seed and a freshly shuffled deck.
    ///
    /// The tableau starts empty; call [`Solitaire::new_game`] to deal.
    ///
    /// # Example
    ///
    /// ```
    /// use klrs::Solitaire;
    ///
    /// let game = Solitaire::new(42);
    /// game.new_game();
    /// assert!(game.draw_card().is_ok());
    /// ```
    #[must_use]
    pub fn new(seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut deck = Deck::new();
        deck.reset(&mut rng);

        Self {
            deck: Mutex::new(deck),
            foundations: Mutex::new(Suit::ALL.map(FoundationPile::new)),
            tableau: Mutex::new(core::array::from_fn(|_| Vec::new())),
            rng: Mutex::new(rng),
        }
    }

    /// Resets all state in place and deals a fresh game.
    ///
    /// The deck is rebuilt and reshuffled, the foundations emptied, and the
    /// tableau cleared. The deal then gives pile *j* (0-indexed) exactly
    /// *j + 1* cards, with only the last card of each pile face up.
    #[expect(
        clippy::significant_drop_tightening,
        reason = "locks are held for entire operation"
    )]
    pub fn new_game(&self) {
        let mut deck = self.deck.lock();
        let mut rng = self.rng.lock();
        deck.reset(&mut rng);
        drop(rng);

        let mut foundations = self.foundations.lock();
        for pile in foundations.iter_mut() {
            pile.reset();
        }
        drop(foundations);

        let mut tableau = self.tableau.lock();
        for pile in tableau.iter_mut() {
            pile.clear();
        }

        // Deal round by round: round i gives one card to each of piles
        // i..7, and the first card of each round (pile i's last) lands
        // face up.
        for round in 0..TABLEAU_PILES {
            for pile_index in round..TABLEAU_PILES {
                if let Some(mut card) = deck.draw() {
                    if pile_index == round {
                        card.flip();
                    }
                    tableau[pile_index].push(card);
                }
            }
        }
    }

    /// Draws the top card of the draw pile onto the discard pile, face up.
    ///
    /// Returns the drawn card.
    ///
    /// # Errors
    ///
    /// Returns an error if the draw pile is empty.
    pub fn draw_card(&self) -> Result<Card, DrawError> {
        let mut deck = self.deck.lock();

        let mut card = deck.draw().ok_or(DrawError::NoCards)?;
        card.flip();
        deck.push_discard(card);

        Ok(card)
    }

    /// Recycles the discard pile into the draw pile.
    ///
    /// Every discarded card returns to the draw pile face down in a freshly
    /// shuffled order. This is the only way to replenish the draw pile
    /// mid-game.
    ///
    /// # Errors
    ///
    /// Returns an error if the draw pile still has cards to draw.
    #[expect(
        clippy::significant_drop_tightening,
        reason = "locks are held for entire operation"
    )]
    pub fn shuffle_discard_pile(&self) -> Result<(), ReshuffleError> {
        let mut deck = self.deck.lock();
        if !deck.draw_pile().is_empty() {
            return Err(ReshuffleError::DrawPileNotEmpty);
        }

        let mut rng = self.rng.lock();
        deck.shuffle_in_discard_pile(&mut rng);

        Ok(())
    }

    /// Returns a copy of the draw pile, top card last.
    #[must_use]
    pub fn draw_pile(&self) -> Vec<Card> {
        self.deck.lock().draw_pile().to_vec()
    }

    /// Returns a copy of the discard pile, most recent card last.
    #[must_use]
    pub fn discard_pile(&self) -> Vec<Card> {
        self.deck.lock().discard_pile().to_vec()
    }

    /// Returns the top card of the discard pile, if any.
    #[must_use]
    pub fn discard_top(&self) -> Option<Card> {
        self.deck.lock().peek_discard()
    }

    /// Returns the number of cards left in the draw pile.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.lock().draw_pile().len()
    }

    /// Returns a copy of the tableau pile at `index`.
    ///
    /// Returns `None` if the index is out of range.
    #[must_use]
    pub fn tableau_pile(&self, index: usize) -> Option<Vec<Card>> {
        self.tableau.lock().get(index).cloned()
    }

    /// Returns a copy of all seven tableau piles.
    #[must_use]
    pub fn tableau_piles(&self) -> [Vec<Card>; TABLEAU_PILES] {
        self.tableau.lock().clone()
    }

    /// Returns the four foundation piles, in [`Suit::ALL`] order.
    #[must_use]
    pub fn foundations(&self) -> [FoundationPile; 4] {
        *self.foundations.lock()
    }

    /// Returns the highest rank accepted by the given suit's foundation.
    #[must_use]
    pub fn foundation_value(&self, suit: Suit) -> u8 {
        self.foundations.lock()[suit.index()].value()
    }

    /// Returns whether the game is won.
    ///
    /// True iff all four foundations have reached the King. Recomputed from
    /// the live foundation values on every call, never cached.
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.foundations.lock().iter().all(FoundationPile::is_complete)
    }
}
