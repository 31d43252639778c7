use alloc::vec::Vec;

use crate::card::Card;
use crate::error::{FlipError, MoveError};
use crate::rules;

use super::{Solitaire, TABLEAU_PILES};

impl Solitaire {
    /// Plays the top discard card onto its suit's foundation.
    ///
    /// Returns the moved card.
    ///
    /// # Errors
    ///
    /// Returns an error if the discard pile is empty or the card does not
    /// continue its foundation sequence.
    #[expect(
        clippy::significant_drop_tightening,
        reason = "locks are held for entire operation"
    )]
    pub fn play_discard_to_foundation(&self) -> Result<Card, MoveError> {
        let mut deck = self.deck.lock();
        let card = deck.peek_discard().ok_or(MoveError::NoCard)?;

        let mut foundations = self.foundations.lock();
        let foundation = &mut foundations[card.suit.index()];
        if !rules::foundation_accepts(card, foundation.value()) {
            return Err(MoveError::IllegalFoundationMove);
        }

        foundation.add_card();
        deck.pop_discard();

        Ok(card)
    }

    /// Plays the top discard card onto the tableau pile at `target_index`.
    ///
    /// Returns the moved card.
    ///
    /// # Errors
    ///
    /// Returns an error if the index is out of range, the discard pile is
    /// empty, or the card cannot be stacked on the target pile.
    #[expect(
        clippy::significant_drop_tightening,
        reason = "locks are held for entire operation"
    )]
    pub fn play_discard_to_tableau(&self, target_index: usize) -> Result<Card, MoveError> {
        if target_index >= TABLEAU_PILES {
            return Err(MoveError::PileNotFound);
        }

        let mut deck = self.deck.lock();
        let card = deck.peek_discard().ok_or(MoveError::NoCard)?;

        let mut tableau = self.tableau.lock();
        if !rules::tableau_accepts(card, &tableau[target_index]) {
            return Err(MoveError::IllegalTableauMove);
        }

        tableau[target_index].push(card);
        deck.pop_discard();

        Ok(card)
    }

    /// Moves the top card of the tableau pile at `source_index` onto its
    /// suit's foundation.
    ///
    /// Returns the moved card.
    ///
    /// # Errors
    ///
    /// Returns an error if the index is out of range, the pile is empty, the
    /// top card is face down, or the card does not continue its foundation
    /// sequence.
    #[expect(
        clippy::significant_drop_tightening,
        reason = "locks are held for entire operation"
    )]
    pub fn move_tableau_card_to_foundation(&self, source_index: usize) -> Result<Card, MoveError> {
        if source_index >= TABLEAU_PILES {
            return Err(MoveError::PileNotFound);
        }

        let mut tableau = self.tableau.lock();
        let pile = &mut tableau[source_index];
        let card = pile.last().copied().ok_or(MoveError::NoCard)?;

        // A run move can leave a face-down card on top until it is flipped;
        // such a card is not playable.
        if !card.is_face_up() {
            return Err(MoveError::FaceDownCard);
        }

        let mut foundations = self.foundations.lock();
        let foundation = &mut foundations[card.suit.index()];
        if !rules::foundation_accepts(card, foundation.value()) {
            return Err(MoveError::IllegalFoundationMove);
        }

        foundation.add_card();
        pile.pop();

        Ok(card)
    }

    /// Moves the face-up run starting at `card_index` in the pile at
    /// `source_index` onto the pile at `target_index`, preserving order.
    ///
    /// Legality is checked only against the first (bottommost) card of the
    /// run; a well-formed run is already internally sequential.
    ///
    /// # Errors
    ///
    /// Returns an error if either index is out of range, `card_index` does
    /// not address an existing card, that card is face down, or it cannot be
    /// stacked on the target pile's top card.
    pub fn move_tableau_run(
        &self,
        source_index: usize,
        card_index: usize,
        target_index: usize,
    ) -> Result<(), MoveError> {
        if source_index >= TABLEAU_PILES || target_index >= TABLEAU_PILES {
            return Err(MoveError::PileNotFound);
        }

        let mut tableau = self.tableau.lock();
        let card = tableau[source_index]
            .get(card_index)
            .copied()
            .ok_or(MoveError::NoCard)?;

        if !card.is_face_up() {
            return Err(MoveError::FaceDownCard);
        }
        if !rules::tableau_accepts(card, &tableau[target_index]) {
            return Err(MoveError::IllegalTableauMove);
        }

        let run: Vec<Card> = tableau[source_index].split_off(card_index);
        tableau[target_index].extend(run);

        Ok(())
    }

    /// Flips the top card of the tableau pile at `pile_index` face up.
    ///
    /// Used after a move exposes a face-down card.
    ///
    /// # Errors
    ///
    /// Returns an error if the index is out of range, the pile is empty, or
    /// the top card is already face up.
    pub fn flip_top_tableau_card(&self, pile_index: usize) -> Result<(), FlipError> {
        let mut tableau = self.tableau.lock();
        let pile = tableau.get_mut(pile_index).ok_or(FlipError::PileNotFound)?;
        let card = pile.last_mut().ok_or(FlipError::NoCard)?;

        if card.is_face_up() {
            return Err(FlipError::AlreadyFaceUp);
        }

        card.flip();
        Ok(())
    }
}
