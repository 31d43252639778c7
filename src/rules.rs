//! Move-legality predicates.
//!
//! Pure functions over card and pile state, with no side effects, so a
//! front-end can pre-validate a drag without touching the game. The engine
//! calls the same predicates before applying any move.

use crate::card::{Card, RANK_ACE, RANK_KING};

/// Returns whether a card may be added to its suit's foundation pile.
///
/// `foundation_value` is the highest rank the pile has accepted so far
/// (0 = empty). Legal iff the card is the next rank up: an Ace onto an empty
/// pile, then strictly sequential. Suit routing is fixed; no other suit's
/// foundation is ever a candidate for a given card.
#[must_use]
pub const fn foundation_accepts(card: Card, foundation_value: u8) -> bool {
    card.rank == foundation_value + 1
}

/// Returns whether a card may be placed on top of a tableau pile.
///
/// An empty pile accepts only a King. A non-empty pile accepts a card one
/// rank below its top card in the opposite color; an Ace on top accepts
/// nothing.
#[must_use]
pub fn tableau_accepts(card: Card, pile: &[Card]) -> bool {
    let Some(top) = pile.last() else {
        return card.rank == RANK_KING;
    };

    if top.rank == RANK_ACE {
        return false;
    }
    if top.color() == card.color() {
        return false;
    }

    top.rank == card.rank + 1
}
