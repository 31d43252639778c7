//! Error types for game operations.
//!
//! Every fallible operation validates fully before mutating, so an `Err`
//! always means the game state is unchanged.

use thiserror::Error;

/// Errors that can occur when drawing from the draw pile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DrawError {
    /// No cards left in the draw pile.
    #[error("no cards left in the draw pile")]
    NoCards,
}

/// Errors that can occur when recycling the discard pile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ReshuffleError {
    /// The draw pile still has cards to draw.
    #[error("the draw pile is not empty")]
    DrawPileNotEmpty,
}

/// Errors that can occur when moving cards between piles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveError {
    /// Tableau pile index out of range.
    #[error("tableau pile index out of range")]
    PileNotFound,
    /// No card at the source position.
    #[error("no card at the source position")]
    NoCard,
    /// The source card is face down.
    #[error("the source card is face down")]
    FaceDownCard,
    /// The card does not continue its suit's foundation sequence.
    #[error("the card does not continue its foundation sequence")]
    IllegalFoundationMove,
    /// The card cannot be stacked on the target tableau pile.
    #[error("the card cannot be stacked on the target tableau pile")]
    IllegalTableauMove,
}

/// Errors that can occur when flipping the top card of a tableau pile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FlipError {
    /// Tableau pile index out of range.
    #[error("tableau pile index out of range")]
    PileNotFound,
    /// The pile is empty.
    #[error("the pile is empty")]
    NoCard,
    /// The top card is already face up.
    #[error("the top card is already face up")]
    AlreadyFaceUp,
}
