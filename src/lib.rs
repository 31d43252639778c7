//! A Klondike solitaire rules engine with optional `no_std` support.
//!
//! The crate provides a [`Solitaire`] type that owns the authoritative game
//! state (draw pile, discard pile, four foundation piles, seven tableau
//! piles) and validates every state-changing action: drawing, recycling the
//! discard pile, discard-to-foundation, discard-to-tableau,
//! tableau-to-foundation, tableau-run moves, flipping, and win detection.
//!
//! Rendering, input handling, persistence, scoring, and solving are out of
//! scope; a front-end reads pile contents through the accessors and calls
//! the mutating operations, treating any `Err` as a rejected gesture.
//!
//! # Example
//!
//! ```
//! use klrs::Solitaire;
//!
//! let game = Solitaire::new(42);
//! game.new_game();
//!
//! while game.draw_card().is_ok() {
//!     let _ = game.play_discard_to_foundation();
//! }
//! assert_eq!(game.cards_remaining(), 0);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod foundation;
pub mod game;
pub mod rules;
mod sync;

// Re-export main types
pub use card::{Card, Color, DECK_SIZE, RANK_ACE, RANK_KING, Suit};
pub use deck::Deck;
pub use error::{DrawError, FlipError, MoveError, ReshuffleError};
pub use foundation::FoundationPile;
pub use game::{Solitaire, TABLEAU_PILES};
