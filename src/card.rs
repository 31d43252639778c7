//! Card types and deck constants.

use core::fmt;

/// Card suit.
///
/// The discriminant order is load-bearing: [`Suit::index`] is used to address
/// the foundation pile array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Spades.
    Spades,
    /// Clubs.
    Clubs,
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
}

/// Card color, derived from the suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    /// Hearts and Diamonds.
    Red,
    /// Spades and Clubs.
    Black,
}

impl Suit {
    /// All four suits, in [`Suit::index`] order.
    pub const ALL: [Self; 4] = [Self::Spades, Self::Clubs, Self::Hearts, Self::Diamonds];

    /// Returns the color of this suit.
    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Self::Hearts | Self::Diamonds => Color::Red,
            Self::Spades | Self::Clubs => Color::Black,
        }
    }

    /// Returns a stable index in `0..4`, matching the order of [`Suit::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Single-character representation: `'S'`, `'C'`, `'H'`, or `'D'`.
    #[must_use]
    pub const fn short_char(self) -> char {
        match self {
            Self::Spades => 'S',
            Self::Clubs => 'C',
            Self::Hearts => 'H',
            Self::Diamonds => 'D',
        }
    }
}

/// A playing card.
///
/// Suit and rank are fixed at construction; only the face-orientation flag
/// changes, via [`Card::flip`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card (1 = Ace, 11 = Jack, 12 = Queen, 13 = King).
    pub rank: u8,
    /// Whether the card is face up.
    face_up: bool,
}

impl Card {
    /// Creates a new face-down card.
    ///
    /// Note: This function does not validate the rank. Values outside 1..=13
    /// are accepted but will never satisfy the move-legality rules.
    #[must_use]
    pub const fn new(suit: Suit, rank: u8) -> Self {
        Self {
            suit,
            rank,
            face_up: false,
        }
    }

    /// Returns the color of the card, computed from its suit.
    #[must_use]
    pub const fn color(&self) -> Color {
        self.suit.color()
    }

    /// Returns whether the card is face up.
    #[must_use]
    pub const fn is_face_up(&self) -> bool {
        self.face_up
    }

    /// Toggles the face-orientation flag.
    pub const fn flip(&mut self) {
        self.face_up = !self.face_up;
    }

    /// Single-character rank: `'A'`, `'2'`..`'9'`, `'T'`, `'J'`, `'Q'`, `'K'`.
    #[must_use]
    pub const fn rank_char(&self) -> char {
        match self.rank {
            1 => 'A',
            2 => '2',
            3 => '3',
            4 => '4',
            5 => '5',
            6 => '6',
            7 => '7',
            8 => '8',
            9 => '9',
            10 => 'T',
            11 => 'J',
            12 => 'Q',
            13 => 'K',
            _ => '?',
        }
    }
}

impl fmt::Display for Card {
    /// Short form like `"AS"`, `"TD"`, or `"KH"`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank_char(), self.suit.short_char())
    }
}

/// Number of cards in the deck.
pub const DECK_SIZE: usize = 52;

/// Rank of an Ace.
pub const RANK_ACE: u8 = 1;

/// Rank of a King.
pub const RANK_KING: u8 = 13;
