//! This is the core module. It exports the cards, the hands and the
//! code that puts a five card hand into its category and ranks it.

/// card.rs has value and suit.
mod card;
/// Re-export Card, Value, and Suit
pub use self::card::{Card, Suit, Value};

/// Errors for parsing and for hands that can't be ranked.
mod error;
pub use self::error::{InvalidHandReason, PokerHandError};

/// Code related to cards in hands.
mod hand;
/// Everything in there should be public.
pub use self::hand::*;

/// Deck is the normal 52 card deck.
mod deck;
/// Export `Deck`
pub use self::deck::Deck;

/// Flattened deck
mod flat_deck;
/// Export the flat deck.
pub use self::flat_deck::FlatDeck;

/// 5 Card hand ranking code.
mod rank;
/// Export the trait and the results.
pub use self::rank::{Category, HandShape, Rank, Rankable};
