use thiserror::Error;

use super::Card;

/// Why a hand can't be treated as a five card poker hand.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InvalidHandReason {
    #[error("a hand must hold exactly 5 cards, found {0}")]
    WrongCardCount(usize),
    #[error("card {0} appears more than once")]
    DuplicateCard(Card),
}

/// This is the core error type for the library.
/// It uses `thiserror` to provide readable error messages
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PokerHandError {
    #[error("Invalid hand: {0}")]
    InvalidHand(#[from] InvalidHandReason),
    #[error("Unable to parse value")]
    UnexpectedValueChar,
    #[error("Unable to parse suit")]
    UnexpectedSuitChar,
    #[error("Error reading characters while parsing")]
    TooFewChars,
}
