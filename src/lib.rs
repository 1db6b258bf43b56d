//! Poker hand checker is a small library for five card poker hands.
//! It tells whether a hand is valid, which category (pair, flush, ...)
//! a hand falls into, and which of two hands wins.
//!
//! ```
//! use poker_hand_checker::core::Hand;
//! use poker_hand_checker::{HandComparison, PokerHandsChecker};
//!
//! let checker = PokerHandsChecker::new();
//! let high_card = Hand::new_from_str("AsKdQcTs2s").unwrap();
//! let one_pair = Hand::new_from_str("2c2d7s9cTc").unwrap();
//!
//! assert_eq!(
//!     HandComparison::RightWins,
//!     checker.compare_hands(&high_card, &one_pair).unwrap()
//! );
//! ```

/// Allow all the core poker functionality to be used
/// externally. Cards, hands, decks and ranking.
pub mod core;

/// The stateless checker service and comparison outcome.
mod checker;
pub use self::checker::{HandComparison, PokerHandsChecker};
