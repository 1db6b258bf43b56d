use std::collections::HashSet;
use std::fmt;
use std::ops::Index;
use std::slice::{Iter, SliceIndex};
use std::str::FromStr;

use super::{Card, InvalidHandReason, PokerHandError, Suit, Value};

/// The number of cards every valid poker hand holds.
pub const HAND_SIZE: usize = 5;

/// An ordered run of cards.
///
/// A `Hand` is a passive container. Nothing is checked when it's built,
/// so it can hold any number of cards and even the same card twice.
/// Use `validate` or `is_valid` before trusting it as a poker hand.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Create a new empty hand
    ///
    /// # Examples
    ///
    /// ```
    /// use poker_hand_checker::core::Hand;
    ///
    /// let hand = Hand::new();
    ///
    /// assert!(hand.is_empty());
    /// ```
    pub fn new() -> Self {
        Self {
            cards: Vec::with_capacity(HAND_SIZE),
        }
    }

    /// Create a hand holding the cards in the order given.
    pub fn new_with_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Add card at to the hand.
    /// No verification is done at all.
    pub fn push(&mut self, c: Card) {
        self.cards.push(c);
    }

    /// How many cards are in this hand.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, Card> {
        self.cards.iter()
    }

    /// All the cards in insertion order.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Check that this is a hand that can be ranked.
    ///
    /// The card count is checked first, then the first card
    /// that shows up twice is reported.
    ///
    /// # Examples
    ///
    /// ```
    /// use poker_hand_checker::core::{Card, Hand, InvalidHandReason, Suit, Value};
    ///
    /// let hand = Hand::new_from_str("TcTcAh2s8d").unwrap();
    /// assert_eq!(
    ///     Err(InvalidHandReason::DuplicateCard(Card::new(Value::Ten, Suit::Club))),
    ///     hand.validate()
    /// );
    /// ```
    pub fn validate(&self) -> Result<(), InvalidHandReason> {
        validate_cards(&self.cards)
    }

    /// Exactly five cards, all of them different.
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// From a str create a new hand.
    ///
    /// Cards are written as a value char followed by a suit char.
    /// Whitespace between them is ignored. The same card can be
    /// listed more than once, this only parses.
    ///
    /// # Examples
    ///
    /// ```
    /// use poker_hand_checker::core::Hand;
    ///
    /// let hand = Hand::new_from_str("As Kd Qc Ts 2s").unwrap();
    /// assert_eq!(5, hand.len());
    /// assert!(hand.is_valid());
    /// ```
    pub fn new_from_str(hand_string: &str) -> Result<Self, PokerHandError> {
        let mut chars = hand_string.chars().filter(|c| !c.is_whitespace());
        let mut cards = Vec::with_capacity(HAND_SIZE);

        while let Some(vc) = chars.next() {
            let v = Value::from_char(vc).ok_or(PokerHandError::UnexpectedValueChar)?;
            let s = chars
                .next()
                .ok_or(PokerHandError::TooFewChars)
                .and_then(|sc| Suit::from_char(sc).ok_or(PokerHandError::UnexpectedSuitChar))?;
            cards.push(Card::new(v, s));
        }

        Ok(Self { cards })
    }
}

/// Exactly five cards and no card listed twice.
pub fn validate_cards(cards: &[Card]) -> Result<(), InvalidHandReason> {
    if cards.len() != HAND_SIZE {
        return Err(InvalidHandReason::WrongCardCount(cards.len()));
    }
    let mut seen = HashSet::with_capacity(HAND_SIZE);
    for c in cards {
        if !seen.insert(*c) {
            return Err(InvalidHandReason::DuplicateCard(*c));
        }
    }
    Ok(())
}

impl FromStr for Hand {
    type Err = PokerHandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new_from_str(s)
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for c in &self.cards {
            if !first {
                f.write_str(" ")?;
            }
            write!(f, "{c}")?;
            first = false;
        }
        Ok(())
    }
}

impl<I: SliceIndex<[Card]>> Index<I> for Hand {
    type Output = I::Output;

    fn index(&self, index: I) -> &Self::Output {
        &self.cards[index]
    }
}

impl FromIterator<Card> for Hand {
    fn from_iter<T: IntoIterator<Item = Card>>(iter: T) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}

impl Extend<Card> for Hand {
    fn extend<T: IntoIterator<Item = Card>>(&mut self, iter: T) {
        self.cards.extend(iter);
    }
}

impl From<Vec<Card>> for Hand {
    fn from(cards: Vec<Card>) -> Self {
        Self { cards }
    }
}

impl<'a> IntoIterator for &'a Hand {
    type Item = &'a Card;
    type IntoIter = Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}
