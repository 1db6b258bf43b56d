use std::cmp::Ordering;
use std::fmt;

use tracing::{Level, event};

use crate::core::{Category, Hand, PokerHandError, Rank, Rankable};

/// The outcome of putting two hands against each other.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HandComparison {
    LeftWins,
    RightWins,
    Tie,
}

impl HandComparison {
    /// `1` when the left hand wins, `-1` when the right hand wins and `0`
    /// for a tie.
    pub fn as_i8(self) -> i8 {
        match self {
            HandComparison::LeftWins => 1,
            HandComparison::RightWins => -1,
            HandComparison::Tie => 0,
        }
    }

    /// The same outcome seen from the other side of the table.
    pub fn reverse(self) -> Self {
        match self {
            HandComparison::LeftWins => HandComparison::RightWins,
            HandComparison::RightWins => HandComparison::LeftWins,
            HandComparison::Tie => HandComparison::Tie,
        }
    }
}

impl From<Ordering> for HandComparison {
    fn from(value: Ordering) -> Self {
        match value {
            Ordering::Greater => HandComparison::LeftWins,
            Ordering::Less => HandComparison::RightWins,
            Ordering::Equal => HandComparison::Tie,
        }
    }
}

impl From<HandComparison> for i8 {
    fn from(value: HandComparison) -> Self {
        value.as_i8()
    }
}

impl fmt::Display for HandComparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_i8())
    }
}

/// Answers questions about five card poker hands.
///
/// There's no state here at all, every call only looks at the hands it's
/// given. That makes it free to copy around and share between threads.
///
/// # Examples
///
/// ```
/// use poker_hand_checker::{HandComparison, PokerHandsChecker};
/// use poker_hand_checker::core::Hand;
///
/// let checker = PokerHandsChecker::new();
/// let straight = Hand::new_from_str("5c6s7d8s9c").unwrap();
/// let lower = Hand::new_from_str("4c5s6d7s8c").unwrap();
///
/// assert!(checker.is_straight(&straight));
/// assert_eq!(
///     HandComparison::LeftWins,
///     checker.compare_hands(&straight, &lower).unwrap()
/// );
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PokerHandsChecker;

impl PokerHandsChecker {
    pub fn new() -> Self {
        Self
    }

    /// Five cards, no card twice.
    pub fn is_valid_hand(&self, hand: &Hand) -> bool {
        hand.is_valid()
    }

    pub fn category(&self, hand: &Hand) -> Category {
        hand.category()
    }

    /// The full rank of a valid hand.
    pub fn rank(&self, hand: &Hand) -> Result<Rank, PokerHandError> {
        hand.rank()
    }

    pub fn is_high_card(&self, hand: &Hand) -> bool {
        hand.is_high_card()
    }

    pub fn is_one_pair(&self, hand: &Hand) -> bool {
        hand.is_one_pair()
    }

    pub fn is_two_pair(&self, hand: &Hand) -> bool {
        hand.is_two_pair()
    }

    pub fn is_three_of_a_kind(&self, hand: &Hand) -> bool {
        hand.is_three_of_a_kind()
    }

    pub fn is_straight(&self, hand: &Hand) -> bool {
        hand.is_straight()
    }

    pub fn is_flush(&self, hand: &Hand) -> bool {
        hand.is_flush()
    }

    pub fn is_full_house(&self, hand: &Hand) -> bool {
        hand.is_full_house()
    }

    pub fn is_four_of_a_kind(&self, hand: &Hand) -> bool {
        hand.is_four_of_a_kind()
    }

    pub fn is_straight_flush(&self, hand: &Hand) -> bool {
        hand.is_straight_flush()
    }

    /// Which of the two hands wins.
    ///
    /// Both hands have to be valid, otherwise this fails with
    /// `PokerHandError::InvalidHand` and nothing is compared. The two hands
    /// are allowed to share cards, so a hand compared with itself is a tie.
    pub fn compare_hands(
        &self,
        left: &Hand,
        right: &Hand,
    ) -> Result<HandComparison, PokerHandError> {
        let left_rank = Self::checked_rank(left, "left")?;
        let right_rank = Self::checked_rank(right, "right")?;
        let outcome = HandComparison::from(left_rank.cmp(&right_rank));
        event!(
            Level::DEBUG,
            ?left_rank,
            ?right_rank,
            ?outcome,
            "Compared hands"
        );
        Ok(outcome)
    }

    fn checked_rank(hand: &Hand, side: &'static str) -> Result<Rank, PokerHandError> {
        hand.rank().inspect_err(|error| {
            event!(Level::WARN, side, %hand, %error, "Refusing to compare hand");
        })
    }
}
