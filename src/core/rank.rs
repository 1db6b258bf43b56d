use std::fmt;
use std::iter::repeat_n;

use tracing::{Level, event};

use super::hand::{HAND_SIZE, validate_cards};
use super::{Card, Hand, InvalidHandReason, PokerHandError, Value};

/// All the different possible hand categories, from the weakest to the
/// strongest. Every hand belongs to exactly one of them.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Category {
    /// The lowest category. No matches
    HighCard,
    /// One Card matches another.
    OnePair,
    /// Two different pair of matching cards.
    TwoPair,
    /// Three of the same value.
    ThreeOfAKind,
    /// Five cards in a sequence
    Straight,
    /// Five cards of the same suit
    Flush,
    /// Three of one value and two of another value
    FullHouse,
    /// Four of the same value.
    FourOfAKind,
    /// Five cards in a sequence all of the same suit.
    StraightFlush,
}

impl Category {
    /// Every category, weakest first.
    pub fn all() -> [Category; 9] {
        [
            Category::HighCard,
            Category::OnePair,
            Category::TwoPair,
            Category::ThreeOfAKind,
            Category::Straight,
            Category::Flush,
            Category::FullHouse,
            Category::FourOfAKind,
            Category::StraightFlush,
        ]
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::HighCard => "High Card",
            Category::OnePair => "One Pair",
            Category::TwoPair => "Two Pair",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full House",
            Category::FourOfAKind => "Four of a Kind",
            Category::StraightFlush => "Straight Flush",
        };
        f.write_str(name)
    }
}

/// The strength of a valid five card hand.
///
/// Variants go from the weakest to the strongest and each payload holds the
/// values that break ties inside the category, in the order they are
/// compared. That makes the derived `Ord` the poker ordering: the category
/// decides first, then the payload is compared field by field. Suits never
/// show up here so they can never break a tie.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Rank {
    /// No matches. All five values, highest first.
    HighCard([Value; 5]),
    /// One card matches another. Kickers highest first.
    OnePair { pair: Value, kickers: [Value; 3] },
    /// Two different pairs of matching cards and the odd card out.
    TwoPair {
        high: Value,
        low: Value,
        kicker: Value,
    },
    /// Three of the same value. Kickers highest first.
    ThreeOfAKind { trips: Value, kickers: [Value; 2] },
    /// Five cards in a sequence. Only the top card matters, the rest of
    /// the run follows from it.
    Straight { high: Value },
    /// Five cards of the same suit. All five values, highest first.
    Flush([Value; 5]),
    /// Three of one value and two of another value.
    FullHouse { trips: Value, pair: Value },
    /// Four of the same value and the kicker.
    FourOfAKind { quads: Value, kicker: Value },
    /// Five cards in a sequence all of the same suit.
    StraightFlush { high: Value },
}

impl Rank {
    /// Rank five cards.
    ///
    /// The cards are assumed to be different. Use `Rankable::rank` to get
    /// the check done for you.
    pub fn from_cards(cards: &[Card; HAND_SIZE]) -> Self {
        let shape = HandShape::new(cards);
        let mut v = [Value::Two; HAND_SIZE];
        for (slot, value) in v.iter_mut().zip(shape.grouped_values()) {
            *slot = value;
        }

        match shape.category() {
            Category::HighCard => Rank::HighCard(v),
            Category::OnePair => Rank::OnePair {
                pair: v[0],
                kickers: [v[2], v[3], v[4]],
            },
            Category::TwoPair => Rank::TwoPair {
                high: v[0],
                low: v[2],
                kicker: v[4],
            },
            Category::ThreeOfAKind => Rank::ThreeOfAKind {
                trips: v[0],
                kickers: [v[3], v[4]],
            },
            Category::Straight => Rank::Straight { high: v[0] },
            Category::Flush => Rank::Flush(v),
            Category::FullHouse => Rank::FullHouse {
                trips: v[0],
                pair: v[3],
            },
            Category::FourOfAKind => Rank::FourOfAKind {
                quads: v[0],
                kicker: v[4],
            },
            Category::StraightFlush => Rank::StraightFlush { high: v[0] },
        }
    }

    /// Which category this rank belongs to.
    pub fn category(&self) -> Category {
        match self {
            Rank::HighCard(_) => Category::HighCard,
            Rank::OnePair { .. } => Category::OnePair,
            Rank::TwoPair { .. } => Category::TwoPair,
            Rank::ThreeOfAKind { .. } => Category::ThreeOfAKind,
            Rank::Straight { .. } => Category::Straight,
            Rank::Flush(_) => Category::Flush,
            Rank::FullHouse { .. } => Category::FullHouse,
            Rank::FourOfAKind { .. } => Category::FourOfAKind,
            Rank::StraightFlush { .. } => Category::StraightFlush,
        }
    }
}

/// How many times each value and each suit shows up in a set of cards.
///
/// This works for any number of cards, duplicates included. Straights and
/// flushes are only ever found in exactly five cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandShape {
    value_counts: [u8; 13],
    suit_counts: [u8; 4],
    len: usize,
}

impl HandShape {
    pub fn new(cards: &[Card]) -> Self {
        let mut value_counts = [0u8; 13];
        let mut suit_counts = [0u8; 4];
        for c in cards {
            value_counts[c.value as usize] = value_counts[c.value as usize].saturating_add(1);
            suit_counts[c.suit as usize] = suit_counts[c.suit as usize].saturating_add(1);
        }
        Self {
            value_counts,
            suit_counts,
            len: cards.len(),
        }
    }

    /// How many cards of this value there are.
    pub fn count_of(&self, value: Value) -> u8 {
        self.value_counts[value as usize]
    }

    /// How many different values show up exactly `n` times.
    fn values_with_count(&self, n: u8) -> usize {
        self.value_counts.iter().filter(|&&c| c == n).count()
    }

    /// Five cards all of one suit.
    pub fn is_flush(&self) -> bool {
        self.len == HAND_SIZE && self.suit_counts.iter().any(|&c| c as usize == HAND_SIZE)
    }

    /// Five different values with no gaps between them.
    /// The ace is always high so A2345 is not a straight.
    pub fn is_straight(&self) -> bool {
        if self.len != HAND_SIZE {
            return false;
        }
        self.value_counts
            .iter()
            .position(|&c| c > 0)
            .and_then(|low| self.value_counts.get(low..low + HAND_SIZE))
            .is_some_and(|run| run.iter().all(|&c| c == 1))
    }

    /// Decide the category. Checked from the strongest down, the first
    /// match wins.
    pub fn category(&self) -> Category {
        let quads = self.values_with_count(4);
        let trips = self.values_with_count(3);
        let pairs = self.values_with_count(2);
        let flush = self.is_flush();
        let straight = self.is_straight();

        if straight && flush {
            Category::StraightFlush
        } else if quads == 1 {
            Category::FourOfAKind
        } else if trips >= 1 && pairs >= 1 {
            Category::FullHouse
        } else if flush {
            Category::Flush
        } else if straight {
            Category::Straight
        } else if trips == 1 {
            Category::ThreeOfAKind
        } else if pairs == 2 {
            Category::TwoPair
        } else if pairs == 1 && trips == 0 && quads == 0 {
            Category::OnePair
        } else {
            Category::HighCard
        }
    }

    /// Every value, one entry per card. The values that show up most come
    /// first and ties in count are broken by the higher value. For a five
    /// card hand that's the order the tie breakers are compared in.
    pub fn grouped_values(&self) -> Vec<Value> {
        let mut groups: Vec<(u8, Value)> = Value::values()
            .into_iter()
            .rev()
            .map(|v| (self.count_of(v), v))
            .filter(|(count, _)| *count > 0)
            .collect();
        // Stable so equal counts stay highest value first.
        groups.sort_by(|a, b| b.0.cmp(&a.0));
        groups
            .into_iter()
            .flat_map(|(count, v)| repeat_n(v, usize::from(count)))
            .collect()
    }
}

/// Can this turn into a hand rank?
///
/// The predicates are all answered from the single `category` decision so
/// for any set of cards exactly one of them is true. They never fail, even
/// for cards that aren't a valid hand. Only `rank` checks validity.
pub trait Rankable {
    /// The cards to look at.
    fn cards(&self) -> &[Card];

    /// Count values and suits.
    fn shape(&self) -> HandShape {
        HandShape::new(self.cards())
    }

    /// Which category these cards fall into.
    fn category(&self) -> Category {
        let category = self.shape().category();
        event!(
            Level::TRACE,
            ?category,
            num_cards = self.cards().len(),
            "Classified cards"
        );
        category
    }

    /// Rank this hand. It doesn't do any caching so it's left up to the user
    /// to understand that duplicate work will be done if this is called more
    /// than once.
    ///
    /// # Examples
    ///
    /// ```
    /// use poker_hand_checker::core::{Hand, Rank, Rankable, Value};
    ///
    /// let hand = Hand::new_from_str("7c7d7hKsKd").unwrap();
    /// assert_eq!(
    ///     Rank::FullHouse {
    ///         trips: Value::Seven,
    ///         pair: Value::King
    ///     },
    ///     hand.rank().unwrap()
    /// );
    /// ```
    fn rank(&self) -> Result<Rank, PokerHandError> {
        let cards = self.cards();
        validate_cards(cards)?;
        let five: &[Card; HAND_SIZE] = cards
            .try_into()
            .map_err(|_| InvalidHandReason::WrongCardCount(cards.len()))?;
        Ok(Rank::from_cards(five))
    }

    fn is_high_card(&self) -> bool {
        self.category() == Category::HighCard
    }

    fn is_one_pair(&self) -> bool {
        self.category() == Category::OnePair
    }

    fn is_two_pair(&self) -> bool {
        self.category() == Category::TwoPair
    }

    fn is_three_of_a_kind(&self) -> bool {
        self.category() == Category::ThreeOfAKind
    }

    fn is_straight(&self) -> bool {
        self.category() == Category::Straight
    }

    fn is_flush(&self) -> bool {
        self.category() == Category::Flush
    }

    fn is_full_house(&self) -> bool {
        self.category() == Category::FullHouse
    }

    fn is_four_of_a_kind(&self) -> bool {
        self.category() == Category::FourOfAKind
    }

    fn is_straight_flush(&self) -> bool {
        self.category() == Category::StraightFlush
    }
}

impl Rankable for Hand {
    fn cards(&self) -> &[Card] {
        Hand::cards(self)
    }
}

impl Rankable for [Card] {
    fn cards(&self) -> &[Card] {
        self
    }
}

impl Rankable for Vec<Card> {
    fn cards(&self) -> &[Card] {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Deck, FlatDeck, Suit};
    use rand::{SeedableRng, rngs::StdRng};

    fn hand(s: &str) -> Hand {
        Hand::new_from_str(s).unwrap()
    }

    #[test]
    fn test_cmp() {
        assert!(Category::HighCard < Category::StraightFlush);
        assert!(Category::HighCard < Category::FourOfAKind);
        assert!(Category::HighCard < Category::ThreeOfAKind);
        assert!(Category::all().windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_cmp_rank_category_first() {
        use Value::*;

        // The best high card still loses to the worst pair.
        let best_high = Rank::HighCard([Ace, King, Queen, Jack, Nine]);
        let worst_pair = Rank::OnePair {
            pair: Two,
            kickers: [Five, Four, Three],
        };
        assert!(best_high < worst_pair);
    }

    #[test]
    fn test_high_card_hand() {
        use Value::*;

        let h = Hand::new_with_cards(vec![
            Card::new(Ace, Suit::Diamond),
            Card::new(Eight, Suit::Heart),
            Card::new(Nine, Suit::Club),
            Card::new(Ten, Suit::Club),
            Card::new(Five, Suit::Club),
        ]);

        assert_eq!(
            Rank::HighCard([Ace, Ten, Nine, Eight, Five]),
            h.rank().unwrap()
        );
        assert!(h.is_high_card());
    }

    #[test]
    fn test_flush() {
        use Value::*;

        let h = hand("AdTd5d8d9d");
        assert_eq!(
            Rank::Flush([Ace, Ten, Nine, Eight, Five]),
            h.rank().unwrap()
        );
        assert!(h.is_flush());
    }

    #[test]
    fn test_full_house() {
        let h = hand("AdAc9d9c9s");
        assert_eq!(
            Rank::FullHouse {
                trips: Value::Nine,
                pair: Value::Ace
            },
            h.rank().unwrap()
        );
        assert!(h.is_full_house());
        assert!(!h.is_three_of_a_kind());
        assert!(!h.is_one_pair());
    }

    #[test]
    fn test_two_pair() {
        let h = hand("9dAcTs9cAd");
        assert_eq!(
            Rank::TwoPair {
                high: Value::Ace,
                low: Value::Nine,
                kicker: Value::Ten
            },
            h.rank().unwrap()
        );
        assert!(h.is_two_pair());
        assert!(!h.is_one_pair());
    }

    #[test]
    fn test_one_pair() {
        let h = hand("AdAc9d8cTs");
        assert_eq!(
            Rank::OnePair {
                pair: Value::Ace,
                kickers: [Value::Ten, Value::Nine, Value::Eight]
            },
            h.rank().unwrap()
        );
        assert!(h.is_one_pair());
    }

    #[test]
    fn test_three_of_a_kind() {
        let h = hand("2c2s2h5s6d");
        assert_eq!(
            Rank::ThreeOfAKind {
                trips: Value::Two,
                kickers: [Value::Six, Value::Five]
            },
            h.rank().unwrap()
        );
        assert!(h.is_three_of_a_kind());
    }

    #[test]
    fn test_four_of_a_kind() {
        let h = hand("AdAcAsAhTs");
        assert_eq!(
            Rank::FourOfAKind {
                quads: Value::Ace,
                kicker: Value::Ten
            },
            h.rank().unwrap()
        );
        assert!(h.is_four_of_a_kind());
        assert!(!h.is_three_of_a_kind());
    }

    #[test]
    fn test_straight() {
        let h = hand("2c3s4h5s6d");
        assert_eq!(Rank::Straight { high: Value::Six }, h.rank().unwrap());
        assert!(h.is_straight());
    }

    #[test]
    fn test_royal_straight() {
        let h = hand("TcJsQhKsAd");
        assert_eq!(Rank::Straight { high: Value::Ace }, h.rank().unwrap());
    }

    #[test]
    fn test_no_wheel() {
        use Value::*;

        // Aces are always high so this is only ace high.
        let h = hand("Ad2c3s4h5s");
        assert_eq!(
            Rank::HighCard([Ace, Five, Four, Three, Two]),
            h.rank().unwrap()
        );
        assert!(!h.is_straight());
        assert!(!hand("Ad2d3d4d5d").is_straight_flush());
        assert!(hand("Ad2d3d4d5d").is_flush());
    }

    #[test]
    fn test_no_wrap_around() {
        assert!(hand("QcKsAh2s3d").is_high_card());
    }

    #[test]
    fn test_straight_flush() {
        let h = hand("5c6c7c8c9c");
        let nine_high = Rank::StraightFlush { high: Value::Nine };
        assert_eq!(nine_high, h.rank().unwrap());
        assert!(h.is_straight_flush());
        // The straight flush doesn't also count as a straight or a flush.
        assert!(!h.is_straight());
        assert!(!h.is_flush());
    }

    #[test]
    fn test_order_does_not_matter() {
        let a = hand("7c7d7hKsKd");
        let mut cards = a.cards().to_vec();
        cards.reverse();
        assert_eq!(a.rank(), cards.rank());
        cards.rotate_left(2);
        assert_eq!(a.rank(), cards.rank());
    }

    #[test]
    fn test_rank_invalid() {
        let no_cards: PokerHandError = InvalidHandReason::WrongCardCount(0).into();
        assert_eq!(Err(no_cards), Hand::new().rank());

        let ten_clubs = Card::new(Value::Ten, Suit::Club);
        let duplicate: PokerHandError = InvalidHandReason::DuplicateCard(ten_clubs).into();
        assert_eq!(Err(duplicate), hand("TcTcAh2s8d").rank());
    }

    #[test]
    fn test_predicates_are_total() {
        // None of these are valid hands but every question still has an answer.
        assert!(Hand::new().is_high_card());
        assert!(hand("2c2d").is_one_pair());
        assert!(hand("2c2d3c3d").is_two_pair());
        assert!(hand("2c2d2h").is_three_of_a_kind());
        assert!(hand("2c2d2h2s").is_four_of_a_kind());
        assert!(hand("TcTcTcTcTc").is_flush());
        assert!(!hand("2c3c4c5c").is_flush());
        assert!(!hand("2c3d4h5s6c7d").is_straight());
    }

    #[test]
    fn test_grouped_values() {
        use Value::*;

        let shape = hand("3c7d3h7s3d").shape();
        assert_eq!(
            vec![Three, Three, Three, Seven, Seven],
            shape.grouped_values()
        );
        assert_eq!(3, shape.count_of(Value::Three));
        assert_eq!(0, shape.count_of(Value::Ace));
    }

    #[test]
    fn test_rank_agrees_with_category() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut deck: FlatDeck = Deck::default().into();
        for _ in 0..2_000 {
            deck.shuffle(&mut rng);
            let h: Hand = deck[..5].iter().copied().collect();
            let rank = h.rank().unwrap();
            assert_eq!(rank.category(), h.category());

            let predicates = [
                h.is_high_card(),
                h.is_one_pair(),
                h.is_two_pair(),
                h.is_three_of_a_kind(),
                h.is_straight(),
                h.is_flush(),
                h.is_full_house(),
                h.is_four_of_a_kind(),
                h.is_straight_flush(),
            ];
            assert_eq!(1, predicates.iter().filter(|p| **p).count(), "{h}");
        }
    }

    #[test]
    fn test_category_counts_over_all_hands() {
        // Walk every five card hand of the 52 card deck. With no wheel
        // there are 9 straight high values instead of the usual 10.
        let deck: FlatDeck = Deck::default().into();
        let cards = &deck[..];
        let mut counts = [0usize; 9];
        for a in 0..52 {
            for b in (a + 1)..52 {
                for c in (b + 1)..52 {
                    for d in (c + 1)..52 {
                        for e in (d + 1)..52 {
                            let five = [cards[a], cards[b], cards[c], cards[d], cards[e]];
                            counts[Rank::from_cards(&five).category() as usize] += 1;
                        }
                    }
                }
            }
        }
        assert_eq!(2_598_960, counts.iter().sum::<usize>());
        assert_eq!(36, counts[Category::StraightFlush as usize]);
        assert_eq!(624, counts[Category::FourOfAKind as usize]);
        assert_eq!(3_744, counts[Category::FullHouse as usize]);
        assert_eq!(5_112, counts[Category::Flush as usize]);
        assert_eq!(9_180, counts[Category::Straight as usize]);
        assert_eq!(54_912, counts[Category::ThreeOfAKind as usize]);
        assert_eq!(123_552, counts[Category::TwoPair as usize]);
        assert_eq!(1_098_240, counts[Category::OnePair as usize]);
        assert_eq!(1_303_560, counts[Category::HighCard as usize]);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serialize_rank() {
        let rank = Rank::FullHouse {
            trips: Value::Seven,
            pair: Value::King,
        };
        let json = serde_json::to_string(&rank).unwrap();
        assert_eq!(r#"{"FullHouse":{"trips":"Seven","pair":"King"}}"#, json);
        let back: Rank = serde_json::from_str(&json).unwrap();
        assert_eq!(rank, back);
    }
}
