use crate::cards::{parse_cards, Card};
use crate::evaluator::{evaluate_five, Category, HandValue, TieBreak};
use core::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum HandError {
    #[error("duplicate cards in hole cards")]
    DuplicateHoleCards,
    #[error("a hand needs exactly 5 cards, got {0}")]
    HandSize(usize),
    #[error("best hand selection needs exactly 7 cards, got {0}")]
    SelectorSize(usize),
    #[error("duplicate cards in hand")]
    DuplicateCards,
    #[error("expected exactly two hole cards, got {0}")]
    HoleCount(usize),
    #[error("card parse error: {0}")]
    CardParse(String),
}

/// Bitmask of a card slice plus whether every card was distinct.
pub(crate) fn card_mask(cards: &[Card]) -> (u64, bool) {
    cards.iter().fold((0u64, true), |(mask, distinct), c| (mask | c.mask(), distinct && mask & c.mask() == 0))
}

/// A player's two private hole cards, stored so that `high() > low()`.
///
/// ```
/// use holdem_equity::cards::{Card, Rank, Suit};
/// use holdem_equity::hand::HoleCards;
///
/// let two = Card::new(Rank::Two, Suit::Spades);
/// let king = Card::new(Rank::King, Suit::Spades);
/// let hole = HoleCards::try_new(two, king).unwrap();
/// assert_eq!(hole.high(), king);
/// assert_eq!(hole.low(), two);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HoleCards {
    high: Card,
    low: Card,
}

impl HoleCards {
    pub fn try_new(a: Card, b: Card) -> Result<Self, HandError> {
        match a.cmp(&b) {
            Ordering::Equal => Err(HandError::DuplicateHoleCards),
            Ordering::Greater => Ok(Self { high: a, low: b }),
            Ordering::Less => Ok(Self { high: b, low: a }),
        }
    }

    pub fn from_slice(slice: &[Card]) -> Result<Self, HandError> {
        if slice.len() != 2 {
            return Err(HandError::HoleCount(slice.len()));
        }
        Self::try_new(slice[0], slice[1])
    }

    /// The higher card under card order.
    pub fn high(&self) -> Card {
        self.high
    }

    /// The lower card under card order.
    pub fn low(&self) -> Card {
        self.low
    }

    /// Both hole cards, high first.
    pub fn as_array(&self) -> [Card; 2] {
        [self.high, self.low]
    }

    pub(crate) fn mask(&self) -> u64 {
        self.high.mask() | self.low.mask()
    }
}

impl FromStr for HoleCards {
    type Err = HandError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cards = parse_cards(s).map_err(|e| HandError::CardParse(e.to_string()))?;
        Self::from_slice(&cards)
    }
}

impl fmt::Display for HoleCards {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.high, self.low)
    }
}

/// Exactly five distinct cards, sorted ascending at construction.
///
/// Hands compare by `(category, tiebreak)`; two different card sets of the
/// same strength compare equal.
///
/// ```
/// use holdem_equity::cards::parse_cards;
/// use holdem_equity::evaluator::Category;
/// use holdem_equity::hand::Hand;
///
/// let broadway = Hand::try_new(&parse_cards("Ah Th Jh Qh Kh").unwrap()).unwrap();
/// let wheel = Hand::try_new(&parse_cards("Ah 2h 3h 4h 5h").unwrap()).unwrap();
/// assert_eq!(broadway.category(), Category::StraightFlush);
/// assert!(broadway > wheel);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Hand {
    cards: [Card; 5],
    value: HandValue,
}

impl Hand {
    pub fn try_new(cards: &[Card]) -> Result<Self, HandError> {
        let five: [Card; 5] = cards.try_into().map_err(|_| HandError::HandSize(cards.len()))?;
        if !card_mask(&five).1 {
            return Err(HandError::DuplicateCards);
        }
        Ok(Self::from_distinct(five))
    }

    /// Caller guarantees the five cards are distinct.
    pub(crate) fn from_distinct(mut cards: [Card; 5]) -> Self {
        cards.sort_unstable();
        let value = evaluate_five(&cards);
        Self { cards, value }
    }

    /// The cards in ascending card order.
    pub fn cards(&self) -> &[Card; 5] {
        &self.cards
    }

    pub fn category(&self) -> Category {
        self.value.category()
    }

    /// Packed comparable strength.
    pub fn value(&self) -> HandValue {
        self.value
    }

    /// The tiebreak used inside this hand's category.
    pub fn tiebreak(&self) -> TieBreak {
        TieBreak::of(&self.cards)
    }
}

impl Ord for Hand {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl PartialOrd for Hand {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Hand {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for Hand {}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = &self.cards;
        write!(f, "({},{},{},{},{})", c[0], c[1], c[2], c[3], c[4])
    }
}

impl FromStr for Hand {
    type Err = HandError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cards = parse_cards(s).map_err(|e| HandError::CardParse(e.to_string()))?;
        Self::try_new(&cards)
    }
}
