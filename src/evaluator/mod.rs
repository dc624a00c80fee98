pub(crate) mod detector;
pub(crate) mod hand_analysis;
pub mod ranker;
pub(crate) mod rank_groups;
pub(crate) mod straight_info;
pub(crate) mod suit_info;

use crate::cards::Card;
use crate::combinations::{pick, Combinations};
use crate::hand::{card_mask, Hand, HandError};
use core::cmp::Ordering;

pub use rank_groups::RankGroup;
pub use ranker::{rank_seven, RankState};

/// Compact, comparable hand strength. Higher is better.
/// Encodes category and ranked tiebreakers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HandValue(u32);

/// Poker hand category from weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[non_exhaustive]
#[repr(u8)]
pub enum Category {
    HighCard = 0,
    Pair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
}

impl Category {
    pub const ALL: [Category; 9] = [
        Category::HighCard,
        Category::Pair,
        Category::TwoPair,
        Category::ThreeOfAKind,
        Category::Straight,
        Category::Flush,
        Category::FullHouse,
        Category::FourOfAKind,
        Category::StraightFlush,
    ];

    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    /// Straight-shaped categories break ties on the straight's high rank.
    pub const fn is_straight(self) -> bool {
        matches!(self, Category::Straight | Category::StraightFlush)
    }
}

impl HandValue {
    const CATEGORY_SHIFT: u32 = 20;
    const NIBBLE: u32 = 4;

    /// Pack a category and up to five tiebreak strengths (1..=13, most
    /// significant first) into a comparable value.
    pub fn from_parts(category: Category, tiebreak: &[u8]) -> Self {
        // [ category (4) | t0 (4) | t1 (4) | t2 (4) | t3 (4) | t4 (4) ]
        let mut v = (category as u32) << Self::CATEGORY_SHIFT;
        for (i, t) in tiebreak.iter().take(5).enumerate() {
            let offset = Self::CATEGORY_SHIFT - Self::NIBBLE * (i as u32 + 1);
            v |= (*t as u32 & 0xF) << offset;
        }
        HandValue(v)
    }

    pub fn category(self) -> Category {
        Category::ALL[(self.0 >> Self::CATEGORY_SHIFT) as usize]
    }
}

/// Within-category tiebreak of a five-card hand.
///
/// Straights and straight flushes use the effective high rank (13 for
/// broadway, 4 for the wheel). Every other category uses its rank groups
/// sorted by count, then strength, both descending.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum TieBreak {
    StraightHigh(u8),
    Groups(Vec<RankGroup>),
}

impl TieBreak {
    pub(crate) fn of(sorted: &[Card; 5]) -> Self {
        let analysis = hand_analysis::HandAnalysis::new(sorted);
        match analysis.straight_info.high {
            Some(high) if analysis.category().is_straight() => TieBreak::StraightHigh(high),
            _ => TieBreak::Groups(analysis.rank_groups.groups().to_vec()),
        }
    }
}

/// Evaluate exactly five distinct cards into a packed `(category, tiebreak)`.
pub fn evaluate_five(cards: &[Card; 5]) -> HandValue {
    let mut sorted = *cards;
    sorted.sort_unstable();
    let analysis = hand_analysis::HandAnalysis::new(&sorted);
    analysis.value(analysis.category())
}

/// Best five-card hand out of exactly seven distinct cards.
///
/// Folds over all `C(7,5) = 21` subsets; an absent hand orders below any
/// hand so the first subset always wins the first comparison.
///
/// ```
/// use holdem_equity::cards::parse_cards;
/// use holdem_equity::evaluator::{best_hand, Category};
///
/// let seven = parse_cards("As Ah Kc Qd Jh 3s 2c").unwrap();
/// let best = best_hand(&seven).unwrap();
/// assert_eq!(best.category(), Category::Pair);
/// ```
pub fn best_hand(cards: &[Card]) -> Result<Hand, HandError> {
    if cards.len() != 7 {
        return Err(HandError::SelectorSize(cards.len()));
    }
    if !card_mask(cards).1 {
        return Err(HandError::DuplicateCards);
    }

    let mut best: Option<Hand> = None;
    for indices in Combinations::<5>::new(7) {
        let hand = Hand::from_distinct(pick(cards, indices));
        if best.as_ref() < Some(&hand) {
            best = Some(hand);
        }
    }

    best.ok_or(HandError::SelectorSize(cards.len()))
}

/// Compare two hands built from seven cards each.
pub fn compare_seven(a: &[Card], b: &[Card]) -> Result<Ordering, HandError> {
    Ok(best_hand(a)?.cmp(&best_hand(b)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::parse_cards;

    fn five(s: &str) -> [Card; 5] {
        parse_cards(s).unwrap().try_into().unwrap()
    }

    #[test]
    fn evaluate_five_categories() {
        let cases = [
            ("Ah Kh Qh Jh Th", Category::StraightFlush),
            ("Kc Kd Kh Ks 2s", Category::FourOfAKind),
            ("Tc Td Th 2s 2h", Category::FullHouse),
            ("Ah 9h 7h 3h 2h", Category::Flush),
            ("Ac 2d 3h 4s 5c", Category::Straight),
            ("Qc Qd Qh 9s 2c", Category::ThreeOfAKind),
            ("Jc Jd 9c 9h 2s", Category::TwoPair),
            ("Ah Ad Ts 9c 2d", Category::Pair),
            ("Ah Kd 7s 5c 2d", Category::HighCard),
        ];
        for (cards, category) in cases {
            assert_eq!(evaluate_five(&five(cards)).category(), category, "{cards}");
        }
    }

    #[test]
    fn value_is_independent_of_input_order() {
        let a = evaluate_five(&five("Qc Qd 5h 9s 2c"));
        let b = evaluate_five(&five("2c 9s Qd 5h Qc"));
        assert_eq!(a, b);
    }

    #[test]
    fn category_dominates_tiebreak() {
        let low_pair = evaluate_five(&five("2c 2d 3h 4s 6c"));
        let ace_high = evaluate_five(&five("Ac Kd Qh Js 9c"));
        assert!(low_pair > ace_high);
    }

    #[test]
    fn packing_orders_tiebreak_nibbles() {
        let a = HandValue::from_parts(Category::Pair, &[13, 5, 4, 3]);
        let b = HandValue::from_parts(Category::Pair, &[12, 13, 11, 10]);
        assert!(a > b);
        assert_eq!(a.category(), Category::Pair);
    }

    #[test]
    fn broadway_and_wheel_tiebreaks() {
        let broadway = Hand::try_new(&five("Ah Th Jh Qh Kh")).unwrap();
        let wheel = Hand::try_new(&five("Ah 2h 3h 4h 5h")).unwrap();
        let king_high = Hand::try_new(&five("9h Th Jh Qh Kh")).unwrap();
        assert_eq!(broadway.tiebreak(), TieBreak::StraightHigh(13));
        assert_eq!(wheel.tiebreak(), TieBreak::StraightHigh(4));
        assert_eq!(king_high.tiebreak(), TieBreak::StraightHigh(12));
        assert!(broadway > king_high);
        assert!(king_high > wheel);
    }

    #[test]
    fn best_hand_rejects_bad_input() {
        let six = parse_cards("As Ah Kc Qd Jh 3s").unwrap();
        assert_eq!(best_hand(&six).unwrap_err(), HandError::SelectorSize(6));
        let dup = parse_cards("As As Kc Qd Jh 3s 2c").unwrap();
        assert_eq!(best_hand(&dup).unwrap_err(), HandError::DuplicateCards);
    }

    #[test]
    fn best_hand_finds_straight_over_pair() {
        let seven = parse_cards("5s 6h 7c 8d 9h 9s 2c").unwrap();
        let best = best_hand(&seven).unwrap();
        assert_eq!(best.category(), Category::Straight);
        assert_eq!(best.tiebreak(), TieBreak::StraightHigh(8));
    }

    #[test]
    fn compare_seven_orders_hands() {
        let a = parse_cards("As Ad Qc Jd 9h 3s 2c").unwrap();
        let b = parse_cards("Ks Kd Qc Jd 9h 3s 2c").unwrap();
        assert_eq!(compare_seven(&a, &b).unwrap(), Ordering::Greater);
    }
}
