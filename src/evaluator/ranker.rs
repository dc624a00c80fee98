//! Allocation-free ranking of the best five cards out of five to seven.
//!
//! [`RankState`] accumulates per-strength counts and per-suit strength
//! masks one card at a time, so the enumerator can build a board once and
//! extend it by two hole cards per scenario. Its [`RankState::value`] is
//! always equal to the value of [`best_hand`](super::best_hand) over the
//! same cards.
//!
//! Strength masks use bit `s` for strength `s` (Two = 1 ... Ace = 13) and
//! mirror the Ace into bit 0 so the wheel is an ordinary five-bit run.

use crate::cards::Card;
use crate::evaluator::{Category, HandValue};

const MASK_BITS: usize = 14;

/// Effective high rank of the best straight in a strength mask, 0 if none.
const fn straight_table() -> [u8; 1 << MASK_BITS] {
    let mut table = [0u8; 1 << MASK_BITS];
    let mut mask = 0usize;
    while mask < table.len() {
        let runs = mask & (mask >> 1) & (mask >> 2) & (mask >> 3) & (mask >> 4);
        if runs != 0 {
            // highest run start + 4 is the straight's top card
            table[mask] = (usize::BITS - 1 - runs.leading_zeros()) as u8 + 4;
        }
        mask += 1;
    }
    table
}

static STRAIGHT_HIGH: [u8; 1 << MASK_BITS] = straight_table();

const ACE: u8 = 13;

/// Incremental rank state of up to seven cards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RankState {
    counts: [u8; 14],
    ranks: u16,
    suits: [u16; 4],
    len: u8,
}

impl RankState {
    pub const fn new() -> Self {
        Self { counts: [0; 14], ranks: 0, suits: [0; 4], len: 0 }
    }

    pub fn from_cards(cards: &[Card]) -> Self {
        cards.iter().fold(Self::new(), |state, &c| state.add(c))
    }

    /// Copy of this state with `card` added.
    #[inline]
    #[must_use]
    pub fn add(mut self, card: Card) -> Self {
        let s = card.rank().strength();
        let bit = (1u16 << s) | u16::from(s == ACE);
        self.counts[s as usize] += 1;
        self.ranks |= bit;
        self.suits[card.suit().index() as usize] |= bit;
        self.len += 1;
        self
    }

    pub fn len(&self) -> usize {
        self.len as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Value of the best five-card hand; needs at least five cards.
    pub fn value(&self) -> HandValue {
        debug_assert!((5..=7).contains(&self.len), "ranking needs 5 to 7 cards");

        // With at most seven cards a flush rules out quads and full houses.
        for &suited in &self.suits {
            let suited_ranks = suited & !1;
            if suited_ranks.count_ones() >= 5 {
                return match STRAIGHT_HIGH[suited as usize] {
                    0 => HandValue::from_parts(Category::Flush, &top_bits(suited_ranks, 5)),
                    high => HandValue::from_parts(Category::StraightFlush, &[high]),
                };
            }
        }

        let mut quad = 0u8;
        let mut trips = Ranked::<2>::default();
        let mut pairs = Ranked::<3>::default();
        let mut singles = Ranked::<7>::default();
        for s in (1..=ACE).rev() {
            match self.counts[s as usize] {
                0 => {}
                1 => singles.push(s),
                2 => pairs.push(s),
                3 => trips.push(s),
                _ => quad = s,
            }
        }

        if quad != 0 {
            let kicker = trips.get(0).max(pairs.get(0)).max(singles.get(0));
            return HandValue::from_parts(Category::FourOfAKind, &[quad, kicker]);
        }
        if trips.len > 0 && (trips.len > 1 || pairs.len > 0) {
            let pair = trips.get(1).max(pairs.get(0));
            return HandValue::from_parts(Category::FullHouse, &[trips.get(0), pair]);
        }
        let high = STRAIGHT_HIGH[self.ranks as usize];
        if high != 0 {
            return HandValue::from_parts(Category::Straight, &[high]);
        }
        if trips.len > 0 {
            let t = [trips.get(0), singles.get(0), singles.get(1)];
            return HandValue::from_parts(Category::ThreeOfAKind, &t);
        }
        if pairs.len > 1 {
            let kicker = pairs.get(2).max(singles.get(0));
            return HandValue::from_parts(Category::TwoPair, &[pairs.get(0), pairs.get(1), kicker]);
        }
        if pairs.len == 1 {
            let t = [pairs.get(0), singles.get(0), singles.get(1), singles.get(2)];
            return HandValue::from_parts(Category::Pair, &t);
        }
        HandValue::from_parts(Category::HighCard, &singles.items[..5])
    }
}

/// Strengths collected in descending order, bounded by `N`.
#[derive(Debug, Clone, Copy)]
struct Ranked<const N: usize> {
    items: [u8; N],
    len: usize,
}

impl<const N: usize> Default for Ranked<N> {
    fn default() -> Self {
        Self { items: [0; N], len: 0 }
    }
}

impl<const N: usize> Ranked<N> {
    fn push(&mut self, s: u8) {
        if self.len < N {
            self.items[self.len] = s;
            self.len += 1;
        }
    }

    /// The `i`-th highest strength, 0 when absent.
    fn get(&self, i: usize) -> u8 {
        if i < self.len {
            self.items[i]
        } else {
            0
        }
    }
}

/// The `n` highest set strengths of `mask`, highest first.
fn top_bits(mut mask: u16, n: usize) -> [u8; 5] {
    let mut out = [0u8; 5];
    for slot in out.iter_mut().take(n) {
        if mask == 0 {
            break;
        }
        let s = 15 - mask.leading_zeros() as u8;
        *slot = s;
        mask &= !(1 << s);
    }
    out
}

/// Value of the best five of seven cards.
///
/// ```
/// use holdem_equity::cards::parse_cards;
/// use holdem_equity::evaluator::{best_hand, rank_seven};
///
/// let seven: [_; 7] = parse_cards("As Ah Kc Qd Jh 3s 2c").unwrap().try_into().unwrap();
/// assert_eq!(rank_seven(&seven), best_hand(&seven).unwrap().value());
/// ```
pub fn rank_seven(cards: &[Card; 7]) -> HandValue {
    RankState::from_cards(cards).value()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::parse_cards;
    use crate::evaluator::{best_hand, evaluate_five};

    fn seven(s: &str) -> [Card; 7] {
        parse_cards(s).unwrap().try_into().unwrap()
    }

    #[test]
    fn straight_table_spots_edges() {
        // wheel: Ace mirrored into bit 0 plus Two..Five
        assert_eq!(STRAIGHT_HIGH[0b11111], 4);
        // broadway: Ten..Ace
        assert_eq!(STRAIGHT_HIGH[0b11111 << 9], 13);
        // six-card run picks the higher straight
        assert_eq!(STRAIGHT_HIGH[0b111111 << 3], 8);
        assert_eq!(STRAIGHT_HIGH[0b11011 << 3], 0);
    }

    #[test]
    fn top_bits_takes_highest_first() {
        assert_eq!(top_bits(0b1010_1010_1010, 5), [11, 9, 7, 5, 3]);
        assert_eq!(top_bits(0b110, 5), [2, 1, 0, 0, 0]);
    }

    #[test]
    fn agrees_with_best_hand_on_tricky_boards() {
        let boards = [
            // six-high straight flush beats the wheel
            "Ah 2h 3h 4h 5h 6h Kd",
            // trips with two pairs keeps the best pair
            "As Ah Ad Kc Kd Qs Qh",
            "9s 9h 9d 8c 8d 8s 2h",
            // quads with trips as kicker
            "Ks Kh Kd Kc Qs Qh Qd",
            "Js Jh Tc Td 5s 5h Ah",
            "Ac 2d 3h 4s 5c Kd Kh",
            "Th Jh Qh Kh 9d Ad 2c",
            "2c 2d 7h 9s Jc Qd Kh",
            "2h 4h 6h 8h Th Qh As",
        ];
        for b in boards {
            let cards = seven(b);
            assert_eq!(rank_seven(&cards), best_hand(&cards).unwrap().value(), "{b}");
        }
    }

    #[test]
    fn agrees_with_five_card_evaluator() {
        for s in ["Ah Kh Qh Jh Th", "Ac 2d 3h 4s 5c", "Qc Qd Qh 9s 2c", "7h 5d 4s 3c 2h"] {
            let cards: [Card; 5] = parse_cards(s).unwrap().try_into().unwrap();
            assert_eq!(RankState::from_cards(&cards).value(), evaluate_five(&cards), "{s}");
        }
    }

    #[test]
    fn add_is_order_independent() {
        let cards = seven("As Kd 7c 7h 2s 9d Jc");
        let forward = RankState::from_cards(&cards);
        let mut reversed = cards;
        reversed.reverse();
        assert_eq!(forward, RankState::from_cards(&reversed));
        assert_eq!(forward.len(), 7);
    }
}
