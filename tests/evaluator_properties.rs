use holdem_equity::cards::{Card, Rank, Suit};
use holdem_equity::evaluator::{best_hand, evaluate_five, rank_seven, Category, RankState};
use holdem_equity::hand::Hand;
use proptest::prelude::*;
use std::cmp::Ordering;

fn any_card() -> impl Strategy<Value = Card> {
    (0u8..52).prop_map(|i| Card::from_index(i).unwrap())
}

fn distinct_cards<const N: usize>() -> impl Strategy<Value = [Card; N]> {
    prop::sample::subsequence((0u8..52).collect::<Vec<_>>(), N)
        .prop_shuffle()
        .prop_map(|idx| {
            let cards: Vec<Card> = idx.into_iter().map(|i| Card::from_index(i).unwrap()).collect();
            cards.try_into().unwrap()
        })
}

fn rank_from_strength(s: u8) -> Rank {
    Rank::from_strength(s).unwrap()
}

/// Straight with top strength `top` (4 = the wheel, 13 = broadway).
fn straight_cards(top: u8) -> [Card; 5] {
    let suits = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades, Suit::Clubs];
    let mut out = [Card::new(Rank::Ace, Suit::Clubs); 5];
    for (i, slot) in out.iter_mut().enumerate() {
        // the wheel's low card is the Ace at strength 13
        let s = if top == 4 && i == 0 { 13 } else { top - 4 + i as u8 };
        *slot = Card::new(rank_from_strength(s), suits[i]);
    }
    out
}

fn strengths_desc(ranks: &[Rank]) -> Vec<u8> {
    let mut out: Vec<u8> = ranks.iter().map(|r| r.strength()).collect();
    out.sort_by(|a, b| b.cmp(a));
    out
}

fn flush_rank_set() -> impl Strategy<Value = Vec<Rank>> {
    prop::collection::btree_set(1u8..=13u8, 5)
        .prop_filter("non-straight ranks", |set| {
            let vals: Vec<u8> = set.iter().copied().collect();
            let is_wheel = vals == vec![1, 2, 3, 4, 13];
            let is_straight = vals.windows(2).all(|w| w[1] == w[0] + 1);
            !(is_straight || is_wheel)
        })
        .prop_map(|set| set.into_iter().map(rank_from_strength).collect())
}

fn brute_force_best(cards: &[Card; 7]) -> Hand {
    let mut best: Option<Hand> = None;
    for i in 0..3 {
        for j in (i + 1)..4 {
            for k in (j + 1)..5 {
                for l in (k + 1)..6 {
                    for m in (l + 1)..7 {
                        let five = [cards[i], cards[j], cards[k], cards[l], cards[m]];
                        let hand = Hand::try_new(&five).unwrap();
                        if best.map_or(true, |b| hand > b) {
                            best = Some(hand);
                        }
                    }
                }
            }
        }
    }
    best.unwrap()
}

proptest! {
    #[test]
    fn five_card_ordering_is_antisymmetric_and_transitive(a in distinct_cards::<5>(), b in distinct_cards::<5>(), c in distinct_cards::<5>()) {
        let ea = evaluate_five(&a);
        let eb = evaluate_five(&b);
        let ec = evaluate_five(&c);

        // antisymmetric: if a >= b and b >= a then a == b
        if ea >= eb && eb >= ea { prop_assert_eq!(ea, eb); }

        // transitive: if a >= b and b >= c then a >= c
        if ea >= eb && eb >= ec { prop_assert!(ea >= ec); }

        prop_assert_eq!(ea.cmp(&eb), eb.cmp(&ea).reverse());
    }

    #[test]
    fn evaluation_ignores_card_order(mut cards in distinct_cards::<5>()) {
        let before = evaluate_five(&cards);
        cards.reverse();
        prop_assert_eq!(evaluate_five(&cards), before);
    }

    #[test]
    fn best_hand_matches_brute_force(cards in distinct_cards::<7>()) {
        let best = best_hand(&cards).unwrap();
        let brute = brute_force_best(&cards);
        prop_assert_eq!(best.value(), brute.value());
        prop_assert!(best.cards().iter().all(|c| cards.contains(c)));
    }

    #[test]
    fn ranker_agrees_with_best_hand(cards in distinct_cards::<7>()) {
        prop_assert_eq!(rank_seven(&cards), best_hand(&cards).unwrap().value());
    }

    #[test]
    fn ranker_extends_a_board_like_ranking_from_scratch(cards in distinct_cards::<7>()) {
        let board = RankState::from_cards(&cards[..5]);
        let extended = board.add(cards[5]).add(cards[6]);
        prop_assert_eq!(extended.value(), rank_seven(&cards));
        prop_assert_eq!(board.value(), evaluate_five(&cards[..5].try_into().unwrap()));
    }

    #[test]
    fn duplicates_are_rejected(cards in prop::array::uniform7(any_card())) {
        let mut seen = 0u64;
        let distinct = cards.iter().all(|c| {
            let fresh = seen & c.mask() == 0;
            seen |= c.mask();
            fresh
        });
        prop_assert_eq!(best_hand(&cards).is_ok(), distinct);
    }

    #[test]
    fn straight_ordering_respects_top_card(top_hi in 5u8..=13u8, top_lo in 4u8..=12u8) {
        prop_assume!(top_hi > top_lo);
        let e_hi = evaluate_five(&straight_cards(top_hi));
        let e_lo = evaluate_five(&straight_cards(top_lo));
        prop_assert_eq!(e_hi.category(), Category::Straight);
        prop_assert_eq!(e_lo.category(), Category::Straight);
        prop_assert!(e_hi > e_lo);
    }

    #[test]
    fn wheel_is_lowest_straight(top in 5u8..=13u8) {
        let e_wheel = evaluate_five(&straight_cards(4));
        let e_high = evaluate_five(&straight_cards(top));
        prop_assert_eq!(e_wheel.category(), Category::Straight);
        prop_assert!(e_high > e_wheel);
    }

    #[test]
    fn flush_kicker_ordering(a in flush_rank_set(), b in flush_rank_set()) {
        let suit = Suit::Hearts;
        let hand_a: [Card; 5] = [a[0], a[1], a[2], a[3], a[4]].map(|r| Card::new(r, suit));
        let hand_b: [Card; 5] = [b[0], b[1], b[2], b[3], b[4]].map(|r| Card::new(r, suit));
        let e_a = evaluate_five(&hand_a);
        let e_b = evaluate_five(&hand_b);
        prop_assert_eq!(e_a.category(), Category::Flush);
        prop_assert_eq!(e_b.category(), Category::Flush);

        match strengths_desc(&a).cmp(&strengths_desc(&b)) {
            Ordering::Greater => prop_assert!(e_a > e_b),
            Ordering::Less => prop_assert!(e_a < e_b),
            Ordering::Equal => prop_assert_eq!(e_a, e_b),
        }
    }
}
