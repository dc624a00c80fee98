use crate::cards::{Card, Rank, Suit};

/// A standard 52-card deck in card order (no jokers).
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// ```
    /// use holdem_equity::deck::Deck;
    ///
    /// let deck = Deck::standard();
    /// assert_eq!(deck.len(), 52);
    /// ```
    pub fn standard() -> Self {
        let mut cards = Vec::with_capacity(52);
        for &r in &Rank::ALL {
            for &s in &Suit::ALL {
                cards.push(Card::new(r, s));
            }
        }
        Self { cards }
    }

    /// All 52 cards minus the `excluded` ones, in card order.
    ///
    /// ```
    /// use holdem_equity::cards::{Card, Rank, Suit};
    /// use holdem_equity::deck::Deck;
    ///
    /// let dead = [Card::new(Rank::Ace, Suit::Hearts), Card::new(Rank::King, Suit::Spades)];
    /// let rest = Deck::remaining_cards(&dead);
    /// assert_eq!(rest.len(), 50);
    /// assert!(!rest.contains(&dead[0]));
    /// ```
    pub fn remaining_cards(excluded: &[Card]) -> Vec<Card> {
        let dead = excluded.iter().fold(0u64, |m, c| m | c.mask());
        Self::standard().cards.into_iter().filter(|c| dead & c.mask() == 0).collect()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn as_slice(&self) -> &[Card] {
        &self.cards
    }
}
