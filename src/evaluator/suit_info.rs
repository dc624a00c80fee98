use crate::cards::{Card, Suit};

/// Flush information for a five-card hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuitInfo {
    pub is_flush: bool,
    pub flush_suit: Option<Suit>,
}

impl SuitInfo {
    pub fn detect(cards: &[Card; 5]) -> Self {
        let first = cards[0].suit();
        let is_flush = cards.iter().all(|c| c.suit() == first);
        Self { is_flush, flush_suit: is_flush.then_some(first) }
    }
}
