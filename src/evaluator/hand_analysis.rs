use super::detector::DETECTORS;
use super::rank_groups::RankGroups;
use super::straight_info::StraightInfo;
use super::suit_info::SuitInfo;
use crate::cards::{Card, Rank};
use crate::evaluator::{Category, HandValue};

/// Pre-computed analysis of a 5-card hand.
/// Built once and shared by all category detectors.
#[derive(Debug, Clone)]
pub struct HandAnalysis {
    pub rank_groups: RankGroups,
    pub suit_info: SuitInfo,
    pub straight_info: StraightInfo,
}

impl HandAnalysis {
    /// Analyze five cards already sorted ascending in card order.
    pub fn new(sorted: &[Card; 5]) -> Self {
        debug_assert!(sorted.windows(2).all(|w| w[0] <= w[1]));
        let ranks: [Rank; 5] = sorted.map(Card::rank);

        let mut rank_counts = [0u8; 13];
        for rank in ranks {
            rank_counts[rank.index() as usize] += 1;
        }

        Self {
            rank_groups: RankGroups::from_counts(&rank_counts),
            suit_info: SuitInfo::detect(sorted),
            straight_info: StraightInfo::detect(&ranks),
        }
    }

    /// First category whose detector matches, strongest first.
    pub fn category(&self) -> Category {
        DETECTORS
            .iter()
            .find(|d| d.detect(self))
            .map_or(Category::HighCard, |d| d.category())
    }

    /// Pack `category` with this hand's tiebreak.
    pub fn value(&self, category: Category) -> HandValue {
        match self.straight_info.high {
            Some(high) if category.is_straight() => HandValue::from_parts(category, &[high]),
            _ => HandValue::from_parts(category, &self.rank_groups.strengths()),
        }
    }
}
