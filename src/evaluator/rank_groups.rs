use crate::cards::Rank;
use core::cmp::Ordering;

/// One `(count, rank)` group of a hand.
///
/// Groups order by count, then by rank strength (Ace high).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankGroup {
    pub count: u8,
    pub rank: Rank,
}

impl Ord for RankGroup {
    fn cmp(&self, other: &Self) -> Ordering {
        self.count.cmp(&other.count).then(self.rank.strength().cmp(&other.rank.strength()))
    }
}

impl PartialOrd for RankGroup {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Groups ranks by their frequency in a hand, sorted by (count desc, rank desc).
///
/// Example: AAAKQ groups as [(3, Ace), (1, King), (1, Queen)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankGroups {
    groups: Vec<RankGroup>,
}

impl RankGroups {
    /// Create RankGroups from a rank count array indexed by rank index (0..13).
    pub fn from_counts(rank_counts: &[u8; 13]) -> Self {
        let mut groups: Vec<RankGroup> = Rank::ALL
            .iter()
            .filter(|r| rank_counts[r.index() as usize] > 0)
            .map(|&rank| RankGroup { count: rank_counts[rank.index() as usize], rank })
            .collect();
        groups.sort_by(|a, b| b.cmp(a));
        Self { groups }
    }

    /// Group sizes in key order, e.g. `[3, 2]` for a full house.
    pub fn shape(&self) -> Vec<u8> {
        self.groups.iter().map(|g| g.count).collect()
    }

    /// Returns the rank of a four-of-a-kind, if present.
    pub fn quad(&self) -> Option<Rank> {
        self.groups.first().filter(|g| g.count == 4).map(|g| g.rank)
    }

    /// Returns the rank of a three-of-a-kind, if present.
    pub fn trips(&self) -> Option<Rank> {
        self.groups.first().filter(|g| g.count == 3).map(|g| g.rank)
    }

    /// Number of pair groups.
    pub fn pair_count(&self) -> usize {
        self.groups.iter().filter(|g| g.count == 2).count()
    }

    /// Returns true if the hand has both trips and a pair (full house).
    pub fn has_full_house(&self) -> bool {
        self.shape() == [3, 2]
    }

    /// Tiebreak strengths in key order.
    pub fn strengths(&self) -> Vec<u8> {
        self.groups.iter().map(|g| g.rank.strength()).collect()
    }

    pub fn groups(&self) -> &[RankGroup] {
        &self.groups
    }
}
