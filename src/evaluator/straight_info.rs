use crate::cards::Rank;

const BROADWAY: [u8; 5] = [0, 9, 10, 11, 12];

/// Straight detection over five ranks sorted ascending by rank index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StraightInfo {
    pub is_straight: bool,
    /// Effective high rank: 13 for broadway, otherwise the top rank index
    /// (4 for the wheel).
    pub high: Option<u8>,
}

impl StraightInfo {
    pub fn detect(ranks_asc: &[Rank; 5]) -> Self {
        let idx = ranks_asc.map(Rank::index);
        let high = if idx == BROADWAY {
            Some(13)
        } else if idx.windows(2).all(|w| w[1] == w[0] + 1) {
            Some(idx[4])
        } else {
            None
        };
        Self { is_straight: high.is_some(), high }
    }
}
