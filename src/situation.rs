use crate::cards::Card;
use crate::equity::{Enumerator, Equity, EquityError, Tally};
use crate::evaluator::best_hand;
use crate::hand::{card_mask, Hand, HandError, HoleCards};
use std::fmt;

/// Stage of community-card reveal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Street {
    Preflop,
    Flop,
    Turn,
    River,
}

impl Street {
    /// Street for a community-card count of 0, 3, 4 or 5.
    pub const fn from_community_len(n: usize) -> Option<Street> {
        match n {
            0 => Some(Street::Preflop),
            3 => Some(Street::Flop),
            4 => Some(Street::Turn),
            5 => Some(Street::River),
            _ => None,
        }
    }

    pub const fn community_len(self) -> usize {
        match self {
            Street::Preflop => 0,
            Street::Flop => 3,
            Street::Turn => 4,
            Street::River => 5,
        }
    }

    /// Community cards still to be revealed.
    pub const fn cards_to_come(self) -> usize {
        5 - self.community_len()
    }
}

impl fmt::Display for Street {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Street::Preflop => "preflop",
            Street::Flop => "flop",
            Street::Turn => "turn",
            Street::River => "river",
        };
        f.write_str(name)
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SituationError {
    #[error("community cards must number 0, 3, 4 or 5, got {0}")]
    CommunityCount(usize),
    #[error("hole cards and community cards must all be distinct")]
    DuplicateCards,
    #[error("best hand needs a complete board, situation is at the {0}")]
    BestHandNeedsRiver(Street),
    #[error("probabilities are not available at the {0}")]
    UnsupportedStreet(Street),
    #[error(transparent)]
    Hand(#[from] HandError),
    #[error(transparent)]
    Equity(#[from] EquityError),
}

/// A player's hole cards plus the community cards revealed so far.
///
/// ```
/// use holdem_equity::cards::parse_cards;
/// use holdem_equity::situation::{GameSituation, Street};
///
/// let hole = "Jh Jc".parse().unwrap();
/// let board = parse_cards("Qd Jd 6s Jh Qs").unwrap();
/// assert!(GameSituation::try_new(hole, board).is_err()); // Jh twice
///
/// let hole = "Js Jc".parse().unwrap();
/// let board = parse_cards("Qd Jd 6s Jh Qs").unwrap();
/// let situation = GameSituation::try_new(hole, board).unwrap();
/// assert_eq!(situation.street(), Street::River);
/// let p = situation.probabilities().unwrap();
/// assert!((p.win + p.tie + p.loss - 1.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSituation {
    hole: HoleCards,
    community: Vec<Card>,
    street: Street,
}

impl GameSituation {
    pub fn try_new(hole: HoleCards, community: Vec<Card>) -> Result<Self, SituationError> {
        let street = Street::from_community_len(community.len())
            .ok_or(SituationError::CommunityCount(community.len()))?;
        let (mask, distinct) = card_mask(&community);
        if !distinct || mask & hole.mask() != 0 {
            return Err(SituationError::DuplicateCards);
        }
        Ok(Self { hole, community, street })
    }

    pub fn hole_cards(&self) -> &HoleCards {
        &self.hole
    }

    pub fn community(&self) -> &[Card] {
        &self.community
    }

    pub fn street(&self) -> Street {
        self.street
    }

    /// Best five-card hand out of the seven cards; river only.
    pub fn best_hand(&self) -> Result<Hand, SituationError> {
        if self.street != Street::River {
            return Err(SituationError::BestHandNeedsRiver(self.street));
        }
        let mut seven = Vec::with_capacity(7);
        seven.extend(self.hole.as_array());
        seven.extend_from_slice(&self.community);
        Ok(best_hand(&seven)?)
    }

    /// Win / tie / loss probabilities against one random opponent, using
    /// the default (parallel) enumerator.
    pub fn probabilities(&self) -> Result<Equity, SituationError> {
        self.probabilities_with(&Enumerator::new())
    }

    pub fn probabilities_with(&self, enumerator: &Enumerator) -> Result<Equity, SituationError> {
        Ok(self.tally_with(enumerator)?.equity())
    }

    /// Exact scenario counts behind [`GameSituation::probabilities`].
    pub fn tally_with(&self, enumerator: &Enumerator) -> Result<Tally, SituationError> {
        match self.street {
            Street::Preflop => Err(SituationError::UnsupportedStreet(self.street)),
            Street::Flop | Street::Turn | Street::River => {
                Ok(enumerator.tally(&self.hole, &self.community)?)
            }
        }
    }
}

impl fmt::Display for GameSituation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HC : {} , CC = (", self.hole)?;
        for (i, c) in self.community.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{c}")?;
        }
        f.write_str(")")
    }
}
