//! Exhaustive heads-up equity enumeration.
//!
//! Every completion of the board is enumerated with [`Combinations`], and
//! for each completion every pair of opponent hole cards out of the cards
//! still unseen. The player's hand depends only on the board, so it is
//! ranked once per completion; opponent hands are ranked by extending the
//! completed board's [`RankState`] by two cards.
//!
//! With [`Enumerator::parallel`] the outer loop over completions is split
//! across rayon workers. Each worker folds a private [`Tally`] and the
//! tallies are summed, so the result never depends on scheduling.

use crate::cards::Card;
use crate::combinations::{binomial, Combinations};
use crate::deck::Deck;
use crate::evaluator::RankState;
use crate::hand::{card_mask, HoleCards};
use crate::situation::Street;
use core::cmp::Ordering;
use log::{debug, trace};
use rayon::prelude::*;
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};
use std::sync::atomic::{AtomicBool, Ordering as AtomicOrdering};
use std::sync::Arc;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum EquityError {
    #[error("equity needs 3, 4 or 5 known board cards, got {0}")]
    BoardSize(usize),
    #[error("hole cards and board cards must all be distinct")]
    DuplicateCards,
    #[error("enumeration cancelled")]
    Cancelled,
}

/// Win / tie / loss counters over enumerated scenarios.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Tally {
    pub wins: u64,
    pub ties: u64,
    pub losses: u64,
}

impl Tally {
    pub fn total(&self) -> u64 {
        self.wins + self.ties + self.losses
    }

    /// Record one showdown, seen from the player's side.
    #[inline]
    pub fn record(&mut self, outcome: Ordering) {
        match outcome {
            Ordering::Greater => self.wins += 1,
            Ordering::Equal => self.ties += 1,
            Ordering::Less => self.losses += 1,
        }
    }

    /// The same tally seen from the opponent's side.
    pub fn swapped(self) -> Self {
        Self { wins: self.losses, ties: self.ties, losses: self.wins }
    }

    /// Probabilities; all zero for an empty tally.
    pub fn equity(&self) -> Equity {
        let total = self.total();
        if total == 0 {
            return Equity::default();
        }
        let n = total as f64;
        Equity { win: self.wins as f64 / n, tie: self.ties as f64 / n, loss: self.losses as f64 / n }
    }
}

impl Add for Tally {
    type Output = Tally;
    fn add(self, rhs: Tally) -> Tally {
        Tally { wins: self.wins + rhs.wins, ties: self.ties + rhs.ties, losses: self.losses + rhs.losses }
    }
}

impl AddAssign for Tally {
    fn add_assign(&mut self, rhs: Tally) {
        *self = *self + rhs;
    }
}

impl Sum for Tally {
    fn sum<I: Iterator<Item = Tally>>(iter: I) -> Tally {
        iter.fold(Tally::default(), Add::add)
    }
}

/// Win / tie / loss probabilities against one opponent.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Equity {
    pub win: f64,
    pub tie: f64,
    pub loss: f64,
}

impl Equity {
    pub fn as_tuple(&self) -> (f64, f64, f64) {
        (self.win, self.tie, self.loss)
    }
}

impl fmt::Display for Equity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "win {:.4} tie {:.4} loss {:.4}", self.win, self.tie, self.loss)
    }
}

/// Cooperative cancellation flag shared between a caller and running
/// enumerations. Checked once per board completion.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, AtomicOrdering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(AtomicOrdering::Relaxed)
    }
}

/// Number of scenarios enumerated for `known` board cards:
/// `C(unseen, to_reveal) * C(unseen - to_reveal, 2)`.
///
/// ```
/// use holdem_equity::equity::scenario_count;
///
/// assert_eq!(scenario_count(5), 990);
/// assert_eq!(scenario_count(4), 46 * 990);
/// ```
pub fn scenario_count(known: usize) -> usize {
    let unseen = 52usize.saturating_sub(2 + known);
    let to_reveal = 5usize.saturating_sub(known);
    binomial(unseen, to_reveal) * binomial(unseen.saturating_sub(to_reveal), 2)
}

/// Configurable equity enumerator. Stateless between calls.
///
/// ```
/// use holdem_equity::cards::parse_cards;
/// use holdem_equity::equity::Enumerator;
///
/// let hole = "2h 5s".parse().unwrap();
/// let board = parse_cards("4d 3s 6d Jc Qs").unwrap();
/// let tally = Enumerator::new().tally(&hole, &board).unwrap();
/// assert_eq!((tally.wins, tally.ties, tally.losses), (969, 9, 12));
/// ```
#[derive(Debug, Clone)]
pub struct Enumerator {
    parallel: bool,
    cancel: Option<CancelToken>,
}

impl Default for Enumerator {
    fn default() -> Self {
        Self { parallel: true, cancel: None }
    }
}

impl Enumerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Split board completions across the rayon pool (default `true`).
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn cancel_token(mut self, token: CancelToken) -> Self {
        self.cancel = Some(token);
        self
    }

    /// Equity of `hole` against one random opponent given the known board.
    pub fn equity(&self, hole: &HoleCards, board: &[Card]) -> Result<Equity, EquityError> {
        Ok(self.tally(hole, board)?.equity())
    }

    /// Exact win / tie / loss counts of `hole` against every opponent hand
    /// over every completion of `board`.
    pub fn tally(&self, hole: &HoleCards, board: &[Card]) -> Result<Tally, EquityError> {
        let street = known_street(board)?;
        let (board_mask, distinct) = card_mask(board);
        if !distinct || board_mask & hole.mask() != 0 {
            return Err(EquityError::DuplicateCards);
        }

        let mut dead = board.to_vec();
        dead.extend(hole.as_array());
        let unseen = Deck::remaining_cards(&dead);
        debug!("enumerating {street} equity for {hole}: {} scenarios", scenario_count(board.len()));

        let known = RankState::from_cards(board);
        let [high, low] = hole.as_array();
        let tally = self.sweep(street, known, &unseen, |completed, used| {
            let player = completed.add(high).add(low).value();
            let rest: Vec<Card> = unseen.iter().copied().filter(|c| used & c.mask() == 0).collect();
            let mut tally = Tally::default();
            for [a, b] in Combinations::<2>::new(rest.len()) {
                let opponent = completed.add(rest[a]).add(rest[b]).value();
                tally.record(player.cmp(&opponent));
            }
            tally
        })?;

        trace!("{street} equity for {hole}: {tally:?}");
        Ok(tally)
    }

    /// Head-to-head counts of `player` against a known `opponent` over every
    /// completion of `board`.
    pub fn matchup(
        &self,
        player: &HoleCards,
        opponent: &HoleCards,
        board: &[Card],
    ) -> Result<Tally, EquityError> {
        let street = known_street(board)?;
        let (board_mask, distinct) = card_mask(board);
        if !distinct || player.mask() & opponent.mask() != 0 {
            return Err(EquityError::DuplicateCards);
        }
        if board_mask & (player.mask() | opponent.mask()) != 0 {
            return Err(EquityError::DuplicateCards);
        }

        let mut dead = board.to_vec();
        dead.extend(player.as_array());
        dead.extend(opponent.as_array());
        let unseen = Deck::remaining_cards(&dead);
        debug!("enumerating {street} matchup {player} vs {opponent}");

        let known = RankState::from_cards(board);
        self.sweep(street, known, &unseen, |completed, _| {
            let mine = completed.add(player.high()).add(player.low()).value();
            let theirs = completed.add(opponent.high()).add(opponent.low()).value();
            let mut tally = Tally::default();
            tally.record(mine.cmp(&theirs));
            tally
        })
    }

    /// Visit every completion of the board out of `unseen`, summing the
    /// tallies returned by `visit`.
    fn sweep<F>(
        &self,
        street: Street,
        known: RankState,
        unseen: &[Card],
        visit: F,
    ) -> Result<Tally, EquityError>
    where
        F: Fn(RankState, u64) -> Tally + Sync,
    {
        match street.cards_to_come() {
            0 => self.sweep_k::<0, F>(known, unseen, visit),
            1 => self.sweep_k::<1, F>(known, unseen, visit),
            _ => self.sweep_k::<2, F>(known, unseen, visit),
        }
    }

    fn sweep_k<const K: usize, F>(
        &self,
        known: RankState,
        unseen: &[Card],
        visit: F,
    ) -> Result<Tally, EquityError>
    where
        F: Fn(RankState, u64) -> Tally + Sync,
    {
        let complete = |acc: Tally, indices: [usize; K]| -> Result<Tally, EquityError> {
            self.check_cancelled()?;
            let (board, used) = indices
                .iter()
                .map(|&i| unseen[i])
                .fold((known, 0u64), |(state, used), c| (state.add(c), used | c.mask()));
            Ok(acc + visit(board, used))
        };

        let mut completions = Combinations::<K>::new(unseen.len());
        if self.parallel {
            completions
                .collect::<Vec<_>>()
                .into_par_iter()
                .try_fold(Tally::default, complete)
                .try_reduce(Tally::default, |a, b| Ok(a + b))
        } else {
            completions.try_fold(Tally::default(), complete)
        }
    }

    fn check_cancelled(&self) -> Result<(), EquityError> {
        match &self.cancel {
            Some(token) if token.is_cancelled() => Err(EquityError::Cancelled),
            _ => Ok(()),
        }
    }
}

fn known_street(board: &[Card]) -> Result<Street, EquityError> {
    match Street::from_community_len(board.len()) {
        Some(street) if street != Street::Preflop => Ok(street),
        _ => Err(EquityError::BoardSize(board.len())),
    }
}
