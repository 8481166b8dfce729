//! # Engine Core Types
//!
//! Small value types shared by the evaluator, the search and the
//! iterative-deepening driver.
//!
//! ## Score Polarity
//!
//! Every [`Score`] is measured from the **near** side's point of view: the
//! near side is the player the engine is choosing a move for, and it
//! maximizes. The far side minimizes the same number. Scores are never
//! negated when the side to move changes, so the search keeps explicit
//! max and min branches instead of a single negamax comparison.
//!
//! ## Search Output
//!
//! A search folds its children into a [`SearchResult`]: the best score
//! seen so far and the move that produced it. At a cutoff node the move is
//! the one that *led* to the node, which is how the root learns which of
//! its own moves a leaf score belongs to.

use std::fmt;
use std::ops::Range;

use crate::constants::{MAX_DEPTH, MIN_DEPTH};
use crate::error::{EngineError, EngineResult};

/// Evaluation score, positive when the near side is ahead
pub type Score = i32;

/// One of the two players
///
/// `Near` is the searching (maximizing) side; `Far` is its opponent.
/// KGP servers call these south and north.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Near,
    Far,
}

impl Side {
    /// The opponent of this side
    pub fn other(self) -> Side {
        match self {
            Side::Near => Side::Far,
            Side::Far => Side::Near,
        }
    }

    /// Whether this side maximizes the score
    pub fn is_maximizing(self) -> bool {
        self == Side::Near
    }

    /// Array slot used by boards that store per-side data in pairs
    pub fn index(self) -> usize {
        match self {
            Side::Near => 0,
            Side::Far => 1,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Near => f.write_str("near"),
            Side::Far => f.write_str("far"),
        }
    }
}

/// Score and move folded out of a search node
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult<M> {
    /// Minimax value of the node
    ///
    /// A bound instead of an exact value when the node was pruned, or when
    /// it returned through an extra-turn move searched after a sibling had
    /// already narrowed the window.
    pub score: Score,
    /// Move chosen at the node, or the move that led to a cutoff node
    pub best_move: Option<M>,
}

impl<M> SearchResult<M> {
    pub fn new(score: Score, best_move: Option<M>) -> Self {
        Self { score, best_move }
    }
}

/// Counters collected during one search
///
/// Purely informational; they never influence move choice.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Search nodes entered, leaves included
    pub nodes: u64,
    /// Nodes scored by the static evaluator (depth 0 or final)
    pub leaves: u64,
    /// Sibling loops abandoned because `beta <= alpha`
    pub cutoffs: u64,
    /// Nodes that returned through an extra-turn move
    pub extra_turns: u64,
}

/// Depths visited by the iterative-deepening driver (`min..max`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DepthRange {
    min: u32,
    max: u32,
}

impl DepthRange {
    /// Create a range, rejecting empty windows and a zero start depth
    pub fn new(min: u32, max: u32) -> EngineResult<Self> {
        if min == 0 || min >= max {
            return Err(EngineError::InvalidDepthRange { min, max });
        }
        Ok(Self { min, max })
    }

    /// First depth searched
    pub fn min(&self) -> u32 {
        self.min
    }

    /// Exclusive upper bound
    pub fn max(&self) -> u32 {
        self.max
    }

    /// Number of depths in the range
    pub fn len(&self) -> usize {
        (self.max - self.min) as usize
    }

    /// Always false for a validated range
    pub fn is_empty(&self) -> bool {
        self.min >= self.max
    }

    pub fn depths(&self) -> Range<u32> {
        self.min..self.max
    }
}

impl Default for DepthRange {
    fn default() -> Self {
        Self {
            min: MIN_DEPTH,
            max: MAX_DEPTH,
        }
    }
}

/// Outcome of one completed iterative-deepening step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decision<M> {
    /// Depth limit this decision was searched to
    pub depth: u32,
    /// Root score at that depth
    ///
    /// Exact unless the root returned through an extra-turn move tried
    /// after an ordinary one; that score is only a window bound.
    pub score: Score,
    /// Best root move, `None` only when the root was already final
    pub best_move: Option<M>,
    /// Counters for this depth alone
    pub stats: SearchStats,
}
