//! Engine constants
//!
//! Score bounds and the default iterative-deepening window.

use crate::types::Score;

/// Stand-in for an infinite score. `-SCORE_INF` is the lower bound.
pub const SCORE_INF: Score = Score::MAX;

/// First depth searched by the iterative-deepening driver.
pub const MIN_DEPTH: u32 = 3;

/// Exclusive upper bound on the depths searched by the driver.
pub const MAX_DEPTH: u32 = 12;
