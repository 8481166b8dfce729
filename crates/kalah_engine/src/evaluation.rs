//! Static evaluation
//!
//! Scores a position by store difference: near store minus far store.
//! The same polarity is used at every ply, whoever is to move.

use crate::state::GameState;
use crate::types::{Score, Side};

/// Evaluate a position from the near side's point of view
pub fn evaluate<S: GameState>(state: &S) -> Score {
    state.store(Side::Near) as Score - state.store(Side::Far) as Score
}
