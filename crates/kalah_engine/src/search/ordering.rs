//! Move ordering for alpha-beta pruning
//!
//! Each candidate is sown once and the resulting position is scored by the
//! static evaluator. Moves are then tried best-for-near first, whichever
//! side is to move; for the far side this still puts the most extreme
//! looking moves early, which is what the pruning feeds on.

use crate::evaluation::evaluate;
use crate::state::GameState;
use crate::types::{Score, Side};

/// One-ply lookahead key for a single move (extra turns ignored)
pub fn shallow_score<S: GameState>(state: &S, side: Side, mv: &S::Move) -> Score {
    let (after, _) = state.sow(side, mv);
    evaluate(&after)
}

/// Sort moves by [`shallow_score`], descending
///
/// The sort is stable: moves with equal keys keep the order the state
/// produced them in.
pub fn order_moves<S: GameState>(state: &S, side: Side, moves: Vec<S::Move>) -> Vec<S::Move> {
    let mut keyed: Vec<(Score, S::Move)> = moves
        .into_iter()
        .map(|mv| (shallow_score(state, side, &mv), mv))
        .collect();

    keyed.sort_by(|a, b| b.0.cmp(&a.0));

    keyed.into_iter().map(|(_, mv)| mv).collect()
}
