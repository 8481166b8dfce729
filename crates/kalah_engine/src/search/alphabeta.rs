//! Depth-bounded minimax with alpha-beta pruning
//!
//! Scores keep the near side's polarity at every ply, so the near (max) and
//! far (min) branches are written out separately instead of negamax
//! style. A move that grants an extra turn is searched again at the same
//! depth for the same side, and its value is returned for the node at once:
//! siblings ordered after it are not explored.

use super::ordering::order_moves;
use crate::constants::SCORE_INF;
use crate::error::{EngineError, EngineResult};
use crate::evaluation::evaluate;
use crate::state::GameState;
use crate::types::{Score, SearchResult, SearchStats, Side};

/// Alpha-beta search from `state` with `side` to move
///
/// At a cutoff (depth 0 or a final state) the result carries `last_move`,
/// the move that led to the node. Pass `None` at the root.
///
/// # Errors
///
/// Returns [`EngineError::NoLegalMoves`] if a non-final state offers no
/// moves to the side to move.
pub fn search<S: GameState>(
    state: &S,
    depth: u32,
    alpha: Score,
    beta: Score,
    side: Side,
    last_move: Option<S::Move>,
) -> EngineResult<SearchResult<S::Move>> {
    let mut stats = SearchStats::default();
    alphabeta(state, depth, alpha, beta, side, last_move, &mut stats)
}

/// Same as [`search`], also accumulating counters into `stats`
pub fn search_with_stats<S: GameState>(
    state: &S,
    depth: u32,
    alpha: Score,
    beta: Score,
    side: Side,
    last_move: Option<S::Move>,
    stats: &mut SearchStats,
) -> EngineResult<SearchResult<S::Move>> {
    alphabeta(state, depth, alpha, beta, side, last_move, stats)
}

pub(crate) fn alphabeta<S: GameState>(
    state: &S,
    depth: u32,
    mut alpha: Score,
    mut beta: Score,
    side: Side,
    last_move: Option<S::Move>,
    stats: &mut SearchStats,
) -> EngineResult<SearchResult<S::Move>> {
    stats.nodes += 1;

    if depth == 0 || state.is_final() {
        stats.leaves += 1;
        return Ok(SearchResult::new(evaluate(state), last_move));
    }

    let moves = state.legal_moves(side);
    if moves.is_empty() {
        return Err(EngineError::NoLegalMoves { side, depth });
    }
    let moves = order_moves(state, side, moves);

    let maximizing = side.is_maximizing();
    let mut best = SearchResult::new(if maximizing { -SCORE_INF } else { SCORE_INF }, None);

    for mv in moves {
        let (next, again) = state.sow(side, &mv);

        if again {
            stats.extra_turns += 1;
            let result = alphabeta(&next, depth, alpha, beta, side, Some(mv.clone()), stats)?;
            return Ok(SearchResult::new(result.score, Some(mv)));
        }

        let score = alphabeta(&next, depth - 1, alpha, beta, side.other(), Some(mv.clone()), stats)?
            .score;

        // Strict comparisons: on a tie the earlier move stays.
        if maximizing {
            if score > best.score {
                best = SearchResult::new(score, Some(mv));
            }
            alpha = alpha.max(score);
        } else {
            if score < best.score {
                best = SearchResult::new(score, Some(mv));
            }
            beta = beta.min(score);
        }

        if beta <= alpha {
            stats.cutoffs += 1;
            break;
        }
    }

    Ok(best)
}
