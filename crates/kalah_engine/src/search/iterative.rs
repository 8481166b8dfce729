//! Iterative deepening search
//!
//! Runs a full-window search for the near side at each depth of a
//! [`DepthRange`] and hands back one [`Decision`] per completed depth. The
//! driver is an iterator, so the caller decides when to stop: pulling the
//! next element is what starts the next, deeper search. No timing happens
//! here.

use std::iter::FusedIterator;
use std::ops::Range;

use tracing::{debug, warn};

use super::alphabeta::alphabeta;
use crate::constants::SCORE_INF;
use crate::error::EngineResult;
use crate::state::GameState;
use crate::types::{Decision, DepthRange, SearchStats, Side};

/// Lazy sequence of best moves at increasing depths
///
/// Created by [`choose_moves`] or [`IterativeDeepening::with_depths`]. The
/// sequence cannot be restarted; search a fresh position with a fresh
/// driver. After yielding an error it yields nothing more.
pub struct IterativeDeepening<S: GameState> {
    state: S,
    depths: Range<u32>,
    failed: bool,
}

impl<S: GameState> IterativeDeepening<S> {
    /// Driver over an explicit depth range
    pub fn with_depths(state: S, range: DepthRange) -> Self {
        Self {
            state,
            depths: range.depths(),
            failed: false,
        }
    }

    /// Position being searched
    pub fn state(&self) -> &S {
        &self.state
    }
}

/// Driver over the default depths (3 through 11)
pub fn choose_moves<S: GameState>(state: S) -> IterativeDeepening<S> {
    IterativeDeepening::with_depths(state, DepthRange::default())
}

impl<S: GameState> Iterator for IterativeDeepening<S> {
    type Item = EngineResult<Decision<S::Move>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let depth = self.depths.next()?;

        let mut stats = SearchStats::default();
        match alphabeta(&self.state, depth, -SCORE_INF, SCORE_INF, Side::Near, None, &mut stats) {
            Ok(result) => {
                debug!(
                    depth,
                    score = result.score,
                    best_move = ?result.best_move,
                    nodes = stats.nodes,
                    leaves = stats.leaves,
                    cutoffs = stats.cutoffs,
                    extra_turns = stats.extra_turns,
                    "depth complete"
                );
                Some(Ok(Decision {
                    depth,
                    score: result.score,
                    best_move: result.best_move,
                    stats,
                }))
            }
            Err(err) => {
                warn!(depth, error = %err, "search failed");
                self.failed = true;
                Some(Err(err))
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.failed {
            (0, Some(0))
        } else {
            (0, Some(self.depths.len()))
        }
    }
}

impl<S: GameState> FusedIterator for IterativeDeepening<S> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;
    use crate::error::EngineError;
    use crate::search::search;
    use crate::testing::{CountingBoard, TreeBuilder};

    #[test]
    fn test_default_sequence_has_nine_depths() {
        let decisions: Vec<_> = choose_moves(Board::new(3, 2))
            .collect::<EngineResult<Vec<_>>>()
            .unwrap();
        assert_eq!(decisions.len(), 9);
        let depths: Vec<u32> = decisions.iter().map(|d| d.depth).collect();
        assert_eq!(depths, (3..=11).collect::<Vec<_>>());
        assert!(decisions.iter().all(|d| d.best_move.is_some()));
    }

    #[test]
    fn test_each_step_matches_direct_search() {
        let board = Board::new(4, 3);
        let range = DepthRange::new(1, 6).unwrap();
        for decision in IterativeDeepening::with_depths(board.clone(), range) {
            let decision = decision.unwrap();
            let direct = search(&board, decision.depth, -SCORE_INF, SCORE_INF, Side::Near, None).unwrap();
            assert_eq!(decision.score, direct.score);
            assert_eq!(decision.best_move, direct.best_move);
        }
    }

    #[test]
    fn test_first_step_searches_only_the_first_depth() {
        let mut driver = choose_moves(CountingBoard::new(Board::new(6, 6)));
        let first = driver.next().unwrap().unwrap();
        assert_eq!(first.depth, 3);
        let after_first = driver.state().generated();

        let fresh = CountingBoard::new(Board::new(6, 6));
        search(&fresh, 3, -SCORE_INF, SCORE_INF, Side::Near, None).unwrap();
        assert_eq!(after_first, fresh.generated());

        let second = driver.next().unwrap().unwrap();
        assert_eq!(second.depth, 4);
        assert!(driver.state().generated() > after_first);
    }

    #[test]
    fn test_nothing_is_searched_before_the_first_pull() {
        let driver = choose_moves(CountingBoard::new(Board::new(6, 6)));
        assert_eq!(driver.state().generated(), 0);
    }

    #[test]
    fn test_custom_range() {
        let range = DepthRange::new(1, 3).unwrap();
        let depths: Vec<u32> = IterativeDeepening::with_depths(Board::new(6, 4), range)
            .map(|d| d.unwrap().depth)
            .collect();
        assert_eq!(depths, vec![1, 2]);
    }

    #[test]
    fn test_final_root_yields_no_move() {
        let board: Board = "<3,5,13,0,0,0,0,0,0>".parse().unwrap();
        for decision in choose_moves(board) {
            let decision = decision.unwrap();
            assert_eq!(decision.score, -8);
            assert_eq!(decision.best_move, None);
            assert_eq!(decision.stats.nodes, 1);
            assert_eq!(decision.stats.leaves, 1);
        }
    }

    #[test]
    fn test_error_ends_the_sequence() {
        let mut tree = TreeBuilder::new();
        let root = tree.dead_end(0);
        let mut driver = choose_moves(tree.build(root));

        assert!(matches!(
            driver.next(),
            Some(Err(EngineError::NoLegalMoves { depth: 3, .. }))
        ));
        assert_eq!(driver.size_hint(), (0, Some(0)));
        assert!(driver.next().is_none());
        assert!(driver.next().is_none());
    }

    #[test]
    fn test_size_hint_counts_remaining_depths() {
        let mut driver = choose_moves(Board::new(3, 1));
        assert_eq!(driver.size_hint(), (0, Some(9)));
        driver.next();
        assert_eq!(driver.size_hint(), (0, Some(8)));
    }

    #[test]
    fn test_stats_are_per_depth() {
        let decisions: Vec<_> = IterativeDeepening::with_depths(Board::new(4, 4), DepthRange::new(1, 5).unwrap())
            .map(|d| d.unwrap())
            .collect();
        for decision in &decisions {
            let mut stats = SearchStats::default();
            crate::search::search_with_stats(
                &Board::new(4, 4),
                decision.depth,
                -SCORE_INF,
                SCORE_INF,
                Side::Near,
                None,
                &mut stats,
            )
            .unwrap();
            assert_eq!(decision.stats, stats);
            assert!(decision.stats.leaves > 0);
            assert!(decision.stats.leaves < decision.stats.nodes);
        }
    }
}
