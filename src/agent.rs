//! Timed move selection
//!
//! The engine's iterative-deepening driver never looks at a clock. This
//! module is the caller that does: it pulls one depth at a time and stops
//! pulling once the budget is spent, keeping the last completed move. A
//! depth that has started always runs to completion, so a decision can
//! overshoot the budget by up to one depth.

use std::time::Duration;

use anyhow::{Context, Result};
use kalah_engine::{DepthRange, GameState, IterativeDeepening, Score, Side};
use tracing::{info, warn};
use web_time::Instant;

use crate::config::{AgentConfig, ConfigError};

/// Outcome of one timed decision
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report<M> {
    /// Move to play, `None` only when the near side has no legal move
    pub best_move: Option<M>,
    /// Deepest completed depth
    pub depth: Option<u32>,
    /// Root score at that depth
    pub score: Option<Score>,
    pub elapsed: Duration,
    /// True if the budget ran out before the last depth
    pub out_of_time: bool,
    /// True if the move came from the legal-move fallback, not a search
    pub fallback: bool,
}

/// Move chooser for the near side with a per-decision time budget
#[derive(Debug, Clone, Copy)]
pub struct Agent {
    budget: Duration,
    depths: DepthRange,
}

impl Agent {
    pub fn new(budget: Duration, depths: DepthRange) -> Self {
        Self { budget, depths }
    }

    pub fn from_config(config: &AgentConfig) -> Result<Self, ConfigError> {
        Ok(Self::new(config.time_budget(), config.validate()?))
    }

    pub fn budget(&self) -> Duration {
        self.budget
    }

    pub fn depths(&self) -> DepthRange {
        self.depths
    }

    /// Search `state` for the near side until the budget or depths run out
    ///
    /// # Errors
    ///
    /// Fails if the engine reports a broken state (a non-final position
    /// with no legal moves).
    pub fn decide<S: GameState + Clone>(&self, state: &S) -> Result<Report<S::Move>> {
        let start = Instant::now();
        let mut driver = IterativeDeepening::with_depths(state.clone(), self.depths);

        let mut depth = None;
        let mut score = None;
        let mut best_move = None;
        let mut out_of_time = false;

        for step in driver.by_ref() {
            let decision = step.context("search aborted")?;
            depth = Some(decision.depth);
            score = Some(decision.score);
            best_move = decision.best_move;

            if start.elapsed() >= self.budget {
                out_of_time = driver.size_hint().1 != Some(0);
                break;
            }
        }

        let mut fallback = false;
        if best_move.is_none() {
            // Same fallback as a search that found nothing: any legal move.
            best_move = state.legal_moves(Side::Near).into_iter().next();
            fallback = best_move.is_some();
            if fallback {
                warn!(best_move = ?best_move, "search produced no move, using first legal move");
            }
        }

        let elapsed = start.elapsed();
        if out_of_time {
            info!(
                depth = ?depth,
                elapsed_ms = elapsed.as_millis() as u64,
                budget_ms = self.budget.as_millis() as u64,
                "time budget exhausted"
            );
        }
        info!(
            best_move = ?best_move,
            depth = ?depth,
            score = ?score,
            elapsed_ms = elapsed.as_millis() as u64,
            "decision"
        );

        Ok(Report {
            best_move,
            depth,
            score,
            elapsed,
            out_of_time,
            fallback,
        })
    }

    /// Move to play for the near side, or `None` if there is none
    pub fn choose_move<S: GameState + Clone>(&self, state: &S) -> Result<Option<S::Move>> {
        Ok(self.decide(state)?.best_move)
    }
}
