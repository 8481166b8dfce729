//! Kalah move-selection engine
//!
//! Chooses moves for a two-player sowing game by searching the game tree
//! with alpha-beta pruning at increasing depth limits. The engine knows
//! nothing about the rules: it drives any [`GameState`] and keeps no state
//! between decisions.
//!
//! ## Module Organization
//!
//! - `types` - Sides, scores, search results and depth ranges
//! - `state` - The [`GameState`] trait the search consumes
//! - `evaluation` - Store-difference static evaluator
//! - `search` - Move ordering, alpha-beta, iterative deepening
//! - `board` - Reference Kalah board with KGP text notation
//! - `error` - Engine error type
//!
//! ## Usage
//!
//! ```rust
//! use kalah_engine::{choose_moves, Board};
//!
//! let mut latest = None;
//! for decision in choose_moves(Board::new(6, 6)).take(2) {
//!     latest = decision.unwrap().best_move;
//! }
//! assert!(latest.is_some());
//! ```

pub mod board;
pub mod constants;
pub mod error;
pub mod evaluation;
pub mod search;
pub mod state;
pub mod types;

#[cfg(test)]
mod testing;

pub use board::Board;
pub use error::{EngineError, EngineResult};
pub use evaluation::evaluate;
pub use search::{choose_moves, order_moves, search, search_with_stats, shallow_score, IterativeDeepening};
pub use state::GameState;
pub use types::{Decision, DepthRange, Score, SearchResult, SearchStats, Side};
