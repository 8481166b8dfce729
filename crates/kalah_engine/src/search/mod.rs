//! Alpha-beta search with iterative deepening
//!
//! ## Module Organization
//!
//! - `ordering` - One-ply lookahead move ordering
//! - `alphabeta` - Depth-bounded minimax with alpha-beta pruning
//! - `iterative` - Lazy iterative-deepening driver

mod alphabeta;
mod iterative;
mod ordering;

pub use alphabeta::{search, search_with_stats};
pub use iterative::{choose_moves, IterativeDeepening};
pub use ordering::{order_moves, shallow_score};
