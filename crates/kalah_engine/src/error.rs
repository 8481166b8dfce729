//! Error types for the Kalah engine
//!
//! Covers search precondition failures, driver configuration, and the
//! reference board's parsing and move validation.

use thiserror::Error;

use crate::types::Side;

/// Errors that can occur in the engine
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// A state that is not final offered no moves to the side to move
    #[error("No legal moves for {side} at depth {depth} on a non-final state")]
    NoLegalMoves { side: Side, depth: u32 },

    /// Iterative-deepening window is empty or starts at zero
    #[error("Invalid depth range {min}..{max} (need 1 <= min < max)")]
    InvalidDepthRange { min: u32, max: u32 },

    /// Board text could not be parsed
    #[error("Cannot parse board {input:?}: {reason}")]
    ParseBoard { input: String, reason: String },

    /// Pit is out of range or empty
    #[error("Illegal move: {side} cannot sow from pit {pit}")]
    IllegalMove { side: Side, pit: usize },

    /// Move attempted on a finished game
    #[error("Game is already over")]
    GameOver,
}

/// Result type alias for engine operations
pub type EngineResult<T> = Result<T, EngineError>;
