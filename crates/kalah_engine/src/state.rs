//! Game state interface consumed by the search
//!
//! The engine owns no rules. Anything that can list moves, sow, detect the
//! end of the game and report store totals can be searched.

use std::fmt::Debug;

use crate::types::Side;

/// Immutable sowing-game position
///
/// Implementations must treat `self` as a value: [`sow`](GameState::sow)
/// returns a new state and leaves the receiver untouched. The engine trusts
/// every state it receives and never validates one.
///
/// # Contract
///
/// - `legal_moves(side)` is empty only when `is_final()` is true.
/// - `sow(side, mv)` is only called with a move drawn from
///   `legal_moves(side)`.
pub trait GameState: Sized {
    /// Pit selector; opaque to the engine beyond equality
    type Move: Clone + PartialEq + Debug;

    /// All moves available to `side`, in the collaborator's order
    fn legal_moves(&self, side: Side) -> Vec<Self::Move>;

    /// Apply `mv` for `side`, returning the next state and whether `side`
    /// moves again immediately
    fn sow(&self, side: Side, mv: &Self::Move) -> (Self, bool);

    /// True when neither side can move any more
    fn is_final(&self) -> bool;

    /// Stones in `side`'s store
    fn store(&self, side: Side) -> u32;
}
