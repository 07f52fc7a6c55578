//! Position trait, the seam between the search functions and the rules of
//! the game being searched.
//!
//! Search only needs to enumerate legal moves, walk the game tree by applying
//! and undoing them in place, and statically evaluate leaves. Anything that
//! provides those operations can be searched, which keeps the search functions
//! testable against games much smaller than chess.

use crate::eval::Cp;

/// A mutable game state that search can explore.
///
/// # Contract
///
/// * Moves returned by `legal_moves` are legal for the current state, in a
///   deterministic order. That order is the tie-break priority of the search:
///   among equally scored root moves, the first enumerated wins.
/// * `apply` advances the state one ply and always succeeds for an enumerated
///   move. `undo` exactly reverts the most recent `apply`, in strict LIFO
///   order. Search matches every `apply` with exactly one `undo` before
///   returning, so the state is bit-for-bit restored after any search call.
/// * `evaluate` is pure and deterministic, scored from the fixed maximizing
///   perspective, and returns values strictly inside `(Cp::MIN, Cp::MAX)`.
pub trait Position {
    /// Opaque move handle. Search never decomposes it.
    type Move: Copy + Eq;
    /// Container of legal moves produced per node.
    type Moves: IntoIterator<Item = Self::Move>;

    /// All legal moves for the current state, in tie-break order.
    fn legal_moves(&self) -> Self::Moves;

    /// Advance one ply. The move must be currently legal.
    fn apply(&mut self, mv: Self::Move);

    /// Revert the most recent `apply`.
    fn undo(&mut self);

    /// True at checkmate, stalemate, or any other terminal condition.
    fn is_game_over(&self) -> bool;

    /// True if the side to move is the maximizing player.
    fn maximizing(&self) -> bool;

    /// Static evaluation from the fixed maximizing perspective.
    fn evaluate(&self) -> Cp;
}
