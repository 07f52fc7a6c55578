//! Search functions.
//!
//! Two searchers share one shape: `alpha_beta`, the primary fixed-depth
//! minimax with alpha-beta pruning, and `minimax`, the plain fixed-depth
//! minimax kept as a reference. Pruning only shrinks the set of nodes
//! visited; both return the same score and pick the same move.
//!
//! Searches are synchronous, single-threaded and independent: no
//! transposition table, no move ordering, no iterative deepening, and no
//! state carried between calls. A caller wanting bounded latency bounds it
//! through `depth`.

mod alpha_beta;
mod minimax;

pub use alpha_beta::*;
pub use minimax::*;

use std::fmt::{self, Display};
use std::time::Duration;

use crate::eval::Cp;
use crate::position::Position;

/// The results found from running a search on some root position.
#[derive(Debug, Clone)]
pub struct SearchResult<M> {
    /// The best move found, or None if the root has no legal moves.
    pub best_move: Option<M>,
    /// Absolute score of the root after the best move, maximizing side +.
    /// When `best_move` is None this is the static evaluation of the root.
    pub score: Cp,
    /// Depth in plies this search was asked for.
    pub depth: u32,
    /// Total number of nodes visited.
    pub nodes: u64,
    /// Total time elapsed from the start to the end of the search.
    pub elapsed: Duration,
}

impl<M: Display> Display for SearchResult<M> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "SearchResult {{")?;
        match &self.best_move {
            Some(mv) => writeln!(f, "    best_move: {mv}")?,
            None => writeln!(f, "    best_move: (none)")?,
        }
        writeln!(f, "    score    : {}", self.score)?;
        writeln!(f, "    depth    : {}", self.depth)?;
        writeln!(f, "    nodes    : {}", self.nodes)?;
        writeln!(
            f,
            "    elapsed  : {}.{:03}s",
            self.elapsed.as_secs(),
            self.elapsed.subsec_millis()
        )?;
        write!(f, "}}")
    }
}

/// Primary search entry point. Runs an alpha-beta pruned minimax to `depth`
/// plies and reports the best move with its score and search metrics.
///
/// The position is explored in place through apply/undo and is restored
/// exactly before returning.
pub fn search<P: Position>(position: &mut P, depth: u32) -> SearchResult<P::Move> {
    alpha_beta(position, depth)
}

/// The single decision function: the best move for the side to move, or None
/// if there are no legal moves. Callers must handle None; there is no move to
/// apply in a terminal position.
///
/// Depth 0 is not an error: the root enumeration happens here regardless of
/// the depth counter, so each root move is applied once and its resulting
/// position evaluated directly.
pub fn best_move<P: Position>(position: &mut P, depth: u32) -> Option<P::Move> {
    alpha_beta(position, depth).best_move
}
