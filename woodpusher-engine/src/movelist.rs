//! MoveList type used by the engine.
//!
//! The underlying container may change during pre-1.0 development, so a
//! MoveList type alias makes changes easy.

use arrayvec::ArrayVec;
use chess::ChessMove;

/// Most legal moves any reachable chess position can have.
pub const MAX_MOVES: usize = 218;

/// MoveList is a container that can hold the legal moves of a single position.
pub type MoveList = ArrayVec<ChessMove, MAX_MOVES>;
