pub mod board;
pub mod error;
pub mod eval;
pub mod movelist;
pub mod position;
pub mod search;

pub use board::Board;
pub use position::Position;

// Re-export the rules crate so downstream crates use the same move and
// color types without a separate dependency.
pub use chess;
