//! Board, the game state the engine and the console game both play on.
//!
//! `Board` wraps the rules crate's position with a history stack so moves can
//! be undone in strict LIFO order, which is the surface the search walks the
//! game tree through. The rules crate stays the single source of truth for
//! legality, move generation, and checkmate/stalemate detection.

use std::fmt::{self, Display};
use std::str::FromStr;

use chess::{BoardStatus, ChessMove, Color, File, MoveGen, Piece, Rank, Square};

use crate::error::{Error, ErrorKind, Result};
use crate::eval::{self, Cp};
use crate::movelist::MoveList;
use crate::position::Position;

/// A chess position together with the sequence of positions it was reached
/// through. Equality covers the history too, so restoring a board after a
/// search can be checked attribute-for-attribute.
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    board: chess::Board,
    history: Vec<chess::Board>,
}

impl Board {
    /// Standard chess start position with empty history.
    pub fn start_position() -> Self {
        Self {
            board: chess::Board::default(),
            history: Vec::new(),
        }
    }

    /// Parse a position from a FEN string.
    pub fn from_fen(fen: &str) -> Result<Self> {
        let board = chess::Board::from_str(fen)
            .map_err(|err| Error::Message(ErrorKind::ParseFenMalformed, err.to_string()))?;
        Ok(Self {
            board,
            history: Vec::new(),
        })
    }

    /// Reset to the start position, clearing all history.
    pub fn reset(&mut self) {
        *self = Self::start_position();
    }

    /// The underlying rules-crate position.
    pub fn inner(&self) -> &chess::Board {
        &self.board
    }

    pub fn side_to_move(&self) -> Color {
        self.board.side_to_move()
    }

    /// Number of plies played since the initial position.
    pub fn plies(&self) -> usize {
        self.history.len()
    }

    /// Parse a move in coordinate notation (e2e4, e7e8q) and play it.
    /// Returns the parsed move, or an error if the string is malformed or the
    /// move is not legal here.
    pub fn make_move(&mut self, input: &str) -> Result<ChessMove> {
        let mv = ChessMove::from_str(input.trim())
            .map_err(|err| Error::Message(ErrorKind::ParseMoveMalformed, err.to_string()))?;
        self.try_push(mv)?;
        Ok(mv)
    }

    /// Play a move after checking it is legal for the current position.
    pub fn try_push(&mut self, mv: ChessMove) -> Result<()> {
        if !self.board.legal(mv) {
            return Err(Error::Message(ErrorKind::IllegalMove, mv.to_string()));
        }
        self.push(mv);
        Ok(())
    }

    /// Play an already-legal move. Legality is assumed, not checked.
    pub fn push(&mut self, mv: ChessMove) {
        self.history.push(self.board);
        self.board = self.board.make_move_new(mv);
    }

    /// Revert the most recent move.
    ///
    /// # Panics
    ///
    /// Panics if there is no move to revert. An unmatched pop means the
    /// apply/undo pairing was broken and the position can no longer be
    /// trusted, so there is nothing sensible to recover to.
    pub fn pop(&mut self) {
        self.board = self.history.pop().expect("pop called with no move history");
    }

    /// The outcome of the game, or None while the game is still on.
    pub fn result(&self) -> Option<GameResult> {
        match self.board.status() {
            BoardStatus::Checkmate => Some(match self.board.side_to_move() {
                Color::White => GameResult::BlackWins,
                Color::Black => GameResult::WhiteWins,
            }),
            BoardStatus::Stalemate => Some(GameResult::Stalemate),
            BoardStatus::Ongoing if self.insufficient_material() => {
                Some(GameResult::InsufficientMaterial)
            }
            BoardStatus::Ongoing => None,
        }
    }

    /// True when neither side retains mating material: no pawns or major
    /// pieces, and at most one minor piece on the whole board.
    fn insufficient_material(&self) -> bool {
        let majors_and_pawns = *self.board.pieces(Piece::Pawn)
            | *self.board.pieces(Piece::Rook)
            | *self.board.pieces(Piece::Queen);
        if majors_and_pawns.popcnt() > 0 {
            return false;
        }
        let minors = *self.board.pieces(Piece::Knight) | *self.board.pieces(Piece::Bishop);
        minors.popcnt() <= 1
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::start_position()
    }
}

impl FromStr for Board {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self> {
        Self::from_fen(s)
    }
}

impl Position for Board {
    type Move = ChessMove;
    type Moves = MoveList;

    fn legal_moves(&self) -> MoveList {
        MoveGen::new_legal(&self.board).collect()
    }

    fn apply(&mut self, mv: ChessMove) {
        self.push(mv);
    }

    fn undo(&mut self) {
        self.pop();
    }

    fn is_game_over(&self) -> bool {
        self.board.status() != BoardStatus::Ongoing
    }

    fn maximizing(&self) -> bool {
        self.board.side_to_move() == Color::White
    }

    fn evaluate(&self) -> Cp {
        eval::material(&self.board)
    }
}

/// ASCII board, rank 8 at the top, White pieces uppercase.
impl Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for rank in (0..8).rev() {
            write!(f, "{} ", rank + 1)?;
            for file in 0..8 {
                let square = Square::make_square(Rank::from_index(rank), File::from_index(file));
                match (self.board.piece_on(square), self.board.color_on(square)) {
                    (Some(piece), Some(color)) => write!(f, "{} ", piece.to_string(color))?,
                    _ => write!(f, ". ")?,
                }
            }
            writeln!(f)?;
        }
        write!(f, "  a b c d e f g h")
    }
}

/// How a finished game ended.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum GameResult {
    WhiteWins,
    BlackWins,
    Stalemate,
    InsufficientMaterial,
}

impl GameResult {
    /// Points awarded to (White, Black).
    pub fn scores(&self) -> (f32, f32) {
        match self {
            GameResult::WhiteWins => (1.0, 0.0),
            GameResult::BlackWins => (0.0, 1.0),
            GameResult::Stalemate | GameResult::InsufficientMaterial => (0.5, 0.5),
        }
    }
}

impl Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let message = match self {
            GameResult::WhiteWins => "Checkmate! White wins!",
            GameResult::BlackWins => "Checkmate! Black wins!",
            GameResult::Stalemate => "Stalemate!",
            GameResult::InsufficientMaterial => "Draw due to insufficient material!",
        };
        write!(f, "{message}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_position_has_twenty_moves() {
        let board = Board::start_position();
        assert_eq!(board.legal_moves().len(), 20);
        assert_eq!(board.side_to_move(), Color::White);
        assert!(!board.is_game_over());
    }

    #[test]
    fn push_pop_restores_position() {
        let mut board = Board::start_position();
        let before = board.clone();

        let mv = board.legal_moves()[0];
        board.push(mv);
        assert_ne!(board, before);
        board.pop();
        assert_eq!(board, before);
    }

    #[test]
    fn make_move_checks_legality() {
        let mut board = Board::start_position();
        assert!(board.make_move("e2e4").is_ok());
        assert_eq!(board.plies(), 1);

        // Pawns cannot move three squares.
        let err = board.make_move("e7e4").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::IllegalMove);
        // Not a move string at all. The parse failure reason is carried in
        // the message.
        let err = board.make_move("castle!").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ParseMoveMalformed);
        assert!(err.to_string().starts_with("parse move malformed: "));
        assert_eq!(board.plies(), 1);
    }

    #[test]
    fn checkmate_result() {
        // Fool's mate, White is checkmated.
        let board =
            Board::from_fen("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 0 3")
                .unwrap();
        assert!(board.is_game_over());
        assert_eq!(board.result(), Some(GameResult::BlackWins));
        assert_eq!(board.result().unwrap().scores(), (0.0, 1.0));
        assert_eq!(
            board.result().unwrap().to_string(),
            "Checkmate! Black wins!"
        );
    }

    #[test]
    fn stalemate_result() {
        let board = Board::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").unwrap();
        assert!(board.is_game_over());
        assert_eq!(board.result(), Some(GameResult::Stalemate));
        assert_eq!(board.result().unwrap().scores(), (0.5, 0.5));
    }

    #[test]
    fn bare_kings_are_a_draw() {
        let board = Board::from_fen("k7/8/8/8/8/8/8/K7 w - - 0 1").unwrap();
        assert_eq!(board.result(), Some(GameResult::InsufficientMaterial));

        // A lone bishop cannot mate either.
        let board = Board::from_fen("k7/8/8/8/8/8/8/KB6 w - - 0 1").unwrap();
        assert_eq!(board.result(), Some(GameResult::InsufficientMaterial));

        // A rook can.
        let board = Board::from_fen("k7/8/8/8/8/8/8/KR6 w - - 0 1").unwrap();
        assert_eq!(board.result(), None);
    }

    #[test]
    fn from_fen_rejects_garbage() {
        let err = Board::from_fen("not a fen").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ParseFenMalformed);
        assert!(err.to_string().starts_with("parse fen malformed: "));
    }

    #[test]
    fn reset_returns_to_the_start_position() {
        let mut board = Board::start_position();
        board.make_move("e2e4").unwrap();
        board.make_move("e7e5").unwrap();

        board.reset();
        assert_eq!(board, Board::start_position());
        assert_eq!(board.plies(), 0);
    }
}
