//! Static evaluation functions.
//!
//! All scores are absolute: White is the maxing player and Black is the
//! minning player, so a centipawn score of +10 is winning for White, while
//! -10 is winning for Black.
//!
//! Evaluation is material count only. Positional factors like king safety,
//! mobility and pawn structure are deliberately out of scope.

use std::fmt::{self, Display};
use std::ops::{Add, AddAssign, Mul, Neg, Sub};

use chess::{Board, Color, Piece, ALL_PIECES};

/// Centipawn, a common unit of measurement in chess, where 100 Centipawn == 1 Pawn.
/// A positive centipawn value represents an advantage for White,
/// and a negative value represents an advantage for Black.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Default)]
pub struct Cp(pub CpKind);

// Type alias to make changing the underlying type easy if needed.
pub type CpKind = i32;

impl Cp {
    /// Smallest representable score, used where -infinity is called for.
    /// Symmetric with `MAX` so negation cannot overflow.
    pub const MIN: Cp = Cp(-CpKind::MAX);
    /// Largest representable score, used where +infinity is called for.
    pub const MAX: Cp = Cp(CpKind::MAX);

    pub const fn signum(&self) -> CpKind {
        self.0.signum()
    }

    /// Returns the color leading with this score, or None if even.
    pub const fn leading(&self) -> Option<Color> {
        match self.0.signum() {
            1 => Some(Color::White),
            -1 => Some(Color::Black),
            _ => None,
        }
    }
}

impl Add for Cp {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}
impl AddAssign for Cp {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0
    }
}
impl Sub for Cp {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}
impl Mul<u32> for Cp {
    type Output = Cp;
    fn mul(self, rhs: u32) -> Self::Output {
        Self(self.0 * rhs as CpKind)
    }
}
impl Neg for Cp {
    type Output = Self;
    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}
impl Display for Cp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Default, color independent value per piece.
/// The king carries no material value because both sides always have
/// exactly one.
pub const fn piece_value(piece: Piece) -> Cp {
    Cp(match piece {
        Piece::Pawn => 100,
        Piece::Knight => 300,
        Piece::Bishop => 300,
        Piece::Rook => 500,
        Piece::Queen => 900,
        Piece::King => 0,
    })
}

/// Returns the material balance of the position.
/// Equivalent to piece_centipawns(White) - piece_centipawns(Black).
/// A positive value is an advantage for White, 0 is even, negative is an
/// advantage for Black. Pure function of the piece sets; terminal and empty
/// positions are counted like any other.
pub fn material(board: &Board) -> Cp {
    ALL_PIECES
        .iter()
        .map(|&piece| {
            let white = (*board.pieces(piece) & *board.color_combined(Color::White)).popcnt();
            let black = (*board.pieces(piece) & *board.color_combined(Color::Black)).popcnt();
            piece_value(piece) * white - piece_value(piece) * black
        })
        .fold(Cp::default(), |acc, value| acc + value)
}
