//! Board square representation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{Coordinate, File, Path, PathType, Rank};

/// Error returned when parsing a square from algebraic notation fails.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("invalid square notation: '{0}'")]
pub struct ParseSquareError(pub String);

/// A square on the chess board, addressed by file and rank.
///
/// Squares are packed into a single byte in little-endian rank-file order:
/// - a1 = 0, b1 = 1, ..., h1 = 7
/// - a2 = 8, ..., h8 = 63
///
/// Squares (de)serialize as their algebraic notation.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Square(u8);

impl Square {
    /// Creates a square from file and rank.
    #[inline]
    pub const fn new(file: File, rank: Rank) -> Self {
        Square(rank.index() * 8 + file.index())
    }

    /// Parses a square from algebraic notation (e.g., "e4").
    ///
    /// Accepts exactly a lowercase file letter followed by a rank digit.
    pub fn from_notation(s: &str) -> Option<Self> {
        let mut chars = s.chars();
        let file = File::from_letter(chars.next()?)?;
        let rank = Rank::from_char(chars.next()?)?;
        if chars.next().is_some() {
            return None;
        }
        Some(Square::new(file, rank))
    }

    /// Iterates over all 64 squares, a1 first and h8 last.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..64u8).map(Square)
    }

    /// Returns the file of this square.
    #[inline]
    pub const fn file(self) -> File {
        match File::from_index((self.0 % 8) as i32) {
            Some(f) => f,
            None => unreachable!(),
        }
    }

    /// Returns the rank of this square.
    #[inline]
    pub const fn rank(self) -> Rank {
        match Rank::from_index((self.0 / 8) as i32) {
            Some(r) => r,
            None => unreachable!(),
        }
    }

    /// Returns the algebraic notation for this square.
    pub fn to_notation(self) -> String {
        format!("{}{}", self.file(), self.rank())
    }

    /// Returns true if `other` is one king step away from this square.
    ///
    /// A square is never adjacent to itself. When `diagonal` is false only
    /// squares sharing a file or a rank count.
    pub fn is_adjacent(self, other: Square, diagonal: bool) -> bool {
        if self == other {
            return false;
        }

        let delta_file = (other.file().index() as i32 - self.file().index() as i32).abs();
        let delta_rank = (other.rank().index() as i32 - self.rank().index() as i32).abs();
        if delta_file > 1 || delta_rank > 1 {
            return false;
        }

        diagonal || delta_file + delta_rank == 1
    }

    /// Returns the square shifted by the given file and rank deltas.
    #[inline]
    pub fn shifted(self, file_delta: i32, rank_delta: i32) -> Option<Square> {
        let file = self.file().shift(file_delta)?;
        let rank = self.rank().shift(rank_delta)?;
        Some(Square::new(file, rank))
    }

    /// Returns the ray of squares leaving this square in the given direction.
    ///
    /// The ray starts one step away, excludes this square and stops at the
    /// board edge. A zero direction yields an empty ray.
    pub fn line(self, file_delta: i32, rank_delta: i32) -> Vec<Square> {
        if file_delta == 0 && rank_delta == 0 {
            return Vec::new();
        }

        std::iter::successors(self.shifted(file_delta, rank_delta), |sq| {
            sq.shifted(file_delta, rank_delta)
        })
        .collect()
    }

    /// Finds the straight path from this square to `target`.
    ///
    /// Returns `None` when the squares are equal or not aligned on a file,
    /// rank or diagonal.
    pub fn path_to(self, target: Square) -> Option<Path> {
        let delta_file = target.file().index() as i32 - self.file().index() as i32;
        let delta_rank = target.rank().index() as i32 - self.rank().index() as i32;

        let kind = if delta_file == 0 && delta_rank == 0 {
            return None;
        } else if delta_file.abs() == delta_rank.abs() {
            PathType::Diagonal
        } else if delta_file == 0 {
            PathType::Vertical
        } else if delta_rank == 0 {
            PathType::Horizontal
        } else {
            return None;
        };

        let (step_file, step_rank) = (delta_file.signum(), delta_rank.signum());
        let steps = delta_file.abs().max(delta_rank.abs());
        let middle = (1..steps)
            .filter_map(|i| self.shifted(step_file * i, step_rank * i))
            .collect();

        Some(Path::between(self, middle, target, kind))
    }

    pub const A1: Square = Square(0);
    pub const E1: Square = Square(4);
    pub const H1: Square = Square(7);
    pub const A8: Square = Square(56);
    pub const E8: Square = Square(60);
    pub const H8: Square = Square(63);
}

impl FromStr for Square {
    type Err = ParseSquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Square::from_notation(s).ok_or_else(|| ParseSquareError(s.to_string()))
    }
}

impl TryFrom<String> for Square {
    type Error = ParseSquareError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Square> for String {
    fn from(square: Square) -> Self {
        square.to_notation()
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({})", self.to_notation())
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_notation())
    }
}
