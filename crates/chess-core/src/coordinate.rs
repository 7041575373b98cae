//! Board coordinates: files and ranks.

use std::fmt;

/// A validated board coordinate with an index in the range 0-7.
///
/// Values can only be obtained through [`Coordinate::from_index`] or the
/// constructors of the implementing types, so an out-of-range index never
/// produces a usable value.
pub trait Coordinate: Copy + Eq + Sized {
    /// Smallest valid index.
    const MIN_INDEX: i32 = 0;
    /// Largest valid index.
    const MAX_INDEX: i32 = 7;

    /// Creates a coordinate from index, or `None` if the index is outside 0-7.
    fn from_index(index: i32) -> Option<Self>;

    /// Returns the index (0-7).
    fn index(self) -> u8;

    /// Returns the coordinate `delta` steps away, or `None` if that leaves the board.
    fn shift(self, delta: i32) -> Option<Self> {
        (self.index() as i32)
            .checked_add(delta)
            .and_then(Self::from_index)
    }

    /// Returns true if the indices differ by exactly one.
    fn is_adjacent(self, other: Self) -> bool {
        (self.index() as i32 - other.index() as i32).abs() == 1
    }
}

/// A file (column) on the chess board, from A to H.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum File {
    A = 0,
    B = 1,
    C = 2,
    D = 3,
    E = 4,
    F = 5,
    G = 6,
    H = 7,
}

impl File {
    /// All files in order.
    pub const ALL: [File; 8] = [
        File::A,
        File::B,
        File::C,
        File::D,
        File::E,
        File::F,
        File::G,
        File::H,
    ];

    /// Creates a file from index (0-7).
    #[inline]
    pub const fn from_index(index: i32) -> Option<Self> {
        match index {
            0 => Some(File::A),
            1 => Some(File::B),
            2 => Some(File::C),
            3 => Some(File::D),
            4 => Some(File::E),
            5 => Some(File::F),
            6 => Some(File::G),
            7 => Some(File::H),
            _ => None,
        }
    }

    /// Creates a file from its lowercase letter ('a'-'h').
    #[inline]
    pub const fn from_letter(c: char) -> Option<Self> {
        match c {
            'a' => Some(File::A),
            'b' => Some(File::B),
            'c' => Some(File::C),
            'd' => Some(File::D),
            'e' => Some(File::E),
            'f' => Some(File::F),
            'g' => Some(File::G),
            'h' => Some(File::H),
            _ => None,
        }
    }

    /// Returns the index (0-7).
    #[inline]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Returns the lowercase letter of this file.
    #[inline]
    pub const fn letter(self) -> char {
        (b'a' + self as u8) as char
    }
}

impl Coordinate for File {
    fn from_index(index: i32) -> Option<Self> {
        File::from_index(index)
    }

    fn index(self) -> u8 {
        File::index(self)
    }
}

impl fmt::Display for File {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// A rank (row) on the chess board, from 1 to 8.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Rank {
    R1 = 0,
    R2 = 1,
    R3 = 2,
    R4 = 3,
    R5 = 4,
    R6 = 5,
    R7 = 6,
    R8 = 7,
}

impl Rank {
    /// All ranks in order.
    pub const ALL: [Rank; 8] = [
        Rank::R1,
        Rank::R2,
        Rank::R3,
        Rank::R4,
        Rank::R5,
        Rank::R6,
        Rank::R7,
        Rank::R8,
    ];

    /// Creates a rank from index (0-7).
    #[inline]
    pub const fn from_index(index: i32) -> Option<Self> {
        match index {
            0 => Some(Rank::R1),
            1 => Some(Rank::R2),
            2 => Some(Rank::R3),
            3 => Some(Rank::R4),
            4 => Some(Rank::R5),
            5 => Some(Rank::R6),
            6 => Some(Rank::R7),
            7 => Some(Rank::R8),
            _ => None,
        }
    }

    /// Creates a rank from its 1-based number (1-8).
    #[inline]
    pub const fn from_number(number: i32) -> Option<Self> {
        match number.checked_sub(1) {
            Some(index) => Rank::from_index(index),
            None => None,
        }
    }

    /// Creates a rank from a digit character ('1'-'8').
    #[inline]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            '1'..='8' => Rank::from_number(c as i32 - '0' as i32),
            _ => None,
        }
    }

    /// Returns the index (0-7).
    #[inline]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Returns the 1-based rank number.
    #[inline]
    pub const fn number(self) -> u8 {
        self as u8 + 1
    }
}

impl Coordinate for Rank {
    fn from_index(index: i32) -> Option<Self> {
        Rank::from_index(index)
    }

    fn index(self) -> u8 {
        Rank::index(self)
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}
