//! Chess piece representation.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::movegen;
use crate::{ChessBoard, Color, PotentialMove, Square};

/// The six types of chess pieces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum PieceType {
    King = 0,
    Queen = 1,
    Bishop = 2,
    Knight = 3,
    Rook = 4,
    Pawn = 5,
}

impl PieceType {
    /// All piece types in registry order.
    pub const ALL: [PieceType; 6] = [
        PieceType::King,
        PieceType::Queen,
        PieceType::Bishop,
        PieceType::Knight,
        PieceType::Rook,
        PieceType::Pawn,
    ];

    /// Returns the index of this piece type (0-5).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the letter used for this piece in algebraic notation.
    ///
    /// Pawns have no letter.
    pub const fn notation_char(self) -> Option<char> {
        match self {
            PieceType::King => Some('K'),
            PieceType::Queen => Some('Q'),
            PieceType::Bishop => Some('B'),
            PieceType::Knight => Some('N'),
            PieceType::Rook => Some('R'),
            PieceType::Pawn => None,
        }
    }

    /// Looks a piece type up by its notation letter.
    pub const fn from_notation_char(c: char) -> Option<PieceType> {
        match c {
            'K' => Some(PieceType::King),
            'Q' => Some(PieceType::Queen),
            'B' => Some(PieceType::Bishop),
            'N' => Some(PieceType::Knight),
            'R' => Some(PieceType::Rook),
            _ => None,
        }
    }

    /// Returns true if a pawn may promote to this piece type.
    #[inline]
    pub const fn is_promotion_target(self) -> bool {
        matches!(
            self,
            PieceType::Queen | PieceType::Bishop | PieceType::Knight | PieceType::Rook
        )
    }

    /// Returns the conventional material value in pawns (the king counts as 0).
    #[inline]
    pub const fn material_value(self) -> u32 {
        match self {
            PieceType::King => 0,
            PieceType::Queen => 9,
            PieceType::Bishop | PieceType::Knight => 3,
            PieceType::Rook => 5,
            PieceType::Pawn => 1,
        }
    }

    /// Returns true if this piece type is a sliding piece (bishop, rook, or queen).
    #[inline]
    pub const fn is_slider(self) -> bool {
        matches!(self, PieceType::Bishop | PieceType::Rook | PieceType::Queen)
    }

    /// Returns the English name of this piece type.
    pub const fn name(self) -> &'static str {
        match self {
            PieceType::King => "King",
            PieceType::Queen => "Queen",
            PieceType::Bishop => "Bishop",
            PieceType::Knight => "Knight",
            PieceType::Rook => "Rook",
            PieceType::Pawn => "Pawn",
        }
    }

    /// Creates a piece of this type with the given color.
    #[inline]
    pub const fn instantiate(self, color: Color) -> Piece {
        Piece::new(self, color)
    }
}

impl fmt::Display for PieceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Errors from the move legality extension point.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum LegalityError {
    #[error("move legality is not implemented for {0}")]
    NotImplemented(PieceType),
}

/// A colored chess piece.
///
/// Pieces are plain values: two pieces of the same type and color are equal
/// regardless of where they stand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    kind: PieceType,
    color: Color,
}

impl Piece {
    #[inline]
    pub const fn new(kind: PieceType, color: Color) -> Self {
        Piece { kind, color }
    }

    #[inline]
    pub const fn kind(self) -> PieceType {
        self.kind
    }

    #[inline]
    pub const fn color(self) -> Color {
        self.color
    }

    /// Returns a piece of the same type with the given color.
    #[inline]
    pub const fn with_color(self, color: Color) -> Self {
        Piece::new(self.kind, color)
    }

    /// Returns every square this piece could move to from `position` by its
    /// movement geometry alone.
    ///
    /// Board occupancy, checks and pins are not considered.
    pub fn candidate_squares(self, position: Square) -> BTreeSet<Square> {
        let mut squares = BTreeSet::new();
        self.extend_candidate_squares(position, &mut squares);
        squares
    }

    /// Appends the candidate squares from `position` to `squares`.
    pub fn extend_candidate_squares<E: Extend<Square>>(self, position: Square, squares: &mut E) {
        movegen::generate_candidates(self, position, squares);
    }

    /// Decides whether `mv` from `from` is legal on `board`.
    ///
    /// Legality checking is not available yet; every call returns
    /// [`LegalityError::NotImplemented`] instead of an answer.
    pub fn is_move_legal(
        self,
        _board: &dyn ChessBoard,
        _from: Square,
        _mv: &PotentialMove,
    ) -> Result<bool, LegalityError> {
        Err(LegalityError::NotImplemented(self.kind))
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.color, self.kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Board;

    #[test]
    fn notation_chars() {
        assert_eq!(PieceType::King.notation_char(), Some('K'));
        assert_eq!(PieceType::Knight.notation_char(), Some('N'));
        assert_eq!(PieceType::Pawn.notation_char(), None);
    }

    #[test]
    fn notation_lookup_round_trips() {
        for kind in PieceType::ALL {
            if let Some(c) = kind.notation_char() {
                assert_eq!(PieceType::from_notation_char(c), Some(kind));
            }
        }
        assert_eq!(PieceType::from_notation_char('P'), None);
        assert_eq!(PieceType::from_notation_char('k'), None);
    }

    #[test]
    fn promotion_targets() {
        let targets: Vec<PieceType> = PieceType::ALL
            .into_iter()
            .filter(|k| k.is_promotion_target())
            .collect();
        assert_eq!(
            targets,
            vec![
                PieceType::Queen,
                PieceType::Bishop,
                PieceType::Knight,
                PieceType::Rook
            ]
        );
    }

    #[test]
    fn material_values() {
        let total: u32 = PieceType::ALL.iter().map(|k| k.material_value()).sum();
        assert_eq!(total, 21);
        assert_eq!(PieceType::Queen.material_value(), 9);
        assert_eq!(PieceType::King.material_value(), 0);
    }

    #[test]
    fn is_slider() {
        assert!(!PieceType::Pawn.is_slider());
        assert!(!PieceType::Knight.is_slider());
        assert!(PieceType::Bishop.is_slider());
        assert!(PieceType::Rook.is_slider());
        assert!(PieceType::Queen.is_slider());
        assert!(!PieceType::King.is_slider());
    }

    #[test]
    fn instantiate_and_recolor() {
        for kind in PieceType::ALL {
            for color in Color::ALL {
                let piece = kind.instantiate(color);
                assert_eq!(piece.kind(), kind);
                assert_eq!(piece.color(), color);

                for new_color in Color::ALL {
                    let recolored = piece.with_color(new_color);
                    assert_eq!(recolored.kind(), kind);
                    assert_eq!(recolored.color(), new_color);
                }
                assert_eq!(piece.with_color(color), piece);
            }
        }
    }

    #[test]
    fn equality_is_by_value() {
        assert_eq!(
            PieceType::Rook.instantiate(Color::White),
            Piece::new(PieceType::Rook, Color::White)
        );
        assert_ne!(
            PieceType::Rook.instantiate(Color::White),
            PieceType::Rook.instantiate(Color::Black)
        );
    }

    #[test]
    fn legality_is_not_implemented() {
        let board = Board::new();
        let e2 = Square::from_notation("e2").unwrap();
        let e4 = Square::from_notation("e4").unwrap();
        for kind in PieceType::ALL {
            let piece = kind.instantiate(Color::White);
            assert_eq!(
                piece.is_move_legal(&board, e2, &PotentialMove::new(e4)),
                Err(LegalityError::NotImplemented(kind))
            );
        }
    }

    #[test]
    fn display() {
        assert_eq!(
            PieceType::Knight.instantiate(Color::Black).to_string(),
            "Black Knight"
        );
    }
}
