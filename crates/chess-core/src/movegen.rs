//! Pseudo-legal candidate square generation.
//!
//! Every piece type maps to a [`Movement`]: a fixed table of single-step
//! offsets, a set of ray directions, or the pawn rule. The king adds the two
//! castle-side squares when standing on its starting square.

use crate::{Color, File, Piece, PieceType, Square};

/// A (file, rank) step.
pub type Offset = (i32, i32);

const KING_STEPS: [Offset; 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

const KNIGHT_STEPS: [Offset; 8] = [
    (-2, -1),
    (-2, 1),
    (2, -1),
    (2, 1),
    (-1, -2),
    (1, -2),
    (-1, 2),
    (1, 2),
];

const DIAGONAL_RAYS: [Offset; 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

const ORTHOGONAL_RAYS: [Offset; 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

const ALL_RAYS: [Offset; 8] = [
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
];

/// The file both kings start on.
pub const KING_START_FILE: File = File::E;

/// How a piece type moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Movement {
    /// Single jumps to each offset.
    Steps(&'static [Offset]),
    /// Rays running to the board edge in each direction.
    Rays(&'static [Offset]),
    /// Forward step, both forward diagonals and the double step from the pawn rank.
    Pawn,
}

impl PieceType {
    /// Returns the movement table for this piece type.
    pub const fn movement(self) -> Movement {
        match self {
            PieceType::King => Movement::Steps(&KING_STEPS),
            PieceType::Knight => Movement::Steps(&KNIGHT_STEPS),
            PieceType::Bishop => Movement::Rays(&DIAGONAL_RAYS),
            PieceType::Rook => Movement::Rays(&ORTHOGONAL_RAYS),
            PieceType::Queen => Movement::Rays(&ALL_RAYS),
            PieceType::Pawn => Movement::Pawn,
        }
    }
}

/// Returns the square a king of `color` starts the game on.
#[inline]
pub const fn king_start_square(color: Color) -> Square {
    Square::new(KING_START_FILE, color.home_rank())
}

pub(crate) fn generate_candidates<E>(piece: Piece, position: Square, squares: &mut E)
where
    E: Extend<Square> + ?Sized,
{
    match piece.kind().movement() {
        Movement::Steps(offsets) => {
            squares.extend(
                offsets
                    .iter()
                    .filter_map(|&(df, dr)| position.shifted(df, dr)),
            );
        }
        Movement::Rays(directions) => {
            for &(df, dr) in directions {
                squares.extend(position.line(df, dr));
            }
        }
        Movement::Pawn => pawn_candidates(piece.color(), position, squares),
    }

    if piece.kind() == PieceType::King && position == king_start_square(piece.color()) {
        squares.extend([position.shifted(-2, 0), position.shifted(2, 0)].into_iter().flatten());
    }
}

fn pawn_candidates<E>(color: Color, position: Square, squares: &mut E)
where
    E: Extend<Square> + ?Sized,
{
    let dir = color.pawn_direction();
    squares.extend(
        [(-1, dir), (0, dir), (1, dir)]
            .into_iter()
            .filter_map(|(df, dr)| position.shifted(df, dr)),
    );

    if position.rank() == color.pawn_rank() {
        squares.extend(position.shifted(0, 2 * dir));
    }
}
