//! The classical starting position.

use chess_core::{Color, File, MutableChessBoard, PieceType, Square};

use crate::BoardSetup;

/// Back rank pieces from the a-file to the h-file.
pub const BACK_RANK: [PieceType; 8] = [
    PieceType::Rook,
    PieceType::Knight,
    PieceType::Bishop,
    PieceType::Queen,
    PieceType::King,
    PieceType::Bishop,
    PieceType::Knight,
    PieceType::Rook,
];

/// The standard chess starting position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClassicalSetup;

impl BoardSetup for ClassicalSetup {
    fn name(&self) -> &str {
        "classical"
    }

    fn apply(&self, board: &mut dyn MutableChessBoard) {
        board.reset_state();

        for color in Color::ALL {
            for (file, kind) in File::ALL.into_iter().zip(BACK_RANK) {
                board.set_piece(
                    Square::new(file, color.home_rank()),
                    Some(kind.instantiate(color)),
                );
                board.set_piece(
                    Square::new(file, color.pawn_rank()),
                    Some(PieceType::Pawn.instantiate(color)),
                );
            }
        }

        tracing::debug!(setup = self.name(), pieces = 32, "applied board setup");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chess_core::{Board, CastlingRights, ChessBoard, Rank};

    #[test]
    fn places_32_pieces() {
        let mut board = Board::new();
        ClassicalSetup.apply(&mut board);
        assert_eq!(board.occupied().count(), 32);
    }

    #[test]
    fn back_rank_mirrors() {
        let mut board = Board::new();
        ClassicalSetup.apply(&mut board);
        for file in File::ALL {
            let white = board.piece(Square::new(file, Rank::R1)).unwrap();
            let black = board.piece(Square::new(file, Rank::R8)).unwrap();
            assert_eq!(white.kind(), black.kind());
            assert_eq!(white.with_color(Color::Black), black);
        }
    }

    #[test]
    fn discards_previous_state() {
        let mut board = Board::new();
        let e4 = Square::from_notation("e4").unwrap();
        board.set_piece(e4, Some(PieceType::Queen.instantiate(Color::Black)));
        board.set_castling_rights(Color::White, CastlingRights::NONE);
        board.set_en_passant_square(Some(e4));

        ClassicalSetup.apply(&mut board);
        assert_eq!(board.piece(e4), None);
        assert_eq!(board.castling_rights(Color::White), CastlingRights::ALL);
        assert_eq!(board.en_passant_square(), None);
    }

    #[test]
    fn applying_twice_is_stable() {
        let mut once = Board::new();
        ClassicalSetup.apply(&mut once);
        let mut twice = once.clone();
        ClassicalSetup.apply(&mut twice);
        assert_eq!(once, twice);
    }
}
