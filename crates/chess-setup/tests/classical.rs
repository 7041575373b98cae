//! End-to-end checks of the classical starting position.

use chess_core::{
    Board, ChessBoard, Color, File, MutableChessBoard, Piece, PieceType, Rank, Square,
};
use chess_setup::{BoardSetup, ClassicalSetup};

fn sq(s: &str) -> Square {
    Square::from_notation(s).unwrap()
}

fn classical_board() -> Board {
    let mut board = Board::new();
    ClassicalSetup.apply(&mut board);
    board
}

fn expect(board: &Board, squares: &[&str], piece: Piece) {
    for name in squares {
        assert_eq!(board.piece(sq(name)), Some(piece), "square {}", name);
    }
}

#[test]
fn test_back_ranks() {
    let board = classical_board();
    for color in Color::ALL {
        let rank = color.home_rank().number();
        let on = |files: &[char]| -> Vec<String> {
            files.iter().map(|f| format!("{}{}", f, rank)).collect()
        };
        let check = |files: &[char], kind: PieceType| {
            let names = on(files);
            let refs: Vec<&str> = names.iter().map(String::as_str).collect();
            expect(&board, &refs, kind.instantiate(color));
        };

        check(&['a', 'h'], PieceType::Rook);
        check(&['b', 'g'], PieceType::Knight);
        check(&['c', 'f'], PieceType::Bishop);
        check(&['d'], PieceType::Queen);
        check(&['e'], PieceType::King);
    }
}

#[test]
fn test_pawn_ranks() {
    let board = classical_board();
    for file in File::ALL {
        assert_eq!(
            board.piece(Square::new(file, Rank::R2)),
            Some(PieceType::Pawn.instantiate(Color::White))
        );
        assert_eq!(
            board.piece(Square::new(file, Rank::R7)),
            Some(PieceType::Pawn.instantiate(Color::Black))
        );
    }
}

#[test]
fn test_middle_is_empty() {
    let board = classical_board();
    let empty: Vec<Square> = Square::all()
        .filter(|sq| board.piece(*sq).is_none())
        .collect();
    assert_eq!(empty.len(), 32);
    assert!(empty
        .iter()
        .all(|sq| (Rank::R3..=Rank::R6).contains(&sq.rank())));
}

#[test]
fn test_state_is_default() {
    let board = classical_board();
    assert_eq!(board.en_passant_square(), None);
    for color in Color::ALL {
        let rights = board.castling_rights(color);
        assert!(rights.has_short() && rights.has_long());
    }
}

#[test]
fn test_kings_can_reach_castle_squares() {
    let board = classical_board();
    for (color, home) in [(Color::White, "e1"), (Color::Black, "e8")] {
        let king = board
            .piece_matching(sq(home), PieceType::King, color)
            .unwrap();
        let candidates = king.candidate_squares(sq(home));
        let rank = color.home_rank();
        assert!(candidates.contains(&Square::new(File::C, rank)));
        assert!(candidates.contains(&Square::new(File::G, rank)));

        let short_path = sq(home).path_to(Square::new(File::H, rank)).unwrap();
        assert!(!short_path.is_unobstructed(&board));
    }
}

#[test]
fn test_sliding_moves_blocked_until_pawn_moves() {
    let mut board = classical_board();
    let f1 = sq("f1");
    let bishop = board.piece(f1).unwrap();
    let a6 = sq("a6");
    assert!(bishop.candidate_squares(f1).contains(&a6));

    let path = f1.path_to(a6).unwrap();
    assert!(!path.is_unobstructed(&board));

    board.relocate_piece(sq("e2"), sq("e4"));
    assert!(path.is_unobstructed(&board));
}

#[test]
fn test_snapshot_survives_later_moves() {
    let mut board = classical_board();
    let snapshot = board.clone_as_read_only();

    board.relocate_piece(sq("g1"), sq("f3"));
    board.set_castling_rights(Color::White, board.castling_rights(Color::White).without_short());

    assert_eq!(
        snapshot.piece(sq("g1")),
        Some(PieceType::Knight.instantiate(Color::White))
    );
    assert_eq!(snapshot.piece(sq("f3")), None);
    assert!(snapshot.castling_rights(Color::White).has_short());
    assert_eq!(snapshot.clone_as_mutable(), classical_board());
}
