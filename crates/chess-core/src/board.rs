//! Board container: piece placement plus castling rights and en passant state.
//!
//! [`ChessBoard`] is the read interface shared by the mutable [`Board`] and
//! the read-only [`ReadOnlyBoard`] view. Mutation goes through
//! [`MutableChessBoard`], which only [`Board`] implements.
//!
//! Pieces are stored in 64 slots indexed by `file * 8 + rank` (see
//! [`slot_index`]), so a1 = 0, a2 = 1, ..., b1 = 8, ..., h8 = 63.

use std::sync::Arc;

use thiserror::Error;

use crate::{CastlingRights, Color, Piece, PieceType, Square};

/// Number of squares on a classical chess board.
pub const BOARD_SIZE: usize = 64;

/// Returns the slot index of `square` in [`ChessBoard::pieces`].
#[inline]
pub const fn slot_index(square: Square) -> usize {
    square.file().index() as usize * 8 + square.rank().index() as usize
}

/// Errors that can occur when building a board from another board.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    #[error("board size mismatch: expected {expected} squares, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },
}

/// Read access to a board.
pub trait ChessBoard {
    /// Returns the number of squares on the board.
    fn board_size(&self) -> usize {
        self.pieces().len()
    }

    /// Returns every slot in [`slot_index`] order; empty squares are `None`.
    fn pieces(&self) -> &[Option<Piece>];

    /// Returns the castling rights of `color`.
    fn castling_rights(&self, color: Color) -> CastlingRights;

    /// Returns the square currently capturable en passant, if any.
    fn en_passant_square(&self) -> Option<Square>;

    /// Returns the piece standing on `square`.
    fn piece(&self, square: Square) -> Option<Piece> {
        self.pieces().get(slot_index(square)).copied().flatten()
    }

    /// Returns the piece on `square` only if it has the given type and color.
    fn piece_matching(&self, square: Square, kind: PieceType, color: Color) -> Option<Piece> {
        self.piece(square)
            .filter(|p| p.kind() == kind && p.color() == color)
    }

    /// Returns an independent read-only snapshot of this board.
    fn clone_as_read_only(&self) -> ReadOnlyBoard;

    /// Returns an independent mutable copy of this board.
    fn clone_as_mutable(&self) -> Board;
}

/// Write access to a board.
pub trait MutableChessBoard: ChessBoard {
    /// Clears all pieces, grants both castling rights to both colors and
    /// removes the en passant square.
    fn reset_state(&mut self);

    fn set_castling_rights(&mut self, color: Color, rights: CastlingRights);

    /// Sets or, with `None`, removes the en passant square.
    fn set_en_passant_square(&mut self, square: Option<Square>);

    /// Removes every piece. Castling rights and en passant are untouched.
    fn clear_pieces(&mut self);

    /// Puts `piece` on `square`, or empties it with `None`.
    ///
    /// Returns the piece that previously stood there.
    fn set_piece(&mut self, square: Square, piece: Option<Piece>) -> Option<Piece>;

    /// Moves the piece on `from` to `to`, vacating `from`.
    ///
    /// Returns the moved piece, or `None` (leaving the board untouched) if
    /// `from` is empty. Whatever stood on `to` is replaced.
    fn relocate_piece(&mut self, from: Square, to: Square) -> Option<Piece> {
        let piece = self.piece(from)?;
        if from != to {
            self.set_piece(from, None);
            self.set_piece(to, Some(piece));
        }
        Some(piece)
    }
}

/// The mutable board.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    pieces: [Option<Piece>; BOARD_SIZE],
    castling: [CastlingRights; 2],
    en_passant: Option<Square>,
}

impl Board {
    /// Creates an empty board in the default state.
    pub fn new() -> Self {
        Board {
            pieces: [None; BOARD_SIZE],
            castling: [CastlingRights::ALL; 2],
            en_passant: None,
        }
    }

    /// Creates a deep copy of `source`.
    ///
    /// Fails if `source` does not have exactly [`BOARD_SIZE`] squares.
    pub fn from_board<B: ChessBoard + ?Sized>(source: &B) -> Result<Self, BoardError> {
        let actual = source.board_size();
        let slots = source.pieces();
        if actual != BOARD_SIZE || slots.len() != BOARD_SIZE {
            return Err(BoardError::SizeMismatch {
                expected: BOARD_SIZE,
                actual,
            });
        }

        let mut board = Board::new();
        for (slot, piece) in board.pieces.iter_mut().zip(slots) {
            *slot = piece.map(|p| p.kind().instantiate(p.color()));
        }
        for color in Color::ALL {
            board.castling[color.index()] = source.castling_rights(color);
        }
        board.en_passant = source.en_passant_square();
        Ok(board)
    }

    /// Iterates over occupied squares and their pieces.
    pub fn occupied(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.piece(sq).map(|p| (sq, p)))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl ChessBoard for Board {
    fn board_size(&self) -> usize {
        BOARD_SIZE
    }

    fn pieces(&self) -> &[Option<Piece>] {
        &self.pieces
    }

    fn castling_rights(&self, color: Color) -> CastlingRights {
        self.castling[color.index()]
    }

    fn en_passant_square(&self) -> Option<Square> {
        self.en_passant
    }

    fn piece(&self, square: Square) -> Option<Piece> {
        self.pieces[slot_index(square)]
    }

    fn clone_as_read_only(&self) -> ReadOnlyBoard {
        ReadOnlyBoard::new(self.clone())
    }

    fn clone_as_mutable(&self) -> Board {
        self.clone()
    }
}

impl MutableChessBoard for Board {
    fn reset_state(&mut self) {
        tracing::trace!("resetting board state");
        *self = Board::new();
    }

    fn set_castling_rights(&mut self, color: Color, rights: CastlingRights) {
        self.castling[color.index()] = rights;
    }

    fn set_en_passant_square(&mut self, square: Option<Square>) {
        self.en_passant = square;
    }

    fn clear_pieces(&mut self) {
        tracing::trace!("clearing pieces");
        self.pieces = [None; BOARD_SIZE];
    }

    fn set_piece(&mut self, square: Square, piece: Option<Piece>) -> Option<Piece> {
        std::mem::replace(&mut self.pieces[slot_index(square)], piece)
    }

    fn relocate_piece(&mut self, from: Square, to: Square) -> Option<Piece> {
        let piece = self.pieces[slot_index(from)].take()?;
        let captured = self.set_piece(to, Some(piece));
        tracing::trace!(%from, %to, %piece, ?captured, "relocated piece");
        Some(piece)
    }
}

/// A read-only view of a board.
///
/// The view shares an immutable snapshot, so cloning it is cheap and it can
/// be handed to other threads. It exposes no mutators; call
/// [`ChessBoard::clone_as_mutable`] to get an editable copy.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ReadOnlyBoard {
    board: Arc<Board>,
}

impl ReadOnlyBoard {
    /// Wraps `board` in a read-only view.
    pub fn new(board: Board) -> Self {
        ReadOnlyBoard {
            board: Arc::new(board),
        }
    }
}

impl From<Board> for ReadOnlyBoard {
    fn from(board: Board) -> Self {
        ReadOnlyBoard::new(board)
    }
}

impl ChessBoard for ReadOnlyBoard {
    fn board_size(&self) -> usize {
        self.board.board_size()
    }

    fn pieces(&self) -> &[Option<Piece>] {
        self.board.pieces()
    }

    fn castling_rights(&self, color: Color) -> CastlingRights {
        self.board.castling_rights(color)
    }

    fn en_passant_square(&self) -> Option<Square> {
        self.board.en_passant_square()
    }

    fn piece(&self, square: Square) -> Option<Piece> {
        self.board.piece(square)
    }

    fn clone_as_read_only(&self) -> ReadOnlyBoard {
        self.clone()
    }

    fn clone_as_mutable(&self) -> Board {
        Board::clone(&self.board)
    }
}

impl PartialEq<Board> for ReadOnlyBoard {
    fn eq(&self, other: &Board) -> bool {
        *self.board == *other
    }
}

impl PartialEq<ReadOnlyBoard> for Board {
    fn eq(&self, other: &ReadOnlyBoard) -> bool {
        *self == *other.board
    }
}
