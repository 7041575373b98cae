//! Core types for chess.
//!
//! This crate provides the chess position model used across the workspace:
//! - [`File`], [`Rank`] and the [`Coordinate`] trait for validated coordinates
//! - [`Square`] with notation, adjacency, rays and [`Path`] derivation
//! - [`Color`], [`PieceType`] and [`Piece`] with pseudo-legal candidate squares
//! - [`Promotion`] and [`PotentialMove`] for describing moves
//! - [`Board`], [`ReadOnlyBoard`] and the [`ChessBoard`] / [`MutableChessBoard`]
//!   traits for piece placement, castling rights and the en passant square
//!
//! # Example
//!
//! ```
//! use chess_core::{Board, Color, MutableChessBoard, PieceType, Square};
//!
//! let mut board = Board::new();
//! let c1 = Square::from_notation("c1").unwrap();
//! let g5 = Square::from_notation("g5").unwrap();
//! let bishop = PieceType::Bishop.instantiate(Color::White);
//! board.set_piece(c1, Some(bishop));
//!
//! assert!(bishop.candidate_squares(c1).contains(&g5));
//! let path = c1.path_to(g5).unwrap();
//! assert!(path.is_unobstructed(&board));
//! ```

mod board;
mod castling;
mod color;
mod coordinate;
mod mov;
pub mod movegen;
mod path;
mod piece;
mod square;

pub use board::{slot_index, Board, BoardError, ChessBoard, MutableChessBoard, ReadOnlyBoard, BOARD_SIZE};
pub use castling::CastlingRights;
pub use color::Color;
pub use coordinate::{Coordinate, File, Rank};
pub use mov::{PotentialMove, Promotion, PromotionError};
pub use movegen::Movement;
pub use path::{Path, PathError, PathType};
pub use piece::{LegalityError, Piece, PieceType};
pub use square::{ParseSquareError, Square};
