//! Board setups.
//!
//! A [`BoardSetup`] resets a [`MutableChessBoard`] and fills it with a
//! starting state. This crate provides:
//! - [`ClassicalSetup`] - the standard chess starting position
//! - [`SetupConfig`] - an arbitrary position described in TOML
//!
//! # Example
//!
//! ```
//! use chess_core::{Board, ChessBoard, Color, PieceType, Square};
//! use chess_setup::{BoardSetup, ClassicalSetup};
//!
//! let mut board = Board::new();
//! ClassicalSetup.apply(&mut board);
//!
//! assert_eq!(
//!     board.piece(Square::E1),
//!     Some(PieceType::King.instantiate(Color::White))
//! );
//! ```

mod classical;
mod config;

pub use classical::{ClassicalSetup, BACK_RANK};
pub use config::{CastlingConfig, Placement, SetupConfig, SetupError};

use chess_core::MutableChessBoard;

/// A way to set up a chess board.
pub trait BoardSetup {
    /// Returns a short human-readable name for this setup.
    fn name(&self) -> &str;

    /// Resets the board state and sets up the new state.
    fn apply(&self, board: &mut dyn MutableChessBoard);
}
