//! Board setups described in TOML.
//!
//! ```toml
//! name = "king and pawn"
//! en_passant = "d6"
//!
//! [castling.white]
//! short = false
//! long = false
//!
//! [[pieces]]
//! square = "e1"
//! kind = "king"
//! color = "white"
//! ```
//!
//! Every key is optional. Missing castling rights default to granted.

use std::collections::HashSet;
use std::path::Path as FsPath;

use chess_core::{CastlingRights, Color, MutableChessBoard, Piece, PieceType, Rank, Square};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::BoardSetup;

/// Errors that can occur when loading or validating a setup.
#[derive(Error, Debug)]
pub enum SetupError {
    /// Failed to read the setup file from disk.
    #[error("failed to read setup file: {0}")]
    ReadError(#[from] std::io::Error),
    /// Failed to parse the setup as valid TOML.
    #[error("failed to parse setup: {0}")]
    ParseError(#[from] toml::de::Error),
    /// Two placements target the same square.
    #[error("square {0} is set up more than once")]
    DuplicateSquare(Square),
    /// The en passant square is not on a rank a pawn can skip over.
    #[error("en passant square {0} is not on rank 3 or 6")]
    InvalidEnPassant(Square),
}

/// A single piece placed on a square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    pub square: Square,
    pub kind: PieceType,
    pub color: Color,
}

impl Placement {
    /// Returns the placed piece.
    pub fn piece(&self) -> Piece {
        self.kind.instantiate(self.color)
    }
}

/// Castling rights per color.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CastlingConfig {
    #[serde(default)]
    pub white: CastlingRights,
    #[serde(default)]
    pub black: CastlingRights,
}

impl CastlingConfig {
    /// Returns the rights configured for `color`.
    pub fn for_color(&self, color: Color) -> CastlingRights {
        match color {
            Color::White => self.white,
            Color::Black => self.black,
        }
    }
}

/// A custom board setup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetupConfig {
    /// Name reported in logs. Defaults to "custom".
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default)]
    pub castling: CastlingConfig,
    #[serde(default)]
    pub en_passant: Option<Square>,
    #[serde(default)]
    pub pieces: Vec<Placement>,
}

fn default_name() -> String {
    "custom".to_string()
}

impl Default for SetupConfig {
    fn default() -> Self {
        SetupConfig {
            name: default_name(),
            castling: CastlingConfig::default(),
            en_passant: None,
            pieces: Vec::new(),
        }
    }
}

impl SetupConfig {
    /// Parses and validates a setup from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns [`SetupError::ParseError`] for malformed TOML, unknown piece
    /// names or invalid square notation, and the validation errors of
    /// [`Self::validate`].
    pub fn from_toml_str(content: &str) -> Result<Self, SetupError> {
        let config: SetupConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a setup file.
    ///
    /// # Errors
    ///
    /// Returns [`SetupError::ReadError`] if the file cannot be read, plus
    /// everything [`Self::from_toml_str`] can return.
    pub fn load(path: impl AsRef<FsPath>) -> Result<Self, SetupError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Checks that no square is used twice and that the en passant square
    /// lies on rank 3 or 6.
    pub fn validate(&self) -> Result<(), SetupError> {
        let mut seen = HashSet::with_capacity(self.pieces.len());
        for placement in &self.pieces {
            if !seen.insert(placement.square) {
                return Err(SetupError::DuplicateSquare(placement.square));
            }
        }

        if let Some(square) = self.en_passant {
            if !matches!(square.rank(), Rank::R3 | Rank::R6) {
                return Err(SetupError::InvalidEnPassant(square));
            }
        }

        Ok(())
    }
}

impl BoardSetup for SetupConfig {
    fn name(&self) -> &str {
        &self.name
    }

    fn apply(&self, board: &mut dyn MutableChessBoard) {
        board.reset_state();

        for color in Color::ALL {
            board.set_castling_rights(color, self.castling.for_color(color));
        }
        board.set_en_passant_square(self.en_passant);

        for placement in &self.pieces {
            board.set_piece(placement.square, Some(placement.piece()));
        }

        tracing::debug!(
            setup = %self.name,
            pieces = self.pieces.len(),
            "applied board setup"
        );
    }
}
