//! Move representation.

use std::fmt;

use thiserror::Error;

use crate::{PieceType, Square};

/// Errors that can occur when constructing a [`Promotion`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PromotionError {
    #[error("cannot promote to {0}")]
    InvalidTarget(PieceType),
}

/// The piece type a pawn promotes to.
///
/// Only queens, rooks, bishops and knights are valid targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Promotion(PieceType);

impl Promotion {
    /// Creates a promotion to `target`.
    pub fn new(target: PieceType) -> Result<Self, PromotionError> {
        if target.is_promotion_target() {
            Ok(Promotion(target))
        } else {
            Err(PromotionError::InvalidTarget(target))
        }
    }

    /// Returns the piece type being promoted to.
    #[inline]
    pub const fn target(self) -> PieceType {
        self.0
    }
}

impl TryFrom<PieceType> for Promotion {
    type Error = PromotionError;

    fn try_from(target: PieceType) -> Result<Self, Self::Error> {
        Promotion::new(target)
    }
}

/// A move a piece might make: a target square plus an optional promotion.
///
/// The origin square and the moving piece are supplied separately by the
/// caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PotentialMove {
    target: Square,
    promotion: Option<Promotion>,
}

impl PotentialMove {
    /// Creates a move to `target` without promotion.
    #[inline]
    pub const fn new(target: Square) -> Self {
        PotentialMove {
            target,
            promotion: None,
        }
    }

    /// Creates a move to `target` that promotes.
    #[inline]
    pub const fn with_promotion(target: Square, promotion: Promotion) -> Self {
        PotentialMove {
            target,
            promotion: Some(promotion),
        }
    }

    #[inline]
    pub const fn target(self) -> Square {
        self.target
    }

    #[inline]
    pub const fn promotion(self) -> Option<Promotion> {
        self.promotion
    }
}

impl fmt::Display for PotentialMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.target)?;
        if let Some(c) = self.promotion.and_then(|p| p.target().notation_char()) {
            write!(f, "={}", c)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn promotion_to_valid_targets() {
        for kind in [
            PieceType::Queen,
            PieceType::Rook,
            PieceType::Bishop,
            PieceType::Knight,
        ] {
            assert_eq!(Promotion::new(kind).map(Promotion::target), Ok(kind));
        }
    }

    #[test]
    fn promotion_to_king_or_pawn_fails() {
        assert_eq!(
            Promotion::new(PieceType::King),
            Err(PromotionError::InvalidTarget(PieceType::King))
        );
        assert_eq!(
            Promotion::try_from(PieceType::Pawn),
            Err(PromotionError::InvalidTarget(PieceType::Pawn))
        );
    }

    #[test]
    fn promotion_error_message() {
        assert_eq!(
            PromotionError::InvalidTarget(PieceType::King).to_string(),
            "cannot promote to King"
        );
    }

    #[test]
    fn potential_move_display() {
        let e8 = Square::E8;
        assert_eq!(PotentialMove::new(e8).to_string(), "e8");

        let promo = Promotion::new(PieceType::Queen).unwrap();
        let mv = PotentialMove::with_promotion(e8, promo);
        assert_eq!(mv.promotion(), Some(promo));
        assert_eq!(mv.to_string(), "e8=Q");
    }
}
