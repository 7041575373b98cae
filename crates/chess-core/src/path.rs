//! Straight paths between two squares.

use std::fmt;

use thiserror::Error;

use crate::{ChessBoard, Square};

/// The shape of a [`Path`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PathType {
    Diagonal,
    Vertical,
    Horizontal,
    /// Any other shape; never produced by [`Square::path_to`].
    Irregular,
}

/// Errors raised when constructing a [`Path`] by hand.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PathError {
    #[error("path starts and ends on the same square {0}")]
    SameEndpoints(Square),

    #[error("middle points contain the endpoint {0}")]
    EndpointInMiddle(Square),
}

/// A directed sequence of squares from a starting point to an ending point.
///
/// The middle points are the squares strictly between the two endpoints, in
/// travel order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Path {
    start: Square,
    middle: Vec<Square>,
    end: Square,
    kind: PathType,
}

impl Path {
    /// Creates a path, validating that the endpoints differ and that the
    /// middle points contain neither endpoint.
    pub fn new(
        start: Square,
        middle: Vec<Square>,
        end: Square,
        kind: PathType,
    ) -> Result<Self, PathError> {
        if start == end {
            return Err(PathError::SameEndpoints(start));
        }
        if let Some(&endpoint) = middle.iter().find(|&&sq| sq == start || sq == end) {
            return Err(PathError::EndpointInMiddle(endpoint));
        }
        Ok(Self::between(start, middle, end, kind))
    }

    /// Builds a path whose invariants the caller already guarantees.
    pub(crate) fn between(start: Square, middle: Vec<Square>, end: Square, kind: PathType) -> Self {
        debug_assert!(start != end);
        Path {
            start,
            middle,
            end,
            kind,
        }
    }

    #[inline]
    pub fn start(&self) -> Square {
        self.start
    }

    #[inline]
    pub fn middle(&self) -> &[Square] {
        &self.middle
    }

    #[inline]
    pub fn end(&self) -> Square {
        self.end
    }

    #[inline]
    pub fn kind(&self) -> PathType {
        self.kind
    }

    /// Returns true if no middle point is occupied on `board`.
    ///
    /// Endpoint occupancy is not checked.
    pub fn is_unobstructed<B: ChessBoard + ?Sized>(&self, board: &B) -> bool {
        self.middle.iter().all(|&sq| board.piece(sq).is_none())
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.start)?;
        for sq in &self.middle {
            write!(f, "-{}", sq)?;
        }
        write!(f, "-{}", self.end)
    }
}
