//! Castling rights.

use serde::{Deserialize, Serialize};

/// Castling rights of one player.
///
/// Rights are only ever removed by producing a new value; the value itself
/// never changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CastlingRights {
    /// Kingside castling (O-O).
    #[serde(default = "granted")]
    short: bool,
    /// Queenside castling (O-O-O).
    #[serde(default = "granted")]
    long: bool,
}

fn granted() -> bool {
    true
}

impl CastlingRights {
    /// Both rights granted.
    pub const ALL: CastlingRights = CastlingRights::new(true, true);

    /// No rights.
    pub const NONE: CastlingRights = CastlingRights::new(false, false);

    #[inline]
    pub const fn new(short: bool, long: bool) -> Self {
        CastlingRights { short, long }
    }

    /// Returns true if the player may still castle kingside.
    #[inline]
    pub const fn has_short(self) -> bool {
        self.short
    }

    /// Returns true if the player may still castle queenside.
    #[inline]
    pub const fn has_long(self) -> bool {
        self.long
    }

    /// Returns a copy without the kingside right.
    #[inline]
    #[must_use]
    pub const fn without_short(self) -> Self {
        CastlingRights::new(false, self.long)
    }

    /// Returns a copy without the queenside right.
    #[inline]
    #[must_use]
    pub const fn without_long(self) -> Self {
        CastlingRights::new(self.short, false)
    }
}

impl Default for CastlingRights {
    fn default() -> Self {
        CastlingRights::ALL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_grants_both() {
        let rights = CastlingRights::default();
        assert!(rights.has_short());
        assert!(rights.has_long());
    }

    #[test]
    fn removing_rights_returns_new_value() {
        let rights = CastlingRights::ALL;
        let no_short = rights.without_short();
        assert_eq!(no_short, CastlingRights::new(false, true));
        assert_eq!(rights, CastlingRights::ALL);

        let no_long = rights.without_long();
        assert_eq!(no_long, CastlingRights::new(true, false));
        assert_eq!(no_short.without_long(), CastlingRights::NONE);
    }

    #[test]
    fn removing_twice_is_idempotent() {
        let rights = CastlingRights::ALL.without_short();
        assert_eq!(rights.without_short(), rights);
    }
}
