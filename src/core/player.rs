//! Player identification for two-player, zero-sum games.
//!
//! Player indices are 0-based: the first player to move is `PlayerId(0)`.
//! Turns alternate, so the player to move in a state is `ply_count % 2`.

use serde::{Deserialize, Serialize};

/// Identifier for one of the two players.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// The player who moves on even plies.
    pub const FIRST: PlayerId = PlayerId(0);

    /// The player who moves on odd plies.
    pub const SECOND: PlayerId = PlayerId(1);

    /// Create a new player ID.
    ///
    /// Panics if `id` is not 0 or 1.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        assert!(id < 2, "Player id must be 0 or 1");
        Self(id)
    }

    /// The player to move after `ply_count` plies have been played.
    #[must_use]
    pub const fn to_move(ply_count: u32) -> Self {
        Self((ply_count % 2) as u8)
    }

    /// Get the raw player index (0-based).
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The other player.
    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Self {
        Self(1 - self.0)
    }

    /// Both players, in turn order.
    pub fn all() -> impl Iterator<Item = PlayerId> {
        [Self::FIRST, Self::SECOND].into_iter()
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0 + 1)
    }
}
