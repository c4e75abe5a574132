//! Side (team) representation.

use serde::{Deserialize, Serialize};

/// The two sides present on the board.
///
/// The player's pieces belong to [`Side::Player`]; the opponent's leaper and
/// the immovable blockers belong to [`Side::Opponent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Side {
    Player = 0,
    Opponent = 1,
}

impl Side {
    /// Returns the index (0 for Player, 1 for Opponent).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Player => write!(f, "Player"),
            Side::Opponent => write!(f, "Opponent"),
        }
    }
}
