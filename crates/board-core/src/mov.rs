//! Move representation.

use crate::Square;
use std::fmt;

/// A move from one square to another.
///
/// Encoded compactly: 6 bits from, 6 bits to.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move(u16);

impl Move {
    /// Creates a new move.
    #[inline]
    pub const fn new(from: Square, to: Square) -> Self {
        Move((from.index() as u16) | ((to.index() as u16) << 6))
    }

    /// Returns the source square.
    #[inline]
    pub const fn from(self) -> Square {
        match Square::from_index((self.0 & 0x3F) as u8) {
            Some(sq) => sq,
            None => unreachable!(),
        }
    }

    /// Returns the destination square.
    #[inline]
    pub const fn to(self) -> Square {
        match Square::from_index(((self.0 >> 6) & 0x3F) as u8) {
            Some(sq) => sq,
            None => unreachable!(),
        }
    }

    /// Returns the long notation for this move (e.g., "a1a4").
    pub fn to_notation(self) -> String {
        format!("{}{}", self.from(), self.to())
    }

    /// Parses a move from long notation.
    pub fn from_notation(s: &str) -> Option<Self> {
        if s.len() != 4 || !s.is_ascii() {
            return None;
        }
        let from = s[0..2].parse().ok()?;
        let to = s[2..4].parse().ok()?;
        Some(Move::new(from, to))
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({})", self.to_notation())
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_notation())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{File, Rank};

    #[test]
    fn move_encoding() {
        let b1 = Square::new(File::B, Rank::R1);
        let d2 = Square::new(File::D, Rank::R2);
        let m = Move::new(b1, d2);
        assert_eq!(m.from(), b1);
        assert_eq!(m.to(), d2);
    }

    #[test]
    fn move_notation() {
        let m = Move::from_notation("a1a4").unwrap();
        assert_eq!(m.from(), Square::new(File::A, Rank::R1));
        assert_eq!(m.to(), Square::new(File::A, Rank::R4));
        assert_eq!(m.to_notation(), "a1a4");
    }

    #[test]
    fn move_notation_invalid() {
        assert!(Move::from_notation("a1").is_none());
        assert!(Move::from_notation("a1a9").is_none());
        assert!(Move::from_notation("z1a2").is_none());
        assert!(Move::from_notation("a1a2q").is_none());
    }
}
