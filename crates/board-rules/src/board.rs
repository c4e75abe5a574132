//! Logical board representation.

use board_core::{Archetype, Occupant, Piece, Side, Square};
use std::fmt;

use crate::Bitboard;

/// Occupant per square of the 8x8 grid.
///
/// A board is a plain value: it is built fresh from whatever the caller
/// reads and never mutated by the rule engine.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Board {
    /// Bitboards for each archetype, indexed by [`Archetype::index`].
    pub archetypes: [Bitboard; 4],

    /// Bitboards for each side's pieces, indexed by [`Side::index`].
    pub sides: [Bitboard; 2],
}

impl Board {
    /// Creates a board with every square empty.
    pub fn empty() -> Self {
        Board::default()
    }

    /// Places `occupant` on `sq`, replacing whatever stood there.
    pub fn put(&mut self, sq: Square, occupant: Occupant) {
        for bb in self.archetypes.iter_mut().chain(self.sides.iter_mut()) {
            bb.clear(sq);
        }
        if let Occupant::Piece(piece) = occupant {
            self.archetypes[piece.archetype.index()].set(sq);
            self.sides[piece.side.index()].set(sq);
        }
    }

    /// Builder-style variant of [`put`](Board::put).
    pub fn with(mut self, sq: Square, occupant: Occupant) -> Self {
        self.put(sq, occupant);
        self
    }

    /// Returns the occupant of `sq`.
    pub fn occupant(&self, sq: Square) -> Occupant {
        let side = if self.sides[Side::Player.index()].contains(sq) {
            Side::Player
        } else if self.sides[Side::Opponent.index()].contains(sq) {
            Side::Opponent
        } else {
            return Occupant::Empty;
        };
        Archetype::ALL
            .into_iter()
            .find(|a| self.archetypes[a.index()].contains(sq))
            .map_or(Occupant::Empty, |archetype| {
                Occupant::Piece(Piece::new(archetype, side))
            })
    }

    /// Returns the piece on `sq`, if any.
    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.occupant(sq).piece()
    }

    /// Returns true if nothing stands on `sq`.
    #[inline]
    pub fn is_empty(&self, sq: Square) -> bool {
        !self.occupied().contains(sq)
    }

    /// Returns all occupied squares.
    #[inline]
    pub fn occupied(&self) -> Bitboard {
        self.sides[0] | self.sides[1]
    }

    /// Returns the squares holding pieces of the given archetype and side.
    #[inline]
    pub fn pieces_of(&self, archetype: Archetype, side: Side) -> Bitboard {
        self.archetypes[archetype.index()] & self.sides[side.index()]
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..8u8).rev() {
            write!(f, "{} ", rank + 1)?;
            for file in 0..8u8 {
                let code = Square::from_index(rank * 8 + file)
                    .and_then(|sq| self.occupant(sq).to_code())
                    .unwrap_or("?");
                let glyph = if code == Occupant::EMPTY_CODE { "." } else { code };
                write!(f, "{} ", glyph)?;
            }
            writeln!(f)?;
        }
        writeln!(f, "  a b c d e f g h")
    }
}
