//! Move enumeration.

use board_core::{Archetype, Move, Square};

use crate::attacks::{diagonal_attacks, leaper_attacks, orthogonal_attacks};
use crate::{Bitboard, Board};

/// A list of moves.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct MoveList {
    moves: Vec<Move>,
}

impl MoveList {
    /// Creates an empty move list.
    #[inline]
    pub const fn new() -> Self {
        MoveList { moves: Vec::new() }
    }

    /// Adds a move to the list.
    #[inline]
    pub fn push(&mut self, m: Move) {
        self.moves.push(m);
    }

    /// Returns the number of moves.
    #[inline]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// Returns true if the list is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Returns a slice of the moves.
    #[inline]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves
    }

    /// Returns true if the list holds a move from `from` to `to`.
    pub fn contains(&self, from: Square, to: Square) -> bool {
        self.moves.iter().any(|m| m.from() == from && m.to() == to)
    }
}

impl std::ops::Index<usize> for MoveList {
    type Output = Move;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.moves[index]
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.iter()
    }
}

impl std::fmt::Debug for MoveList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

/// Returns every empty square the piece on `from` can move to.
///
/// Empty squares and blockers yield no destinations. Sliders stop before the
/// first occupied square along each ray; the leaper ignores occupancy except
/// on its landing square.
pub fn destinations(board: &Board, from: Square) -> Bitboard {
    let Some(piece) = board.piece_at(from) else {
        return Bitboard::EMPTY;
    };
    let occupied = board.occupied();
    let reach = match piece.archetype {
        Archetype::Leaper => leaper_attacks(from),
        Archetype::DiagonalSlider => diagonal_attacks(from, occupied),
        Archetype::OrthogonalSlider => orthogonal_attacks(from, occupied),
        Archetype::Blocker => Bitboard::EMPTY,
    };
    reach & !occupied
}
