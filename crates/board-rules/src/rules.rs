//! Rule set abstraction.
//!
//! The [`RuleSet`] trait is the seam between the interaction layer and the
//! movement semantics. [`GridRules`] implements the leaper/slider/blocker
//! rules of the grid board.

use board_core::{Move, Side, Square};

use crate::movegen::{self, MoveList};
use crate::{Bitboard, Board};

/// Decides whether a proposed move is legal on a board.
pub trait RuleSet {
    /// Returns every square the piece on `from` may move to.
    fn destinations(&self, board: &Board, from: Square) -> Bitboard;

    /// Returns true if moving the piece on `from` to `to` is legal.
    ///
    /// The destination must be empty. Otherwise `to` must be among the
    /// enumerated destinations of `from`, so path blocking is applied the
    /// same way whichever direction a slider travels.
    fn is_legal(&self, board: &Board, from: Square, to: Square) -> bool {
        if !board.is_empty(to) {
            return false;
        }
        self.destinations(board, from).contains(to)
    }

    /// Returns true if `m` is legal.
    fn is_legal_move(&self, board: &Board, m: Move) -> bool {
        self.is_legal(board, m.from(), m.to())
    }

    /// Generates every legal move on the board.
    fn generate_moves(&self, board: &Board) -> MoveList {
        let mut moves = MoveList::new();
        for from in board.occupied() {
            for to in self.destinations(board, from) {
                moves.push(Move::new(from, to));
            }
        }
        moves
    }
}

/// Movement rules for the grid board.
///
/// By default pieces of both sides move according to their archetype. A
/// side restriction makes the other side's pieces immovable, mirroring a
/// host that only lets one side act.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GridRules {
    side_to_move: Option<Side>,
}

impl GridRules {
    /// Rules under which every leaper and slider may move.
    pub const fn new() -> Self {
        GridRules { side_to_move: None }
    }

    /// Rules under which only pieces of `side` may move.
    pub const fn with_side_to_move(side: Side) -> Self {
        GridRules {
            side_to_move: Some(side),
        }
    }

    /// Returns the side restriction, if any.
    pub const fn side_to_move(&self) -> Option<Side> {
        self.side_to_move
    }
}

impl RuleSet for GridRules {
    fn destinations(&self, board: &Board, from: Square) -> Bitboard {
        match (board.piece_at(from), self.side_to_move) {
            (Some(piece), Some(side)) if piece.side != side => Bitboard::EMPTY,
            _ => movegen::destinations(board, from),
        }
    }
}
