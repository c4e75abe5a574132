//! Core types for the grid board.
//!
//! This crate provides the fundamental types shared by the rule engine and
//! the interaction hook:
//! - [`Square`], [`File`], and [`Rank`] for positions on the 8x8 grid
//! - [`Coordinate`] for the raw column/row labels a rendered cell carries
//! - [`Side`], [`Archetype`], [`Piece`] and [`Occupant`] for what stands on a square
//! - [`Move`] for a from/to pair

mod coordinate;
mod mov;
mod piece;
mod side;
mod square;

pub use coordinate::Coordinate;
pub use mov::Move;
pub use piece::{Archetype, Occupant, Piece};
pub use side::Side;
pub use square::{File, ParseSquareError, Rank, Square};
