//! Movement legality engine for the grid board.
//!
//! This crate provides:
//! - [`Board`] - the logical board, one occupant per square
//! - [`Bitboard`] - 64-bit square sets used for occupancy and destinations
//! - [`RuleSet`] and [`GridRules`] - yes/no legality of a proposed move
//! - Move enumeration and a textual board layout format
//!
//! # Example
//!
//! ```
//! use board_rules::{Board, GridRules, RuleSet};
//!
//! let board = Board::from_layout("8/8/8/8/8/x7/8/R7").unwrap();
//! let a1 = "a1".parse().unwrap();
//!
//! assert!(GridRules::new().is_legal(&board, a1, "a2".parse().unwrap()));
//! assert!(!GridRules::new().is_legal(&board, a1, "a4".parse().unwrap()));
//! ```

pub mod attacks;
mod bitboard;
mod board;
mod layout;
pub mod movegen;
pub mod rules;

pub use bitboard::{Bitboard, BitboardIter};
pub use board::Board;
pub use layout::LayoutError;
pub use movegen::{destinations, MoveList};
pub use rules::{GridRules, RuleSet};
