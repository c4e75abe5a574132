//! Textual board layouts.
//!
//! A layout lists the eight ranks from rank 8 down to rank 1, separated by
//! `/`. Each rank is a sequence of occupant codes (`P`, `K`, `B`, `R`, `x`)
//! and digits counting runs of empty squares, e.g. `8/8/8/8/8/x7/8/R7`.

use board_core::{Occupant, Square};
use thiserror::Error;

use crate::Board;

/// Errors that can occur when parsing a board layout.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LayoutError {
    #[error("invalid layout: expected 8 ranks, got {0}")]
    InvalidRankCount(usize),

    #[error("invalid layout: rank {rank} has unknown occupant code '{code}'")]
    UnknownCode { rank: usize, code: char },

    #[error("invalid layout: rank {rank} covers {files} files, expected 8")]
    InvalidRankWidth { rank: usize, files: usize },
}

impl Board {
    /// Parses a board from a layout string.
    pub fn from_layout(layout: &str) -> Result<Self, LayoutError> {
        let ranks: Vec<&str> = layout.trim().split('/').collect();
        if ranks.len() != 8 {
            return Err(LayoutError::InvalidRankCount(ranks.len()));
        }

        let mut board = Board::empty();
        for (rank_idx, rank_str) in ranks.iter().enumerate() {
            let rank_number = 8 - rank_idx;
            let rank = (rank_number - 1) as u8;
            let mut file = 0usize;

            for c in rank_str.chars() {
                if let Some(digit) = c.to_digit(10) {
                    file += digit as usize;
                    continue;
                }
                let occupant = Occupant::from_code(c.encode_utf8(&mut [0; 4]))
                    .filter(|o| !o.is_empty())
                    .ok_or(LayoutError::UnknownCode {
                        rank: rank_number,
                        code: c,
                    })?;
                if file < 8 {
                    if let Some(sq) = Square::from_index(rank * 8 + file as u8) {
                        board.put(sq, occupant);
                    }
                }
                file += 1;
            }

            if file != 8 {
                return Err(LayoutError::InvalidRankWidth {
                    rank: rank_number,
                    files: file,
                });
            }
        }

        Ok(board)
    }

    /// Converts the board to a layout string.
    pub fn to_layout(&self) -> String {
        let mut layout = String::new();

        for rank in (0..8u8).rev() {
            let mut empty_count = 0;
            for file in 0..8u8 {
                let code = Square::from_index(rank * 8 + file)
                    .map(|sq| self.occupant(sq))
                    .filter(|o| !o.is_empty())
                    .and_then(|o| o.to_code());
                match code {
                    Some(code) => {
                        if empty_count > 0 {
                            layout.push_str(&empty_count.to_string());
                            empty_count = 0;
                        }
                        layout.push_str(code);
                    }
                    None => empty_count += 1,
                }
            }
            if empty_count > 0 {
                layout.push_str(&empty_count.to_string());
            }
            if rank > 0 {
                layout.push('/');
            }
        }

        layout
    }
}
