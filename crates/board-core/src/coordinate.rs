//! Cell coordinates as rendered by the host.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::Square;

/// A cell address made of the column and row labels the host renders.
///
/// Labels are kept exactly as rendered so they can be echoed back to the
/// host. Equality and hashing ignore the case of the column label.
#[derive(Debug, Clone)]
pub struct Coordinate {
    col: String,
    row: String,
}

impl Coordinate {
    /// Creates a coordinate from raw labels.
    ///
    /// Returns `None` when either label is missing or empty: such a cell is
    /// unaddressable.
    pub fn new(col: &str, row: &str) -> Option<Self> {
        if col.is_empty() || row.is_empty() {
            return None;
        }
        Some(Coordinate {
            col: col.to_string(),
            row: row.to_string(),
        })
    }

    /// Creates a coordinate from optional labels, as read from cell attributes.
    pub fn from_attrs(col: Option<&str>, row: Option<&str>) -> Option<Self> {
        Self::new(col?, row?)
    }

    /// The column label as rendered.
    pub fn col(&self) -> &str {
        &self.col
    }

    /// The row label as rendered.
    pub fn row(&self) -> &str {
        &self.row
    }

    /// Maps the labels onto the 8x8 grid, if they name a square on it.
    pub fn square(&self) -> Option<Square> {
        Square::from_labels(&self.col, &self.row)
    }
}

impl PartialEq for Coordinate {
    fn eq(&self, other: &Self) -> bool {
        self.row == other.row && self.col.to_lowercase() == other.col.to_lowercase()
    }
}

impl Eq for Coordinate {}

impl Hash for Coordinate {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.col.to_lowercase().hash(state);
        self.row.hash(state);
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.col.to_lowercase(), self.row)
    }
}

impl From<Square> for Coordinate {
    fn from(sq: Square) -> Self {
        Coordinate {
            col: sq.file().to_char().to_string(),
            row: sq.rank().to_char().to_string(),
        }
    }
}
