//! Cells, selections and the positional events exchanged with the host.

use board_core::{Coordinate, Occupant};
use serde::{Deserialize, Serialize};

/// The three facts a rendered cell exposes, exactly as read.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CellAttrs {
    pub row: Option<String>,
    pub col: Option<String>,
    pub val: Option<String>,
}

impl CellAttrs {
    pub fn new(col: &str, row: &str, val: &str) -> Self {
        CellAttrs {
            row: Some(row.to_string()),
            col: Some(col.to_string()),
            val: Some(val.to_string()),
        }
    }

    /// The cell's address, or `None` if the cell is unaddressable.
    pub fn coordinate(&self) -> Option<Coordinate> {
        Coordinate::from_attrs(self.col.as_deref(), self.row.as_deref())
    }

    /// Captures this cell as one endpoint of a gesture.
    pub fn selection(&self) -> Option<Selection> {
        Some(Selection {
            coord: self.coordinate()?,
            val: self.val.clone(),
        })
    }

    /// Returns true if a drag may start on this cell: the occupant code is
    /// present and is neither empty nor a blocker.
    pub fn is_draggable(&self) -> bool {
        matches!(
            self.val.as_deref(),
            Some(v) if !v.is_empty() && v != Occupant::EMPTY_CODE && v != Occupant::BLOCKER_CODE
        )
    }
}

/// One endpoint of a move gesture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub coord: Coordinate,
    pub val: Option<String>,
}

impl Selection {
    /// Returns true if the occupant code marks an empty cell.
    pub fn is_empty_cell(&self) -> bool {
        self.val.as_deref() == Some(Occupant::EMPTY_CODE)
    }

    /// The positional event the host expects for this endpoint.
    pub fn to_event(&self) -> PositionalEvent {
        PositionalEvent {
            row: self.coord.row().to_string(),
            col: self.coord.col().to_string(),
            val: self.val.clone(),
        }
    }
}

/// A proposed move: the origin selection and the destination selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveIntent {
    pub from: Selection,
    pub to: Selection,
}

/// Outbound positional selection event payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionalEvent {
    pub row: String,
    pub col: String,
    pub val: Option<String>,
}
