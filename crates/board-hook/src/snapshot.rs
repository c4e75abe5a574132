//! Board Snapshot Reader: projects the rendered cells onto a logical board.

use board_core::Occupant;
use board_rules::Board;

use crate::CellAttrs;

/// Read access to the currently rendered cells.
pub trait CellSource {
    /// Handle to one rendered cell.
    type Cell: Clone + PartialEq;

    /// Every cell currently rendered, in document order.
    fn cells(&self) -> Vec<Self::Cell>;

    /// Reads the row, column and occupant attributes of `cell`.
    fn attrs(&self, cell: &Self::Cell) -> CellAttrs;
}

impl CellSource for [CellAttrs] {
    type Cell = usize;

    fn cells(&self) -> Vec<usize> {
        (0..self.len()).collect()
    }

    fn attrs(&self, cell: &usize) -> CellAttrs {
        self.get(*cell).cloned().unwrap_or_default()
    }
}

/// Builds a fresh logical board from the current cells.
///
/// Unaddressable cells and cells whose labels fall outside the grid are
/// skipped. Missing or unrecognized occupant codes leave the square empty.
pub fn read_board<S: CellSource + ?Sized>(source: &S) -> Board {
    let mut board = Board::empty();
    for cell in source.cells() {
        let attrs = source.attrs(&cell);
        let Some(sq) = attrs.coordinate().and_then(|c| c.square()) else {
            continue;
        };
        let occupant = attrs
            .val
            .as_deref()
            .and_then(Occupant::from_code)
            .unwrap_or(Occupant::Empty);
        board.put(sq, occupant);
    }
    board
}
