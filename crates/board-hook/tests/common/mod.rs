//! An in-memory board surface for driving the hook without a browser.

#![allow(dead_code)]

use std::collections::BTreeSet;

use board_core::Square;
use board_hook::{BoardSurface, CellAttrs, CellSource, Point, PositionalEvent, Size};
use board_rules::Board;

/// Side length of one rendered cell, in pixels.
pub const CELL: f64 = 50.0;

/// A rendered 8x8 table plus one unaddressable footer cell below `a1`.
#[derive(Debug, Default)]
pub struct FakeSurface {
    pub cells: Vec<CellAttrs>,
    pub bound: bool,
    pub binds: usize,
    pub unbinds: usize,
    pub cues: Vec<Option<bool>>,
    pub hovered: BTreeSet<usize>,
    pub max_hovered: usize,
    pub rejections: Vec<usize>,
    pub live_proxies: Vec<u32>,
    pub spawned: u32,
    pub proxy_position: Option<Point>,
    pub listening: bool,
    pub listens: usize,
    pub unlistens: usize,
}

impl FakeSurface {
    pub fn from_layout(layout: &str) -> Self {
        let board = Board::from_layout(layout).expect("valid layout");
        let mut cells = Vec::new();
        for rank in (0..8u8).rev() {
            for file in 0..8u8 {
                let sq = Square::from_index(rank * 8 + file).unwrap();
                let code = board.occupant(sq).to_code().unwrap();
                let col = sq.file().to_char().to_string();
                let row = sq.rank().to_char().to_string();
                cells.push(CellAttrs::new(&col, &row, code));
            }
        }
        cells.push(CellAttrs::default());
        let cues = vec![None; cells.len()];
        FakeSurface {
            cells,
            cues,
            ..FakeSurface::default()
        }
    }

    /// Index of the cell rendered at `label`, e.g. `"a1"`.
    pub fn index_of(&self, label: &str) -> usize {
        let sq: Square = label.parse().expect("valid square");
        usize::from((7 - sq.rank().index()) * 8 + sq.file().index())
    }

    /// Index of the unaddressable footer cell.
    pub fn footer(&self) -> usize {
        64
    }

    /// The center of the cell rendered at `label`.
    pub fn center(&self, label: &str) -> Point {
        let index = self.index_of(label);
        let (x, y) = ((index % 8) as f64, (index / 8) as f64);
        Point::new(x * CELL + CELL / 2.0, y * CELL + CELL / 2.0)
    }

    /// The center of the footer cell.
    pub fn footer_center(&self) -> Point {
        Point::new(CELL / 2.0, 8.0 * CELL + CELL / 2.0)
    }

    /// Re-renders the cell at `label` with a new occupant code.
    pub fn render(&mut self, label: &str, code: &str) {
        let index = self.index_of(label);
        self.cells[index].val = Some(code.to_string());
    }
}

impl CellSource for FakeSurface {
    type Cell = usize;

    fn cells(&self) -> Vec<usize> {
        (0..self.cells.len()).collect()
    }

    fn attrs(&self, cell: &usize) -> CellAttrs {
        self.cells[*cell].clone()
    }
}

impl BoardSurface for FakeSurface {
    type Proxy = u32;

    fn bind(&mut self) {
        assert!(!self.bound, "bound twice without unbinding");
        self.bound = true;
        self.binds += 1;
    }

    fn unbind(&mut self) {
        self.bound = false;
        self.unbinds += 1;
    }

    fn cell_at(&self, point: Point) -> Option<usize> {
        if point.x < 0.0 || point.y < 0.0 || point.x >= 8.0 * CELL {
            return None;
        }
        let (col, row) = ((point.x / CELL) as usize, (point.y / CELL) as usize);
        match row {
            0..=7 => Some(row * 8 + col),
            8 if col == 0 => Some(self.footer()),
            _ => None,
        }
    }

    fn set_draggable_cue(&mut self, cell: &usize, draggable: bool) {
        self.cues[*cell] = Some(draggable);
    }

    fn set_hover(&mut self, cell: &usize, hovered: bool) {
        if hovered {
            self.hovered.insert(*cell);
        } else {
            self.hovered.remove(cell);
        }
        self.max_hovered = self.max_hovered.max(self.hovered.len());
    }

    fn play_rejection_cue(&mut self, cell: &usize) {
        self.rejections.push(*cell);
    }

    fn spawn_proxy(&mut self, _cell: &usize) -> Option<(u32, Size)> {
        self.spawned += 1;
        self.live_proxies.push(self.spawned);
        Some((self.spawned, Size::new(40.0, 40.0)))
    }

    fn move_proxy(&mut self, proxy: &u32, top_left: Point) {
        assert!(self.live_proxies.contains(proxy), "moved a removed proxy");
        self.proxy_position = Some(top_left);
    }

    fn remove_proxy(&mut self, proxy: u32) {
        self.live_proxies.retain(|p| *p != proxy);
    }

    fn listen_global(&mut self) {
        assert!(!self.listening, "global listeners attached twice");
        self.listening = true;
        self.listens += 1;
    }

    fn unlisten_global(&mut self) {
        self.listening = false;
        self.unlistens += 1;
    }
}

/// Shorthand for the event the host expects for one endpoint.
pub fn event(col: &str, row: &str, val: &str) -> PositionalEvent {
    PositionalEvent {
        row: row.to_string(),
        col: col.to_string(),
        val: Some(val.to_string()),
    }
}
