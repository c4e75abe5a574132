//! Click and drag move selection for a table-rendered grid board.
//!
//! The host renders the board as table cells carrying `row`, `col` and `val`
//! attributes and owns the game state. This crate lets a user pick a piece
//! and a destination, by two clicks or by dragging, and vetoes moves the
//! movement rules forbid before the host ever sees them:
//!
//! - [`read_board`] projects the rendered cells onto a logical [`Board`](board_rules::Board)
//! - [`SelectionController`] is the click-click state machine
//! - [`DragManager`] is the press-drag-release state machine
//! - [`BoardHook`] wires both to a [`BoardSurface`] and a [`Host`]
//!
//! On `wasm32` the `dom` module exports a `BoardHook` class driving real DOM
//! cells. A Phoenix LiveView hook wraps it like this:
//!
//! ```javascript
//! import init, { BoardHook } from 'board-hook';
//!
//! await init();
//!
//! export const GridBoard = {
//!   mounted() {
//!     this.board = new BoardHook(this.el, (name, payload) => this.pushEvent(name, payload), {});
//!     this.board.mounted();
//!   },
//!   updated() { this.board.updated(); },
//!   destroyed() { this.board.destroyed(); this.board.free(); },
//! };
//! ```

mod cell;
mod config;
pub mod drag;
mod error;
mod hook;
pub mod selection;
mod snapshot;
pub mod surface;

#[cfg(target_arch = "wasm32")]
pub mod dom;

pub use cell::{CellAttrs, MoveIntent, PositionalEvent, Selection};
pub use config::HookConfig;
pub use drag::{DragEnd, DragManager, DragSession};
pub use error::{ConfigError, HookError};
pub use hook::BoardHook;
pub use selection::{check_intent, ClickDecision, ClickOutcome, SelectionController, SelectionState};
pub use snapshot::{read_board, CellSource};
pub use surface::{BoardSurface, Host, Point, Size};
