//! Seams between the controller and its rendering environment.
//!
//! [`BoardSurface`] owns every rendering side effect; [`Host`] receives the
//! outbound events. The controller itself never touches the DOM.

use crate::{CellSource, PositionalEvent};

/// A point in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }
}

/// Width and height of a rendered element.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Size { width, height }
    }
}

/// The rendered board as seen by the controller.
pub trait BoardSurface: CellSource {
    /// Handle to a floating drag proxy.
    type Proxy;

    /// Re-acquires the cell container and attaches the pointer-press
    /// listener to it.
    fn bind(&mut self);

    /// Detaches the pointer-press listener from the current container.
    fn unbind(&mut self);

    /// Returns the board cell under `point`, if any.
    fn cell_at(&self, point: Point) -> Option<Self::Cell>;

    /// Shows or clears the "can be grabbed" cue on `cell`.
    fn set_draggable_cue(&mut self, cell: &Self::Cell, draggable: bool);

    /// Adds or removes the hover highlight on `cell`.
    fn set_hover(&mut self, cell: &Self::Cell, hovered: bool);

    /// Plays the transient rejection cue on `cell`. Fire-and-forget.
    fn play_rejection_cue(&mut self, cell: &Self::Cell);

    /// Spawns a floating copy of the piece shown on `cell`, returning it with
    /// its on-screen size. Returns `None` when the cell shows no piece.
    fn spawn_proxy(&mut self, cell: &Self::Cell) -> Option<(Self::Proxy, Size)>;

    /// Positions the proxy's top-left corner at `top_left`.
    fn move_proxy(&mut self, proxy: &Self::Proxy, top_left: Point);

    /// Removes the proxy from the page.
    fn remove_proxy(&mut self, proxy: Self::Proxy);

    /// Starts listening globally for pointer move, release and cancel.
    fn listen_global(&mut self);

    /// Stops listening globally for pointer move, release and cancel.
    fn unlisten_global(&mut self);
}

/// The authoritative owner of game state.
pub trait Host {
    /// Delivers one positional selection event.
    fn push_event(&mut self, event: &PositionalEvent);
}

impl Host for Vec<PositionalEvent> {
    fn push_event(&mut self, event: &PositionalEvent) {
        self.push(event.clone());
    }
}
