//! Drag Interaction Manager: the press-drag-release state machine.
//!
//! A session exists only between a press on a movable piece and the
//! matching release or cancel. Global pointer listeners are attached once
//! when a session starts and detached whenever it ends, however it ends.

use crate::surface::{BoardSurface, Point, Size};
use crate::Selection;

/// State of one active drag gesture.
#[derive(Debug)]
pub struct DragSession<C, P> {
    /// The origin endpoint.
    pub origin: Selection,
    /// The floating proxy following the pointer.
    pub proxy: P,
    /// Pointer position relative to the proxy's top-left corner.
    pub offset: Point,
    /// The cell currently highlighted under the pointer.
    pub hover: Option<C>,
}

/// How a drag gesture ended on release.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragEnd<C> {
    /// No session was active.
    Inactive,
    /// Released over no addressable cell; nothing is emitted.
    Abandoned,
    /// Released over a cell; the move must be resolved.
    Dropped {
        origin: Selection,
        target_cell: C,
        target: Selection,
    },
}

/// Owns the single drag session slot of one controller instance.
#[derive(Debug)]
pub struct DragManager<C, P> {
    session: Option<DragSession<C, P>>,
}

impl<C, P> Default for DragManager<C, P> {
    fn default() -> Self {
        DragManager { session: None }
    }
}

impl<C: Clone + PartialEq, P> DragManager<C, P> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true while a gesture is in progress.
    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    /// The active session, if any.
    pub fn session(&self) -> Option<&DragSession<C, P>> {
        self.session.as_ref()
    }

    /// Starts a gesture on a press at `point` over `cell`.
    ///
    /// Only movable pieces start a gesture. A press while a gesture is
    /// already active is ignored. Returns true if a session started.
    pub fn press<S>(&mut self, surface: &mut S, cell: &C, point: Point) -> bool
    where
        S: BoardSurface<Cell = C, Proxy = P>,
    {
        if self.session.is_some() {
            return false;
        }
        let attrs = surface.attrs(cell);
        if !attrs.is_draggable() {
            return false;
        }
        let Some(origin) = attrs.selection() else {
            return false;
        };
        let Some((proxy, size)) = surface.spawn_proxy(cell) else {
            return false;
        };

        let offset = center_of(size);
        surface.move_proxy(&proxy, top_left(point, offset));
        surface.listen_global();
        tracing::trace!(origin = %origin.coord, "drag started");

        self.session = Some(DragSession {
            origin,
            proxy,
            offset,
            hover: None,
        });
        true
    }

    /// Follows the pointer: moves the proxy and the hover highlight.
    pub fn pointer_moved<S>(&mut self, surface: &mut S, point: Point)
    where
        S: BoardSurface<Cell = C, Proxy = P>,
    {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        surface.move_proxy(&session.proxy, top_left(point, session.offset));

        let under = surface.cell_at(point);
        if under != session.hover {
            if let Some(previous) = session.hover.take() {
                surface.set_hover(&previous, false);
            }
            if let Some(current) = &under {
                surface.set_hover(current, true);
            }
            session.hover = under;
        }
    }

    /// Ends the gesture on release at `point`.
    ///
    /// The session is torn down before returning, whatever the outcome.
    pub fn release<S>(&mut self, surface: &mut S, point: Point) -> DragEnd<C>
    where
        S: BoardSurface<Cell = C, Proxy = P>,
    {
        let Some(session) = self.session.take() else {
            return DragEnd::Inactive;
        };
        let target_cell = surface.cell_at(point);
        let origin = session.origin.clone();
        teardown(surface, session);

        let Some(target_cell) = target_cell else {
            tracing::trace!("drag released outside the board");
            return DragEnd::Abandoned;
        };
        match surface.attrs(&target_cell).selection() {
            Some(target) => DragEnd::Dropped {
                origin,
                target_cell,
                target,
            },
            None => DragEnd::Abandoned,
        }
    }

    /// Ends the gesture without a move. Returns true if a session was active.
    pub fn cancel<S>(&mut self, surface: &mut S) -> bool
    where
        S: BoardSurface<Cell = C, Proxy = P>,
    {
        match self.session.take() {
            Some(session) => {
                tracing::trace!(origin = %session.origin.coord, "drag cancelled");
                teardown(surface, session);
                true
            }
            None => false,
        }
    }
}

fn teardown<S: BoardSurface>(surface: &mut S, session: DragSession<S::Cell, S::Proxy>) {
    surface.unlisten_global();
    if let Some(hover) = &session.hover {
        surface.set_hover(hover, false);
    }
    surface.remove_proxy(session.proxy);
}

fn center_of(size: Size) -> Point {
    Point::new(size.width / 2.0, size.height / 2.0)
}

fn top_left(pointer: Point, offset: Point) -> Point {
    Point::new(pointer.x - offset.x, pointer.y - offset.y)
}
