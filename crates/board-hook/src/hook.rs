//! The board hook: lifecycle, click routing and drag routing.

use board_rules::{GridRules, RuleSet};

use crate::drag::{DragEnd, DragManager};
use crate::selection::{check_intent, ClickDecision, ClickOutcome, SelectionController};
use crate::surface::{BoardSurface, Host, Point};
use crate::{HookConfig, MoveIntent};

/// One mounted board's interaction controller.
///
/// Owns the pending click selection and the drag session slot; nothing is
/// shared between instances.
pub struct BoardHook<S: BoardSurface, H, R = GridRules> {
    surface: S,
    host: H,
    drag_enabled: bool,
    selection: SelectionController<R>,
    drag: DragManager<S::Cell, S::Proxy>,
}

impl<S: BoardSurface, H: Host> BoardHook<S, H> {
    /// Creates a hook using the rules selected by `config`.
    pub fn new(surface: S, host: H, config: &HookConfig) -> Self {
        Self::with_rules(surface, host, config, config.rules())
    }
}

impl<S: BoardSurface, H: Host, R: RuleSet> BoardHook<S, H, R> {
    /// Creates a hook with explicit movement rules.
    pub fn with_rules(surface: S, host: H, config: &HookConfig, rules: R) -> Self {
        BoardHook {
            surface,
            host,
            drag_enabled: config.drag_enabled,
            selection: SelectionController::new(rules),
            drag: DragManager::new(),
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn selection(&self) -> &SelectionController<R> {
        &self.selection
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// Called once when the board is first rendered.
    pub fn mounted(&mut self) {
        self.rebind();
        tracing::debug!(drag_enabled = self.drag_enabled, "board hook mounted");
    }

    /// Called after every re-render of the cells.
    pub fn updated(&mut self) {
        self.rebind();
    }

    /// Called once when the board is removed. Tears down any active drag
    /// without emitting events.
    pub fn destroyed(&mut self) {
        self.drag.cancel(&mut self.surface);
        self.surface.unbind();
        self.selection.reset();
        tracing::debug!("board hook destroyed");
    }

    /// Re-acquires the container, re-attaches the press listener and
    /// recomputes the draggable cue of every cell. Returns the number of
    /// draggable cells.
    pub fn rebind(&mut self) -> usize {
        self.surface.unbind();
        self.surface.bind();

        let mut draggable = 0;
        for cell in self.surface.cells() {
            let movable = self.surface.attrs(&cell).is_draggable();
            self.surface.set_draggable_cue(&cell, movable);
            draggable += usize::from(movable);
        }
        tracing::debug!(draggable, "board rebound");
        draggable
    }

    /// Handles a primary-selection click on `cell` (or on no cell).
    pub fn on_click(&mut self, cell: Option<&S::Cell>) -> ClickDecision {
        let Some(cell) = cell else {
            return ClickDecision::Pass;
        };
        let attrs = self.surface.attrs(cell);
        let outcome = self.selection.select(&attrs, &self.surface);
        if let ClickOutcome::Rejected(_) = outcome {
            self.surface.play_rejection_cue(cell);
        }
        outcome.decision()
    }

    /// Handles a pointer press. Returns true if a drag gesture started.
    pub fn on_pointer_down(&mut self, cell: Option<&S::Cell>, point: Point) -> bool {
        if !self.drag_enabled {
            return false;
        }
        match cell {
            Some(cell) => self.drag.press(&mut self.surface, cell, point),
            None => false,
        }
    }

    /// Handles global pointer movement during a gesture.
    pub fn on_pointer_move(&mut self, point: Point) {
        self.drag.pointer_moved(&mut self.surface, point);
    }

    /// Handles the release that ends a gesture.
    ///
    /// A drop on a cell always forwards the origin and destination to the
    /// host as two positional events, legal or not, so the host's own
    /// feedback covers illegal drops too. Illegal drops also play the local
    /// rejection cue. Returns the intent if a drop happened.
    pub fn on_pointer_up(&mut self, point: Point) -> Option<MoveIntent> {
        let DragEnd::Dropped {
            origin,
            target_cell,
            target,
        } = self.drag.release(&mut self.surface, point)
        else {
            return None;
        };

        let intent = MoveIntent {
            from: origin,
            to: target,
        };
        if !check_intent(self.selection.rules(), &self.surface, &intent) {
            self.surface.play_rejection_cue(&target_cell);
        }
        self.host.push_event(&intent.from.to_event());
        self.host.push_event(&intent.to.to_event());
        Some(intent)
    }

    /// Handles a platform cancel: tears the gesture down, emits nothing.
    pub fn on_pointer_cancel(&mut self) {
        self.drag.cancel(&mut self.surface);
    }
}
