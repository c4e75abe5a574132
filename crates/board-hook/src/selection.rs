//! Selection Controller: the click-click state machine.

use board_rules::{GridRules, RuleSet};

use crate::snapshot::{read_board, CellSource};
use crate::{CellAttrs, MoveIntent, Selection};

/// Whether the host may see the click that was just handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickDecision {
    /// Let the click propagate to the host unmodified.
    Pass,
    /// Suppress the click's default action and propagation.
    Veto,
}

/// What a primary-selection event did to the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickOutcome {
    /// The clicked cell was unaddressable.
    Ignored,
    /// The first endpoint was stored.
    Selected(Selection),
    /// The second endpoint completed a legal move.
    Accepted(MoveIntent),
    /// The second endpoint completed an illegal move.
    Rejected(MoveIntent),
}

impl ClickOutcome {
    pub fn decision(&self) -> ClickDecision {
        match self {
            ClickOutcome::Rejected(_) => ClickDecision::Veto,
            _ => ClickDecision::Pass,
        }
    }
}

/// Controller state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SelectionState {
    #[default]
    Idle,
    AwaitingDestination(Selection),
}

/// Checks a move intent against a freshly read board.
///
/// The destination must be rendered as empty; otherwise the move is illegal
/// without consulting the rules. Endpoints that do not map onto the grid are
/// illegal.
pub fn check_intent<R, S>(rules: &R, source: &S, intent: &MoveIntent) -> bool
where
    R: RuleSet + ?Sized,
    S: CellSource + ?Sized,
{
    if !intent.to.is_empty_cell() {
        return false;
    }
    let (Some(from), Some(to)) = (intent.from.coord.square(), intent.to.coord.square()) else {
        return false;
    };
    rules.is_legal(&read_board(source), from, to)
}

/// Accumulates a "from" and a "to" selection over two clicks.
///
/// At most one selection is pending. The second click always resolves it,
/// legal or not, and returns the controller to [`SelectionState::Idle`].
#[derive(Debug, Clone, Default)]
pub struct SelectionController<R = GridRules> {
    state: SelectionState,
    rules: R,
}

impl<R: RuleSet> SelectionController<R> {
    pub fn new(rules: R) -> Self {
        SelectionController {
            state: SelectionState::Idle,
            rules,
        }
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    pub fn rules(&self) -> &R {
        &self.rules
    }

    /// Handles a primary-selection event on a cell with attributes `attrs`.
    pub fn select<S: CellSource + ?Sized>(&mut self, attrs: &CellAttrs, source: &S) -> ClickOutcome {
        let Some(selection) = attrs.selection() else {
            return ClickOutcome::Ignored;
        };

        match std::mem::take(&mut self.state) {
            SelectionState::Idle => {
                self.state = SelectionState::AwaitingDestination(selection.clone());
                ClickOutcome::Selected(selection)
            }
            SelectionState::AwaitingDestination(from) => {
                let intent = MoveIntent {
                    from,
                    to: selection,
                };
                if check_intent(&self.rules, source, &intent) {
                    ClickOutcome::Accepted(intent)
                } else {
                    ClickOutcome::Rejected(intent)
                }
            }
        }
    }

    /// Drops any pending selection.
    pub fn reset(&mut self) {
        self.state = SelectionState::Idle;
    }
}
