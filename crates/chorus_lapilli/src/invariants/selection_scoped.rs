//! Selection scope invariant: a pending selection is always a legal pick-up.

use super::super::phases::{Phase, Selection};
use super::super::{Cell, MatchState};
use super::Invariant;

/// Invariant: a piece is only selected during the movement phase of a live
/// match, and the selected cell holds the mover's piece.
pub struct SelectionScopedInvariant;

impl Invariant<MatchState> for SelectionScopedInvariant {
    fn holds(state: &MatchState) -> bool {
        match state.selection() {
            Selection::AwaitingFirstSelection => true,
            Selection::AwaitingDestination { from } => {
                state.phase() == Phase::Movement
                    && !state.is_terminal()
                    && state.current_board().get(from) == Cell::Occupied(state.to_move())
            }
        }
    }

    fn description() -> &'static str {
        "Pending selection holds the mover's piece during movement"
    }
}
