//! Step bounds invariant: the step pointer names an existing snapshot.

use super::super::{Board, MatchState};
use super::Invariant;

/// Invariant: history starts from an empty board and contains the current step.
pub struct StepBoundsInvariant;

impl Invariant<MatchState> for StepBoundsInvariant {
    fn holds(state: &MatchState) -> bool {
        match state.history().front() {
            Some(first) => {
                *first.board() == Board::new() && state.step_number() < state.history().len()
            }
            None => false,
        }
    }

    fn description() -> &'static str {
        "History starts empty and contains the current step"
    }
}
