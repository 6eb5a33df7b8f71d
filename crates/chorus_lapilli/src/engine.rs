//! The match reducer: `(MatchState, cell) -> MatchState`.
//!
//! Every input is absorbed. Legal actions commit a snapshot or pick up a
//! piece; illegal ones are either ignored outright or reset the pending
//! selection with a hint, depending on their [`RejectionPolicy`].

use super::Cell;
use super::action::{Rejection, RejectionPolicy, Transition};
use super::contracts::{CellActionContract, Contract, assert_postconditions};
use super::phases::Selection;
use super::state::MatchState;
use tracing::{debug, info, instrument};

impl MatchState {
    /// Classifies a click on `cell` without changing anything.
    pub fn resolve(&self, cell: usize) -> Result<Transition, Rejection> {
        CellActionContract::pre(self, &cell)
    }

    /// Applies a click on `cell` and returns the resulting state.
    ///
    /// Never fails: rejected clicks return either an identical state or one
    /// with the selection cleared and an explanatory hint.
    #[instrument(skip(self), fields(step = self.step_number, to_move = %self.to_move()))]
    pub fn apply_cell_action(&self, cell: usize) -> Self {
        match self.resolve(cell) {
            Ok(transition) => self.accept(transition),
            Err(rejection) => self.absorb(rejection),
        }
    }

    /// Plays `cells` in order from a fresh match.
    #[instrument]
    pub fn replay(cells: &[usize]) -> Self {
        cells
            .iter()
            .fold(Self::new(), |state, cell| state.apply_cell_action(*cell))
    }

    fn accept(&self, transition: Transition) -> Self {
        let board = *self.current_board();
        let next = match transition {
            Transition::Placed { player, at } => {
                debug!(%player, %at, "Placed piece");
                self.committed(board.with(at, Cell::Occupied(player)), self.hint.clone())
            }
            Transition::Selected { player, at } => {
                debug!(%player, %at, "Selected piece");
                return Self {
                    selection: Selection::AwaitingDestination { from: at },
                    hint: transition.hint(),
                    ..self.clone()
                };
            }
            Transition::Moved { player, movement } => {
                debug!(%player, %movement, "Moved piece");
                self.committed(
                    board.with_moved(movement.from, movement.to),
                    transition.hint(),
                )
            }
        };

        assert_postconditions(self, &next);
        if let Some(winner) = next.winner() {
            info!(%winner, step = next.step_number, "Match won");
        }
        next
    }

    fn absorb(&self, rejection: Rejection) -> Self {
        match rejection.policy() {
            RejectionPolicy::Silent => {
                debug!(%rejection, "Ignoring cell action");
                self.clone()
            }
            RejectionPolicy::Reset => {
                info!(%rejection, "Resetting selection");
                Self {
                    selection: Selection::AwaitingFirstSelection,
                    hint: rejection.hint(),
                    ..self.clone()
                }
            }
        }
    }
}

/// Applies a click on `cell` to `state`. See [`MatchState::apply_cell_action`].
pub fn apply_cell_action(state: &MatchState, cell: usize) -> MatchState {
    state.apply_cell_action(cell)
}

/// Moves `state` to `step`. See [`MatchState::jump_to_step`].
pub fn jump_to_step(state: &MatchState, step: usize) -> MatchState {
    state.jump_to_step(step)
}
