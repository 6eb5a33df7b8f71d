//! Match state: snapshot history, step pointer, selection and hint.

use super::invariants::{InvariantSet, InvariantViolation, MatchInvariants};
use super::phases::{Phase, Selection, Status};
use super::rules::compute_winner;
use super::{Board, Player};
use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// One snapshot in the match history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct HistoryEntry {
    board: Board,
}

impl HistoryEntry {
    /// The board after this step.
    pub fn board(&self) -> &Board {
        &self.board
    }
}

/// Error raised by the checked time-travel operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum HistoryError {
    /// The requested step does not exist.
    #[display("Step {} is outside history of length {}", step, len)]
    StepOutOfRange {
        /// The requested step.
        step: usize,
        /// Number of entries in the history.
        len: usize,
    },
}

/// Complete match state.
///
/// States are values. Every engine operation returns a new state and leaves
/// its input untouched; the history is an `im::Vector`, so successive
/// states share their common prefix.
///
/// The player to move is never stored: it follows from the parity of
/// `step_number`, as does the phase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchState {
    pub(crate) history: Vector<HistoryEntry>,
    pub(crate) step_number: usize,
    pub(crate) selection: Selection,
    pub(crate) hint: Option<String>,
}

impl MatchState {
    /// Creates a fresh match: one empty board, X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: Vector::unit(HistoryEntry::new(Board::new())),
            step_number: 0,
            selection: Selection::AwaitingFirstSelection,
            hint: None,
        }
    }

    /// Returns the snapshot history.
    pub fn history(&self) -> &Vector<HistoryEntry> {
        &self.history
    }

    /// Index of the snapshot currently shown and played from.
    pub fn step_number(&self) -> usize {
        self.step_number
    }

    /// Returns the selection sub-state.
    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// Returns the last action message, if any.
    pub fn hint(&self) -> Option<&str> {
        self.hint.as_deref()
    }

    /// True when X owns the current step.
    pub fn x_is_next(&self) -> bool {
        self.step_number % 2 == 0
    }

    /// The player owning the current step.
    pub fn to_move(&self) -> Player {
        Player::for_step(self.step_number)
    }

    /// Phase in effect at the current step.
    pub fn phase(&self) -> Phase {
        Phase::for_step(self.step_number)
    }

    /// The board at the current step.
    pub fn current_board(&self) -> &Board {
        &self.history[self.step_number].board
    }

    /// Winner on the current board, if any.
    pub fn winner(&self) -> Option<Player> {
        compute_winner(self.current_board())
    }

    /// Status line for the current step.
    pub fn status(&self) -> Status {
        match self.winner() {
            Some(player) => Status::Winner(player),
            None => Status::NextPlayer(self.to_move()),
        }
    }

    /// True once the current board has a winner.
    pub fn is_terminal(&self) -> bool {
        self.status().is_terminal()
    }

    /// Moves the step pointer to `step`, clearing selection and hint.
    ///
    /// The history is kept; the next committed action discards every entry
    /// after `step`. A step outside the history leaves the state unchanged.
    #[instrument(skip(self), fields(from = self.step_number))]
    pub fn jump_to_step(&self, step: usize) -> Self {
        match self.try_jump_to_step(step) {
            Ok(state) => state,
            Err(e) => {
                warn!(error = %e, "Ignoring jump outside history");
                self.clone()
            }
        }
    }

    /// Checked variant of [`MatchState::jump_to_step`].
    #[instrument(skip(self), fields(from = self.step_number))]
    pub fn try_jump_to_step(&self, step: usize) -> Result<Self, HistoryError> {
        if step >= self.history.len() {
            return Err(HistoryError::StepOutOfRange {
                step,
                len: self.history.len(),
            });
        }
        debug!(step, "Jumping to step");
        Ok(Self {
            history: self.history.clone(),
            step_number: step,
            selection: Selection::AwaitingFirstSelection,
            hint: None,
        })
    }

    /// Checks every match invariant.
    #[instrument(skip(self))]
    pub fn validate(&self) -> Result<(), Vec<InvariantViolation>> {
        MatchInvariants::check_all(self)
    }

    /// Truncates future history, appends `board` and advances the step.
    pub(crate) fn committed(&self, board: Board, hint: Option<String>) -> Self {
        let mut history = self.history.clone();
        history.truncate(self.step_number + 1);
        history.push_back(HistoryEntry::new(board));
        Self {
            step_number: history.len() - 1,
            history,
            selection: Selection::AwaitingFirstSelection,
            hint,
        }
    }
}

impl Default for MatchState {
    fn default() -> Self {
        Self::new()
    }
}
