//! Presentation view derived from a match state.

use super::phases::Phase;
use super::state::MatchState;
use super::{Cell, Position};
use serde::Serialize;
use tracing::instrument;

/// Label of the history navigation entry for `step`.
pub fn history_label(step: usize) -> String {
    if step == 0 {
        "Go to game start".to_string()
    } else {
        format!("Go to move #{}", step)
    }
}

/// One history navigation entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryLink {
    /// Step to jump to.
    pub step: usize,
    /// Button label.
    pub label: String,
}

/// Everything a front-end needs to draw the match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchView {
    /// Cells of the board at the current step.
    pub board: [Cell; 9],
    /// `"Winner: X"` or `"Next player: O"` style status line.
    pub status: String,
    /// Last action message.
    pub hint: Option<String>,
    /// Current step.
    pub step: usize,
    /// Current phase.
    pub phase: Phase,
    /// The piece waiting for a destination, if any.
    pub selected: Option<Position>,
    /// Navigation entries, one per snapshot.
    pub history: Vec<HistoryLink>,
}

impl MatchState {
    /// Derives the presentation view.
    #[instrument(skip(self))]
    pub fn view(&self) -> MatchView {
        MatchView {
            board: *self.current_board().cells(),
            status: self.status().to_string(),
            hint: self.hint.clone(),
            step: self.step_number,
            phase: self.phase(),
            selected: self.selection.selected(),
            history: (0..self.history.len())
                .map(|step| HistoryLink {
                    step,
                    label: history_label(step),
                })
                .collect(),
        }
    }
}
