//! Win detection logic for chorus lapilli.

use super::super::{Board, Player, Position};
use tracing::instrument;

/// The eight winning lines in scan order: rows, columns, then diagonals.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::UpperLeft, Position::UpperMiddle, Position::UpperRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::LowerLeft, Position::LowerMiddle, Position::LowerRight],
    // Columns
    [Position::UpperLeft, Position::MiddleLeft, Position::LowerLeft],
    [Position::UpperMiddle, Position::Center, Position::LowerMiddle],
    [Position::UpperRight, Position::MiddleRight, Position::LowerRight],
    // Diagonals
    [Position::UpperLeft, Position::Center, Position::LowerRight],
    [Position::UpperRight, Position::Center, Position::LowerLeft],
];

/// Checks if there is a winner on the board.
///
/// Returns the owner of the first complete line in [`LINES`] order,
/// `None` if no line is complete.
#[instrument(skip(board))]
pub fn compute_winner(board: &Board) -> Option<Player> {
    LINES.iter().find_map(|[a, b, c]| {
        let piece = board.get(*a).piece()?;
        (board.get(*b).piece() == Some(piece) && board.get(*c).piece() == Some(piece))
            .then_some(piece)
    })
}
