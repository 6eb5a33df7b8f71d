//! The center-square constraint.

use super::super::{Board, Cell, Player, Position};
use super::win::compute_winner;
use tracing::instrument;

/// Checks the center-square rule against a tentatively moved board.
///
/// A movement that lands anywhere but the center is illegal when the
/// resulting board has no winner and `mover` still holds the center.
/// Moving out of the center, or into it, is never blocked by this rule.
#[instrument(skip(after))]
pub fn violates_center_rule(after: &Board, mover: Player, to: Position) -> bool {
    compute_winner(after).is_none()
        && after.get(Position::Center) == Cell::Occupied(mover)
        && to != Position::Center
}
