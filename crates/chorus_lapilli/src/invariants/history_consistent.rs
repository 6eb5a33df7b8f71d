//! History consistency invariant: each snapshot follows from the previous
//! one by a single legal ply.

use super::super::phases::Phase;
use super::super::rules::{compute_winner, violates_center_rule};
use super::super::{Board, Cell, MatchState, Player, Position};
use super::Invariant;
use strum::IntoEnumIterator;

/// Invariant: consecutive snapshots differ by exactly one legal ply.
///
/// Ply `k` (producing `history[k + 1]`) belongs to [`Player::for_step`]`(k)`.
/// Placement plies add one piece to an empty cell; movement plies move one
/// piece to an adjacent empty cell and respect the center-square rule.
/// Only the final snapshot may carry a winner.
pub struct HistoryConsistentInvariant;

impl HistoryConsistentInvariant {
    /// Checks a single ply from `before` to `after`.
    pub fn ply_is_legal(ply: usize, before: &Board, after: &Board) -> bool {
        if compute_winner(before).is_some() {
            return false;
        }

        let owner = Player::for_step(ply);
        let changed: Vec<Position> = Position::iter()
            .filter(|pos| before.get(*pos) != after.get(*pos))
            .collect();

        match Phase::for_step(ply) {
            Phase::Placement => match changed.as_slice() {
                [at] => before.is_empty(*at) && after.get(*at) == Cell::Occupied(owner),
                _ => false,
            },
            Phase::Movement => {
                let vacated = changed
                    .iter()
                    .copied()
                    .find(|pos| before.get(*pos) == Cell::Occupied(owner) && after.is_empty(*pos));
                let entered = changed
                    .iter()
                    .copied()
                    .find(|pos| before.is_empty(*pos) && after.get(*pos) == Cell::Occupied(owner));
                match (changed.len(), vacated, entered) {
                    (2, Some(from), Some(to)) => {
                        from.is_adjacent(to) && !violates_center_rule(after, owner, to)
                    }
                    _ => false,
                }
            }
        }
    }
}

impl Invariant<MatchState> for HistoryConsistentInvariant {
    fn holds(state: &MatchState) -> bool {
        let boards: Vec<&Board> = state.history().iter().map(|entry| entry.board()).collect();
        boards
            .windows(2)
            .enumerate()
            .all(|(ply, pair)| Self::ply_is_legal(ply, pair[0], pair[1]))
    }

    fn description() -> &'static str {
        "Each snapshot follows from the previous one by a single legal ply"
    }
}
