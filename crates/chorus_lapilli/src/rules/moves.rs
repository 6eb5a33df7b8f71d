//! Legal move enumeration.

use super::super::{Board, Movement, Player, Position};
use super::center::violates_center_rule;
use tracing::instrument;

/// Cells a placement-phase piece may go to.
#[instrument(skip(board))]
pub fn legal_placements(board: &Board) -> Vec<Position> {
    Position::empty_cells(board)
}

/// Every movement `player` may commit on `board`.
///
/// A movement is legal when it takes one of the player's pieces to an empty
/// neighbouring cell and the resulting board passes the center-square rule.
#[instrument(skip(board))]
pub fn legal_movements(board: &Board, player: Player) -> Vec<Movement> {
    board
        .pieces(player)
        .into_iter()
        .flat_map(|from| {
            from.neighbors()
                .into_iter()
                .filter(|to| board.is_empty(*to))
                .map(move |to| Movement::new(from, to))
        })
        .filter(|movement| {
            let after = board.with_moved(movement.from, movement.to);
            !violates_center_rule(&after, player, movement.to)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placements_are_empty_cells() {
        let board = Board::with_pieces(&[Position::Center], &[Position::UpperLeft]);
        let placements = legal_placements(&board);
        assert_eq!(placements.len(), 7);
        assert!(!placements.contains(&Position::Center));
        assert!(!placements.contains(&Position::UpperLeft));
    }

    #[test]
    fn test_center_holder_must_vacate() {
        // X holds the center and cannot win this turn.
        let board = Board::with_pieces(
            &[Position::Center, Position::UpperLeft, Position::MiddleRight],
            &[Position::UpperMiddle, Position::MiddleLeft, Position::LowerRight],
        );
        let movements = legal_movements(&board, Player::X);
        assert!(!movements.is_empty());
        assert!(movements.iter().all(|m| m.from == Position::Center));
    }

    #[test]
    fn test_winning_move_keeps_center() {
        let board = Board::with_pieces(
            &[Position::Center, Position::UpperLeft, Position::LowerMiddle],
            &[Position::UpperMiddle, Position::MiddleLeft, Position::LowerLeft],
        );
        let movements = legal_movements(&board, Player::X);
        assert!(movements.contains(&Movement::new(Position::LowerMiddle, Position::LowerRight)));
        // Keeping the center without winning is still refused.
        assert!(!movements.contains(&Movement::new(Position::LowerMiddle, Position::MiddleRight)));
        assert!(movements.contains(&Movement::new(Position::Center, Position::UpperRight)));
    }

    #[test]
    fn test_only_adjacent_empty_destinations() {
        let board = Board::with_pieces(
            &[Position::UpperLeft, Position::UpperRight, Position::LowerMiddle],
            &[Position::UpperMiddle, Position::MiddleLeft, Position::LowerLeft],
        );
        for movement in legal_movements(&board, Player::X) {
            assert!(movement.from.is_adjacent(movement.to));
            assert!(board.is_empty(movement.to));
            assert_eq!(board.get(movement.from).piece(), Some(Player::X));
        }
    }
}
