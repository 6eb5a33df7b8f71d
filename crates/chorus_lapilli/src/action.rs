//! First-class action types for chorus lapilli.
//!
//! A cell action is classified into a [`Transition`] before anything is
//! committed. Illegal actions become a [`Rejection`], which is a value the
//! engine absorbs into the match state rather than an error it raises.

use super::{Player, Position};
use serde::{Deserialize, Serialize};

/// A movement-phase relocation of one piece.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_new::new,
)]
#[display("{} -> {}", from, to)]
pub struct Movement {
    /// Cell the piece leaves.
    pub from: Position,
    /// Cell the piece lands on.
    pub to: Position,
}

/// What an accepted cell action does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Transition {
    /// A placement-phase piece lands on an empty cell.
    Placed {
        /// The player placing.
        player: Player,
        /// Where the piece goes.
        at: Position,
    },
    /// A piece is picked up, awaiting its destination.
    Selected {
        /// The player selecting.
        player: Player,
        /// The selected piece.
        at: Position,
    },
    /// A selected piece is moved and the move is committed.
    Moved {
        /// The player moving.
        player: Player,
        /// The relocation.
        movement: Movement,
    },
}

impl Transition {
    /// True if this transition appends a history entry.
    pub fn commits(&self) -> bool {
        !matches!(self, Transition::Selected { .. })
    }

    /// Hint shown after the transition, if it sets one.
    pub fn hint(&self) -> Option<String> {
        match self {
            Transition::Placed { .. } => None,
            Transition::Selected { player, at } => Some(format!("selected {player} at {at}")),
            Transition::Moved { player, movement } => Some(format!(
                "moved {} at {} to {}",
                player, movement.from, movement.to
            )),
        }
    }
}

/// How the engine absorbs a rejection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RejectionPolicy {
    /// State is left exactly as it was.
    Silent,
    /// Pending selection is cleared and an explanatory hint is shown.
    Reset,
}

/// Why a cell action was refused.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::Error,
)]
pub enum Rejection {
    /// The current board already has a winner.
    #[display("Game is already over")]
    GameOver,

    /// The cell index is outside 0-8.
    #[display("Cell {} is off the board", _0)]
    OutOfRange(#[error(not(source))] usize),

    /// Placement onto an occupied cell.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(#[error(not(source))] Position),

    /// First selection does not hold the mover's piece.
    #[display("{} has no piece at {}", player, at)]
    NotYourPiece {
        /// The player to move.
        player: Player,
        /// The clicked cell.
        at: Position,
    },

    /// Destination already holds a piece.
    #[display("Destination {} is already occupied", _0)]
    DestinationOccupied(#[error(not(source))] Position),

    /// Destination is not a neighbour of the selected piece.
    #[display(
        "Cannot move {} from {} to {}. Has reset selected {}",
        player,
        movement.from,
        movement.to,
        player
    )]
    NotAdjacent {
        /// The player to move.
        player: Player,
        /// The attempted relocation.
        movement: Movement,
    },

    /// Move leaves the mover's piece in the center without winning.
    #[display("{} has a piece in middle middle but did not win, so invalid move.", player)]
    CenterSquare {
        /// The player to move.
        player: Player,
        /// The attempted relocation.
        movement: Movement,
    },
}

impl Rejection {
    /// How the engine absorbs this rejection.
    pub fn policy(&self) -> RejectionPolicy {
        match self {
            Rejection::NotAdjacent { .. } | Rejection::CenterSquare { .. } => {
                RejectionPolicy::Reset
            }
            _ => RejectionPolicy::Silent,
        }
    }

    /// Hint shown to the player, only for resetting rejections.
    pub fn hint(&self) -> Option<String> {
        match self.policy() {
            RejectionPolicy::Reset => Some(self.to_string()),
            RejectionPolicy::Silent => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reset_rejections_carry_hints() {
        let movement = Movement::new(Position::UpperLeft, Position::LowerRight);
        let rejection = Rejection::NotAdjacent {
            player: Player::X,
            movement,
        };
        assert_eq!(rejection.policy(), RejectionPolicy::Reset);
        assert_eq!(
            rejection.hint().as_deref(),
            Some("Cannot move X from upper left to lower right. Has reset selected X")
        );

        let rejection = Rejection::CenterSquare {
            player: Player::O,
            movement,
        };
        assert_eq!(
            rejection.hint().as_deref(),
            Some("O has a piece in middle middle but did not win, so invalid move.")
        );
    }

    #[test]
    fn test_silent_rejections_have_no_hint() {
        for rejection in [
            Rejection::GameOver,
            Rejection::OutOfRange(12),
            Rejection::CellOccupied(Position::Center),
            Rejection::DestinationOccupied(Position::Center),
            Rejection::NotYourPiece {
                player: Player::X,
                at: Position::UpperLeft,
            },
        ] {
            assert_eq!(rejection.policy(), RejectionPolicy::Silent);
            assert_eq!(rejection.hint(), None);
        }
    }

    #[test]
    fn test_transition_hints() {
        let selected = Transition::Selected {
            player: Player::X,
            at: Position::UpperMiddle,
        };
        assert_eq!(
            selected.hint().as_deref(),
            Some("selected X at upper middle")
        );
        assert!(!selected.commits());

        let moved = Transition::Moved {
            player: Player::O,
            movement: Movement::new(Position::Center, Position::LowerMiddle),
        };
        assert_eq!(
            moved.hint().as_deref(),
            Some("moved O at middle middle to lower middle")
        );
        assert!(moved.commits());
    }

    #[test]
    fn test_movement_display() {
        let movement = Movement::new(Position::Center, Position::LowerMiddle);
        assert_eq!(movement.to_string(), "middle middle -> lower middle");
    }

    #[test]
    fn test_rejection_is_an_error_without_source() {
        use std::error::Error;

        let rejection = Rejection::OutOfRange(9);
        assert!(rejection.source().is_none());
        let boxed: Box<dyn Error> = Box::new(Rejection::CellOccupied(Position::Center));
        assert_eq!(boxed.to_string(), "Cell middle middle is already occupied");
    }
}
