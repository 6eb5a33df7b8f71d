//! Derived phase, selection sub-state and status.
//!
//! Nothing here is stored independently of the step number and board:
//! phase and status are recomputed on demand so they cannot drift.

use super::{Player, Position};
use serde::{Deserialize, Serialize};

/// Number of placement plies (three per player).
pub const PLACEMENT_PLIES: usize = 6;

/// Phase of the match, a function of the step number alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Phase {
    /// Pieces are added to empty cells.
    #[display("placement")]
    Placement,
    /// Existing pieces are relocated.
    #[display("movement")]
    Movement,
}

impl Phase {
    /// Phase in effect at `step`. Steps 0 through 5 are placements.
    pub fn for_step(step: usize) -> Self {
        if step < PLACEMENT_PLIES {
            Phase::Placement
        } else {
            Phase::Movement
        }
    }
}

/// Two-click movement protocol sub-state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Selection {
    /// No piece picked up yet.
    #[default]
    AwaitingFirstSelection,
    /// A piece is picked up and waits for its destination.
    AwaitingDestination {
        /// The selected piece.
        from: Position,
    },
}

impl Selection {
    /// The selected cell, if a piece is picked up.
    pub fn selected(&self) -> Option<Position> {
        match self {
            Selection::AwaitingFirstSelection => None,
            Selection::AwaitingDestination { from } => Some(*from),
        }
    }
}

/// Status line shown to the players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Status {
    /// The current board has a complete line.
    #[display("Winner: {}", _0)]
    Winner(Player),
    /// The match continues with this player to act.
    #[display("Next player: {}", _0)]
    NextPlayer(Player),
}

impl Status {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Status::Winner(player) => Some(*player),
            Status::NextPlayer(_) => None,
        }
    }

    /// True once the match is over.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Status::Winner(_))
    }
}
