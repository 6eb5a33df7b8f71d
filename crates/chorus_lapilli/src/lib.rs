//! Chorus lapilli game logic.
//!
//! Chorus lapilli is tic-tac-toe with a twist: after each player has placed
//! three pieces, turns relocate one piece to an adjacent empty cell, and a
//! player holding the center must win or vacate it.
//!
//! # Architecture
//!
//! - **State**: [`MatchState`] is an immutable snapshot history plus a step
//!   pointer, a selection sub-state and a hint.
//! - **Engine**: [`MatchState::apply_cell_action`] is a total reducer over
//!   clicked cells; [`MatchState::jump_to_step`] is time travel.
//! - **Rules**: pure functions ([`compute_winner`], [`is_adjacent`], the
//!   center-square rule, legal move enumeration).
//! - **Contracts / invariants**: preconditions classify clicks into a
//!   [`Transition`] or a [`Rejection`]; postconditions and invariants are
//!   checked after every commit in debug builds.
//!
//! # Example
//!
//! ```
//! use chorus_lapilli::{MatchState, Player, Status};
//!
//! let state = MatchState::new().apply_cell_action(4);
//! assert_eq!(state.status(), Status::NextPlayer(Player::O));
//! assert_eq!(state.view().history[1].label, "Go to move #1");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod contracts;
mod engine;
mod invariants;
mod phases;
mod position;
mod rules;
mod state;
mod types;
mod view;

pub use action::{Movement, Rejection, RejectionPolicy, Transition};
pub use contracts::{CellActionContract, Contract, ContractViolation, LegalCellAction};
pub use engine::{apply_cell_action, jump_to_step};
pub use invariants::{
    HistoryConsistentInvariant, Invariant, InvariantSet, InvariantViolation, MatchInvariants,
    SelectionScopedInvariant, StepBoundsInvariant,
};
pub use phases::{PLACEMENT_PLIES, Phase, Selection, Status};
pub use position::Position;
pub use rules::{
    compute_winner, is_adjacent, legal_movements, legal_placements, violates_center_rule,
};
pub use state::{HistoryEntry, HistoryError, MatchState};
pub use types::{Board, Cell, Player};
pub use view::{HistoryLink, MatchView, history_label};
