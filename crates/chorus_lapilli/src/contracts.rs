//! Contract-based validation for cell actions.
//!
//! Contracts define correctness through preconditions and postconditions.
//! They formalize the Hoare-style reasoning: {P} action {Q}

use super::action::{Movement, Rejection, Transition};
use super::invariants::{InvariantSet, MatchInvariants};
use super::phases::{Phase, Selection};
use super::rules::{compute_winner, violates_center_rule};
use super::state::MatchState;
use super::{Cell, Player, Position};
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
///
/// - Precondition: {P(state, action)} - classifies the action or rejects it
/// - Postcondition: {Q(before, after)} - must hold after committing it
pub trait Contract<S, A> {
    /// What an accepted action does.
    type Accepted;

    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<Self::Accepted, Rejection>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), ContractViolation>;
}

/// A postcondition that failed to hold.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("Postcondition failed: {}", message)]
pub struct ContractViolation {
    /// What went wrong.
    pub message: String,
}

impl ContractViolation {
    /// Creates a new contract violation.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Cell Action Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the current board has no winner.
pub struct NotTerminal;

impl NotTerminal {
    /// Rejects every action once a line of three exists.
    pub fn check(state: &MatchState) -> Result<(), Rejection> {
        match compute_winner(state.current_board()) {
            Some(_) => Err(Rejection::GameOver),
            None => Ok(()),
        }
    }
}

/// Precondition: the cell index names a board position.
pub struct OnBoard;

impl OnBoard {
    /// Maps the raw index to a position, or rejects it as off the board.
    pub fn check(cell: usize) -> Result<Position, Rejection> {
        Position::from_index(cell).ok_or(Rejection::OutOfRange(cell))
    }
}

/// Precondition: a placement targets an empty cell.
pub struct PlacementTargetEmpty;

impl PlacementTargetEmpty {
    /// Rejects a placement on an occupied cell.
    pub fn check(state: &MatchState, at: Position) -> Result<(), Rejection> {
        if state.current_board().is_empty(at) {
            Ok(())
        } else {
            Err(Rejection::CellOccupied(at))
        }
    }
}

/// Precondition: the first movement click lands on the mover's own piece.
pub struct OwnPiece;

impl OwnPiece {
    /// Rejects a selection of an empty cell or an opponent's piece.
    pub fn check(state: &MatchState, at: Position) -> Result<(), Rejection> {
        let player = state.to_move();
        if state.current_board().get(at) == Cell::Occupied(player) {
            Ok(())
        } else {
            Err(Rejection::NotYourPiece { player, at })
        }
    }
}

/// Precondition: the destination is empty.
pub struct DestinationEmpty;

impl DestinationEmpty {
    /// Rejects a destination that already holds a piece.
    pub fn check(state: &MatchState, to: Position) -> Result<(), Rejection> {
        if state.current_board().is_empty(to) {
            Ok(())
        } else {
            Err(Rejection::DestinationOccupied(to))
        }
    }
}

/// Precondition: the destination neighbours the selected piece.
pub struct DestinationAdjacent;

impl DestinationAdjacent {
    /// Rejects a movement whose endpoints do not touch.
    pub fn check(player: Player, movement: Movement) -> Result<(), Rejection> {
        if movement.from.is_adjacent(movement.to) {
            Ok(())
        } else {
            Err(Rejection::NotAdjacent { player, movement })
        }
    }
}

/// Precondition: the moved board satisfies the center-square rule.
pub struct CenterSquareRule;

impl CenterSquareRule {
    /// Rejects a movement that keeps the center without completing a line.
    pub fn check(state: &MatchState, player: Player, movement: Movement) -> Result<(), Rejection> {
        let after = state.current_board().with_moved(movement.from, movement.to);
        if violates_center_rule(&after, player, movement.to) {
            Err(Rejection::CenterSquare { player, movement })
        } else {
            Ok(())
        }
    }
}

/// Composite precondition: classifies a clicked cell against phase and selection.
///
/// Checks run in a fixed order, and the first failure wins: terminal board,
/// off-board index, then the phase-specific checks.
pub struct LegalCellAction;

impl LegalCellAction {
    /// Classifies `cell` as a placement, selection or movement, or returns the
    /// first rejection.
    #[instrument(skip(state), fields(step = state.step_number()))]
    pub fn check(state: &MatchState, cell: usize) -> Result<Transition, Rejection> {
        NotTerminal::check(state)?;
        let at = OnBoard::check(cell)?;
        let player = state.to_move();

        match (state.phase(), state.selection()) {
            (Phase::Placement, _) => {
                PlacementTargetEmpty::check(state, at)?;
                Ok(Transition::Placed { player, at })
            }
            (Phase::Movement, Selection::AwaitingFirstSelection) => {
                OwnPiece::check(state, at)?;
                Ok(Transition::Selected { player, at })
            }
            (Phase::Movement, Selection::AwaitingDestination { from }) => {
                let movement = Movement::new(from, at);
                DestinationEmpty::check(state, at)?;
                DestinationAdjacent::check(player, movement)?;
                CenterSquareRule::check(state, player, movement)?;
                Ok(Transition::Moved { player, movement })
            }
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Cell Action Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for committed cell actions.
///
/// Postconditions:
/// - History was truncated to the old step and grew by exactly one entry
/// - The step pointer sits on the new entry and selection is cleared
/// - Movements conserve the piece counts
/// - All match invariants hold
pub struct CellActionContract;

impl Contract<MatchState, usize> for CellActionContract {
    type Accepted = Transition;

    fn pre(state: &MatchState, cell: &usize) -> Result<Transition, Rejection> {
        LegalCellAction::check(state, *cell)
    }

    fn post(before: &MatchState, after: &MatchState) -> Result<(), ContractViolation> {
        let kept = before.step_number() + 1;
        if after.history().len() != kept + 1 {
            return Err(ContractViolation::new(format!(
                "history length {} after commit from step {}",
                after.history().len(),
                before.step_number()
            )));
        }
        if after.step_number() != kept {
            return Err(ContractViolation::new(format!(
                "step {} after commit from step {}",
                after.step_number(),
                before.step_number()
            )));
        }
        let (prior, next) = (before.history(), after.history());
        if !prior.iter().take(kept).eq(next.iter().take(kept)) {
            return Err(ContractViolation::new("committed history prefix changed"));
        }
        if after.selection() != Selection::AwaitingFirstSelection {
            return Err(ContractViolation::new("selection survived a commit"));
        }

        if before.phase() == Phase::Movement {
            let (old, new) = (before.current_board(), after.current_board());
            for player in [Player::X, Player::O] {
                if old.count(player) != new.count(player) {
                    warn!(
                        %player,
                        before = old.count(player),
                        after = new.count(player),
                        "Piece count changed"
                    );
                    return Err(ContractViolation::new(format!(
                        "movement changed the number of {} pieces",
                        player
                    )));
                }
            }
        }

        MatchInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            ContractViolation::new(descriptions)
        })
    }
}

/// Asserts the commit postconditions in debug builds.
#[instrument(skip_all)]
pub fn assert_postconditions(before: &MatchState, after: &MatchState) {
    if cfg!(debug_assertions) {
        let result = CellActionContract::post(before, after);
        debug_assert!(result.is_ok(), "{:?}", result);
    }
}
