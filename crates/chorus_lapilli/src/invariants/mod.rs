//! First-class invariants for chorus lapilli.
//!
//! Invariants are logical properties that must hold for every reachable
//! match state. They are testable independently and document what the
//! engine guarantees.

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples, so sets compose as types. The first element
/// guards the rest: when it fails, only its violation is reported and the
/// remaining invariants are never evaluated.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

macro_rules! impl_invariant_set {
    ($first:ident $(, $rest:ident)+) => {
        impl<S, $first, $($rest),+> InvariantSet<S> for ($first, $($rest,)+)
        where
            $first: Invariant<S>,
            $($rest: Invariant<S>),+
        {
            fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
                if !$first::holds(state) {
                    return Err(vec![InvariantViolation::new($first::description())]);
                }

                let violations: Vec<_> = [$(($rest::holds(state), $rest::description())),+]
                    .into_iter()
                    .filter(|(holds, _)| !holds)
                    .map(|(_, description)| InvariantViolation::new(description))
                    .collect();

                if violations.is_empty() {
                    Ok(())
                } else {
                    Err(violations)
                }
            }
        }
    };
}

impl_invariant_set!(I1, I2);
impl_invariant_set!(I1, I2, I3);

pub mod history_consistent;
pub mod selection_scoped;
pub mod step_bounds;

pub use history_consistent::HistoryConsistentInvariant;
pub use selection_scoped::SelectionScopedInvariant;
pub use step_bounds::StepBoundsInvariant;

/// All match invariants as a composable set.
///
/// `StepBoundsInvariant` comes first: the others index the history, so
/// they only run once it holds.
pub type MatchInvariants = (
    StepBoundsInvariant,
    HistoryConsistentInvariant,
    SelectionScopedInvariant,
);
