//! Invariants of the game state.
//!
//! Each invariant is a logical property over a [`Snapshot`] that must hold
//! after every accepted move. The engine checks the full set in debug builds.

use super::Snapshot;

pub mod balanced_marks;
pub mod outcome_matches_board;
pub mod turn_follows_marks;

pub use balanced_marks::BalancedMarks;
pub use outcome_matches_board::OutcomeMatchesBoard;
pub use turn_follows_marks::TurnFollowsMarks;

/// A property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for `state`.
    fn holds(state: &S) -> bool;

    /// Human-readable description.
    fn description() -> &'static str;
}

/// A violated invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// Invariants checked together; implemented for tuples.
pub trait InvariantSet<S> {
    /// Returns every violation, or `Ok(())` when all hold.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let violations: Vec<InvariantViolation> = [
            (I1::holds(state), I1::description()),
            (I2::holds(state), I2::description()),
            (I3::holds(state), I3::description()),
        ]
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

/// Every game-state invariant.
pub type EngineInvariants = (BalancedMarks, TurnFollowsMarks, OutcomeMatchesBoard);

/// Panics in debug builds if any engine invariant is violated.
pub(crate) fn debug_check(snapshot: &Snapshot) {
    if cfg!(debug_assertions)
        && let Err(violations) = EngineInvariants::check_all(snapshot)
    {
        let descriptions: Vec<&str> = violations.iter().map(|v| v.description.as_str()).collect();
        panic!("Invariant violation: {}", descriptions.join("; "));
    }
}
