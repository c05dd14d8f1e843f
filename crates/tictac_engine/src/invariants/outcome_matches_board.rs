//! Outcome is derived, never set independently.

use super::super::{Snapshot, rules::evaluate_outcome};
use super::Invariant;

/// Invariant: the stored outcome equals the board's evaluated outcome.
pub struct OutcomeMatchesBoard;

impl Invariant<Snapshot> for OutcomeMatchesBoard {
    fn holds(state: &Snapshot) -> bool {
        state.outcome == evaluate_outcome(&state.board)
    }

    fn description() -> &'static str {
        "Outcome matches the board"
    }
}
