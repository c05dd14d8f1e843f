//! The next mark is determined by how many marks are down.

use super::super::{Player, Snapshot};
use super::Invariant;

/// Invariant: it is X's turn exactly when both players have the same count.
pub struct TurnFollowsMarks;

impl Invariant<Snapshot> for TurnFollowsMarks {
    fn holds(state: &Snapshot) -> bool {
        let expected = if state.board.filled() % 2 == 0 {
            Player::X
        } else {
            Player::O
        };
        state.turn == expected
    }

    fn description() -> &'static str {
        "Turn alternates X, O, X, ... with the number of marks"
    }
}
