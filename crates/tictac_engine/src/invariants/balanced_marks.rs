//! X moves first, so X's count leads O's by at most one.

use super::super::{Player, Snapshot};
use super::Invariant;

/// Invariant: `count(X) - count(O)` is 0 or 1.
pub struct BalancedMarks;

impl Invariant<Snapshot> for BalancedMarks {
    fn holds(state: &Snapshot) -> bool {
        let x = state.board.count(Player::X);
        let o = state.board.count(Player::O);
        x == o || x == o + 1
    }

    fn description() -> &'static str {
        "X marks equal O marks or lead by one"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, Outcome, Position};

    fn with_board(board: Board) -> Snapshot {
        Snapshot {
            board,
            ..Snapshot::initial()
        }
    }

    #[test]
    fn test_one_ahead_holds() {
        let board = Board::new().with_mark(Position::Center, Player::X);
        assert!(BalancedMarks::holds(&with_board(board)));
    }

    #[test]
    fn test_o_ahead_violates() {
        let board = Board::new().with_mark(Position::Center, Player::O);
        assert!(!BalancedMarks::holds(&with_board(board)));
    }

    #[test]
    fn test_x_two_ahead_violates() {
        let board = Board::new()
            .with_mark(Position::Center, Player::X)
            .with_mark(Position::TopLeft, Player::X);
        let snapshot = Snapshot {
            outcome: Outcome::InProgress,
            ..with_board(board)
        };
        assert!(!BalancedMarks::holds(&snapshot));
    }
}
