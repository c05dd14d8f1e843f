//! The game-state engine.
//!
//! `GameEngine` owns the board, the next mark and the outcome. Callers
//! forward cell selections and resets; after either, they re-render from the
//! returned [`Snapshot`]. Invalid selections never fail: the engine
//! re-validates every move and ignores the ones it cannot apply.

use super::action::MoveError;
use super::invariants::debug_check;
use super::rules::evaluate_outcome;
use super::{Board, Outcome, Player, Position, Snapshot};
use tracing::{debug, info, instrument};

/// Tic-tac-toe game engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameEngine {
    board: Board,
    turn: Player,
    outcome: Outcome,
}

impl GameEngine {
    /// Creates an engine with an empty board and X to move.
    #[instrument]
    pub fn new() -> Self {
        let initial = Snapshot::initial();
        Self {
            board: initial.board,
            turn: initial.turn,
            outcome: initial.outcome,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the mark the next accepted move will place.
    pub fn turn(&self) -> Player {
        self.turn
    }

    /// Returns the current outcome.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Returns the current state as one value.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            board: self.board,
            turn: self.turn,
            outcome: self.outcome,
        }
    }

    /// Places the current mark at `index`, ignoring moves that cannot be made.
    ///
    /// Occupied cells, out-of-range indices and moves after the game has
    /// ended leave the state unchanged. Use [`try_move`](Self::try_move) to
    /// learn why a move was ignored.
    #[instrument(skip(self), fields(turn = %self.turn))]
    pub fn apply_move(&mut self, index: usize) -> Snapshot {
        match self.try_move(index) {
            Ok(snapshot) => snapshot,
            Err(e) => {
                debug!(error = %e, "Move ignored");
                self.snapshot()
            }
        }
    }

    /// Places the current mark at `index`, reporting why a move was rejected.
    ///
    /// A rejected move leaves the state unchanged.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] once the outcome is a win or draw
    /// - [`MoveError::OutOfRange`] for indices above 8
    /// - [`MoveError::SquareOccupied`] when the cell already has a mark
    #[instrument(skip(self), fields(turn = %self.turn))]
    pub fn try_move(&mut self, index: usize) -> Result<Snapshot, MoveError> {
        if self.outcome.is_terminal() {
            return Err(MoveError::GameOver(self.outcome));
        }
        let pos = Position::from_index(index).ok_or(MoveError::OutOfRange(index))?;
        if !self.board.is_empty(pos) {
            return Err(MoveError::SquareOccupied(pos));
        }

        let mark = self.turn;
        self.board = self.board.with_mark(pos, mark);
        self.turn = mark.opponent();
        self.outcome = evaluate_outcome(&self.board);
        debug!(position = %pos, player = %mark, "Move applied");

        if self.outcome.is_terminal() {
            info!(outcome = %self.outcome, "Game over");
        }

        let snapshot = self.snapshot();
        debug_check(&snapshot);
        Ok(snapshot)
    }

    /// Restores the initial state. Valid at any time.
    #[instrument(skip(self))]
    pub fn reset(&mut self) -> Snapshot {
        debug!(outcome = %self.outcome, "Resetting game");
        *self = Self::new();
        self.snapshot()
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Square;

    fn play(indices: &[usize]) -> GameEngine {
        let mut engine = GameEngine::new();
        for &index in indices {
            engine.apply_move(index);
        }
        engine
    }

    #[test]
    fn test_new_engine_is_initial() {
        assert_eq!(GameEngine::new().snapshot(), Snapshot::initial());
    }

    #[test]
    fn test_move_places_mark_and_flips_turn() {
        let mut engine = GameEngine::new();
        let snapshot = engine.apply_move(4);

        assert_eq!(snapshot.board.get(Position::Center), Square::Occupied(Player::X));
        assert_eq!(snapshot.turn, Player::O);
        assert_eq!(snapshot.outcome, Outcome::InProgress);
    }

    #[test]
    fn test_returned_snapshot_unaffected_by_later_moves() {
        let mut engine = GameEngine::new();
        let first = engine.apply_move(0);
        engine.apply_move(1);

        assert_eq!(first.board.filled(), 1);
        assert_eq!(engine.board().filled(), 2);
    }

    #[test]
    fn test_occupied_square_rejected() {
        let mut engine = play(&[4]);
        let before = engine.snapshot();

        assert_eq!(
            engine.try_move(4),
            Err(MoveError::SquareOccupied(Position::Center))
        );
        assert_eq!(engine.snapshot(), before);
    }

    #[test]
    fn test_out_of_range_rejected() {
        let mut engine = GameEngine::new();
        assert_eq!(engine.try_move(9), Err(MoveError::OutOfRange(9)));
        assert_eq!(engine.apply_move(usize::MAX), Snapshot::initial());
    }

    #[test]
    fn test_game_over_checked_before_range() {
        let mut engine = play(&[0, 4, 1, 5, 2]);
        assert_eq!(
            engine.try_move(42),
            Err(MoveError::GameOver(Outcome::Winner(Player::X)))
        );
    }

    #[test]
    fn test_turn_flips_on_winning_move() {
        let engine = play(&[0, 4, 1, 5, 2]);
        assert_eq!(engine.outcome(), Outcome::Winner(Player::X));
        assert_eq!(engine.turn(), Player::O);
    }

    #[test]
    fn test_reset_after_win() {
        let mut engine = play(&[0, 4, 1, 5, 2]);
        assert_eq!(engine.reset(), Snapshot::initial());
        assert_eq!(engine, GameEngine::new());
    }

    #[test]
    fn test_move_error_messages() {
        assert_eq!(
            MoveError::OutOfRange(9).to_string(),
            "Cell index 9 is out of range (must be 0-8)"
        );
        assert_eq!(
            MoveError::SquareOccupied(Position::Center).to_string(),
            "Square Center is already occupied"
        );
        assert_eq!(
            MoveError::GameOver(Outcome::Draw).to_string(),
            "Game is already over: It's a draw!"
        );
    }
}
