//! Reasons a move is not applied.

use super::{Outcome, Position};

/// Why the engine ignored a move.
///
/// [`GameEngine::apply_move`](crate::GameEngine::apply_move) swallows these;
/// [`GameEngine::try_move`](crate::GameEngine::try_move) returns them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// Index outside 0-8.
    #[display("Cell index {} is out of range (must be 0-8)", _0)]
    OutOfRange(usize),

    /// The square already carries a mark.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The game has ended; only reset is accepted.
    #[display("Game is already over: {}", _0)]
    GameOver(Outcome),
}

impl std::error::Error for MoveError {}
