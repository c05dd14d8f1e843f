//! Fullness check used for draw detection.

use super::super::{Board, Square};
use tracing::instrument;

/// Checks if every square is occupied.
///
/// Only a draw when no line is complete; see [`super::evaluate_outcome`].
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}
