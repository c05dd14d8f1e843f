//! Game rules.
//!
//! Pure functions over a [`Board`]: no engine state, no side effects.
//! Lines are always checked before fullness, so a board that is both full
//! and line-complete evaluates as a win.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, check_winner, winning_line};

use super::{Board, Outcome};
use tracing::instrument;

/// Derives the outcome of `board`.
#[instrument(skip(board))]
pub fn evaluate_outcome(board: &Board) -> Outcome {
    if let Some(winner) = check_winner(board) {
        return Outcome::Winner(winner);
    }
    if is_full(board) {
        return Outcome::Draw;
    }
    Outcome::InProgress
}
