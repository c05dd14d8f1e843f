//! Tic-tac-toe game-state engine.
//!
//! Turn alternation, move validation, win and draw detection, and the reset
//! lifecycle for a 3x3 game. Rendering lives elsewhere: a presentation layer
//! forwards cell selections to [`GameEngine`] and re-renders from the
//! [`Snapshot`] it gets back.
//!
//! # Example
//!
//! ```
//! use tictac_engine::{GameEngine, Outcome, Player};
//!
//! let mut engine = GameEngine::new();
//! for index in [0, 4, 1, 5, 2] {
//!     engine.apply_move(index);
//! }
//! assert_eq!(engine.outcome(), Outcome::Winner(Player::X));
//!
//! // Moves after the game ends are ignored.
//! let before = engine.snapshot();
//! assert_eq!(engine.apply_move(8), before);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod engine;
pub mod invariants;
mod position;
pub mod rules;
mod types;

pub use action::MoveError;
pub use engine::GameEngine;
pub use position::Position;
pub use rules::evaluate_outcome;
pub use types::{Board, Outcome, Player, Snapshot, Square};
