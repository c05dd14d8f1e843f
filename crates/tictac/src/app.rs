//! Application state: the engine plus presentation-only state.

use crate::input::{Action, action_for, move_cursor};
use crossterm::event::KeyCode;
use tictac_engine::{GameEngine, Outcome, Position, Snapshot};
use tracing::{debug, info, instrument};

/// Main application state.
///
/// The engine owns the game. The cursor, the announcement and the quit flag
/// are presentation state and live here only.
#[derive(Debug, Clone)]
pub struct App {
    engine: GameEngine,
    cursor: Position,
    announcement: Option<Outcome>,
    should_quit: bool,
}

impl App {
    /// Creates an app with a fresh game and the cursor in the center.
    pub fn new() -> Self {
        Self {
            engine: GameEngine::new(),
            cursor: Position::Center,
            announcement: None,
            should_quit: false,
        }
    }

    /// Gets the engine.
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Gets the cursor position.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// The result being announced, if the announcement is open.
    pub fn announcement(&self) -> Option<Outcome> {
        self.announcement
    }

    /// Whether the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Status line text.
    pub fn status(&self) -> String {
        match self.engine.outcome() {
            Outcome::InProgress => format!("Player {}'s turn", self.engine.turn()),
            outcome => outcome.to_string(),
        }
    }

    /// Forwards a cell selection to the engine.
    ///
    /// Opens the announcement when this selection ends the game.
    #[instrument(skip(self))]
    pub fn select(&mut self, pos: Position) -> Snapshot {
        let was_terminal = self.engine.outcome().is_terminal();
        let snapshot = self.engine.apply_move(pos.to_index());

        if !was_terminal && snapshot.outcome.is_terminal() {
            info!(outcome = %snapshot.outcome, "Announcing result");
            self.announcement = Some(snapshot.outcome);
        }
        snapshot
    }

    /// Closes the announcement, which starts a new game.
    #[instrument(skip(self))]
    pub fn close_announcement(&mut self) {
        if self.announcement.take().is_some() {
            self.engine.reset();
        }
    }

    /// Starts a new game and hides any announcement.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        debug!("Restarting game");
        self.announcement = None;
        self.engine.reset();
    }

    /// Applies an action.
    pub fn perform(&mut self, action: Action) {
        debug!(?action, "Handling action");
        match action {
            Action::Cursor(direction) => self.cursor = move_cursor(self.cursor, direction),
            Action::SelectCursor => {
                self.select(self.cursor);
            }
            Action::Select(pos) => {
                self.cursor = pos;
                self.select(pos);
            }
            Action::Reset => self.reset(),
            Action::CloseAnnouncement => self.close_announcement(),
            Action::Quit => self.should_quit = true,
        }
    }

    /// Handles a key press; unbound keys are ignored.
    pub fn handle_key(&mut self, key: KeyCode) {
        if let Some(action) = action_for(key, self.announcement.is_some()) {
            self.perform(action);
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictac_engine::Player;

    #[test]
    fn test_status_follows_turn() {
        let mut app = App::new();
        assert_eq!(app.status(), "Player X's turn");
        app.select(Position::Center);
        assert_eq!(app.status(), "Player O's turn");
    }

    #[test]
    fn test_select_moves_cursor_on_digit() {
        let mut app = App::new();
        app.handle_key(KeyCode::Char('3'));
        assert_eq!(app.cursor(), Position::TopRight);
        assert!(!app.engine().board().is_empty(Position::TopRight));
    }

    #[test]
    fn test_reset_hides_announcement() {
        let mut app = App::new();
        for pos in [0, 4, 1, 5, 2] {
            app.select(Position::from_index(pos).unwrap());
        }
        assert_eq!(app.announcement(), Some(Outcome::Winner(Player::X)));

        app.reset();
        assert_eq!(app.announcement(), None);
        assert_eq!(app.engine().outcome(), Outcome::InProgress);
    }
}
