//! Key bindings.

use crossterm::event::KeyCode;
use tictac_engine::Position;

/// Cursor direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Toward the top row.
    Up,
    /// Toward the bottom row.
    Down,
    /// Toward the left column.
    Left,
    /// Toward the right column.
    Right,
}

/// What a key press asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move the cursor one cell.
    Cursor(Direction),
    /// Select the cell under the cursor.
    SelectCursor,
    /// Select a cell directly.
    Select(Position),
    /// Start over.
    Reset,
    /// Dismiss the result announcement.
    CloseAnnouncement,
    /// Leave the program.
    Quit,
}

/// Maps a key to an action.
///
/// While the announcement is open only closing it and quitting are bound.
pub fn action_for(key: KeyCode, announcement_open: bool) -> Option<Action> {
    if announcement_open {
        return match key {
            KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') => Some(Action::CloseAnnouncement),
            KeyCode::Char('q') => Some(Action::Quit),
            _ => None,
        };
    }

    match key {
        KeyCode::Up | KeyCode::Char('k') => Some(Action::Cursor(Direction::Up)),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::Cursor(Direction::Down)),
        KeyCode::Left | KeyCode::Char('h') => Some(Action::Cursor(Direction::Left)),
        KeyCode::Right | KeyCode::Char('l') => Some(Action::Cursor(Direction::Right)),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::SelectCursor),
        KeyCode::Char(c @ '1'..='9') => c
            .to_digit(10)
            .and_then(|d| Position::from_index(d as usize - 1))
            .map(Action::Select),
        KeyCode::Char('r') => Some(Action::Reset),
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        _ => None,
    }
}

/// Moves the cursor one cell, staying put at the board edge.
pub fn move_cursor(cursor: Position, direction: Direction) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let (row, col) = match direction {
        Direction::Up => (row.saturating_sub(1), col),
        Direction::Down => (row + 1, col),
        Direction::Left => (row, col.saturating_sub(1)),
        Direction::Right => (row, col + 1),
    };
    Position::from_row_col(row, col).unwrap_or(cursor)
}
