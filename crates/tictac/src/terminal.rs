//! Interactive terminal session.

use crate::app::App;
use crate::config::{Settings, Theme};
use crate::ui;
use anyhow::Result;
use crossterm::{
    cursor::Show,
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use tracing::{info, instrument, warn};

/// Puts the terminal back into cooked mode on the main screen when dropped.
///
/// Created as soon as raw mode is on, so setup failures, loop errors and
/// panics all restore the terminal.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        let guard = Self;
        execute!(io::stdout(), EnterAlternateScreen)?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(e) = restore_terminal() {
            warn!(error = %e, "Failed to restore terminal");
        }
    }
}

/// Leaves raw mode and the alternate screen and shows the cursor.
///
/// Every step is attempted even if an earlier one fails. Safe to call when
/// the terminal was never set up.
fn restore_terminal() -> io::Result<()> {
    let raw = disable_raw_mode();
    let screen = execute!(io::stdout(), LeaveAlternateScreen, Show);
    raw.and(screen)
}

/// Runs the game until the user quits, restoring the terminal afterwards.
#[instrument(skip_all, fields(title = %settings.title()))]
pub fn run(settings: &Settings) -> Result<()> {
    let theme = settings.theme()?;
    info!("Starting tictac TUI");

    let result = {
        let _guard = TerminalGuard::enter()?;
        let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
        event_loop(&mut terminal, &theme, settings.title())
    };

    info!("tictac TUI exited");
    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    theme: &Theme,
    title: &str,
) -> Result<()> {
    let mut app = App::new();

    while !app.should_quit() {
        terminal.draw(|frame| ui::draw(frame, &app, theme, title))?;

        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            app.handle_key(key.code);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_restore_without_setup_is_harmless() {
        // Raw mode was never enabled here; restoring must still succeed,
        // and repeatedly, since the guard may run after a partial setup.
        assert!(restore_terminal().is_ok());
        assert!(restore_terminal().is_ok());
    }
}
