//! Headless play: feed indices to a fresh engine and report the result.

use anyhow::Result;
use tictac_engine::{GameEngine, Snapshot};
use tracing::{debug, instrument};

/// Applies `indices` in order to a fresh game; ignored moves are skipped.
#[instrument]
pub fn run_script(indices: &[usize]) -> Snapshot {
    let mut engine = GameEngine::new();
    for &index in indices {
        if let Err(e) = engine.try_move(index) {
            debug!(index, error = %e, "Skipping move");
        }
    }
    engine.snapshot()
}

/// Formats a snapshot for the terminal: the board then the status line.
pub fn render_text(snapshot: &Snapshot) -> String {
    let status = if snapshot.outcome.is_terminal() {
        snapshot.outcome.to_string()
    } else {
        format!("Player {}'s turn", snapshot.turn)
    };
    format!("{}\n\n{}", snapshot.board.display(), status)
}

/// Formats a snapshot as pretty JSON.
pub fn render_json(snapshot: &Snapshot) -> Result<String> {
    Ok(serde_json::to_string_pretty(snapshot)?)
}
