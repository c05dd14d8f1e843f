//! Command-line interface for tictac.

use crate::logging::LogTarget;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// tictac - two-player tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "tictac")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Log file for interactive play (the TUI owns the screen)
    #[arg(long, global = true, default_value = "tictac.log")]
    pub log_file: PathBuf,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play interactively in the terminal
    Play {
        /// Path to a TOML settings file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Apply cell indices (0-8) to a fresh game and print the result
    Script {
        /// Print the final state as JSON
        #[arg(long)]
        json: bool,

        /// Cell indices, in move order
        indices: Vec<usize>,
    },
}

impl Cli {
    /// Returns the chosen command, falling back to `play` with defaults.
    pub fn command(&self) -> Command {
        self.command
            .clone()
            .unwrap_or(Command::Play { config: None })
    }

    /// Log destination for the chosen command.
    ///
    /// Only interactive play writes the log file; `script` logs to stderr.
    pub fn log_target(&self) -> LogTarget {
        match self.command() {
            Command::Play { .. } => LogTarget::File(self.log_file.clone()),
            Command::Script { .. } => LogTarget::Stderr,
        }
    }
}
