//! tictac - terminal tic-tac-toe.

use anyhow::{Context, Result};
use clap::Parser;
use tictac::cli::{Cli, Command};
use tictac::{Settings, logging, render_json, render_text, run_script, terminal};
use tracing::info;

fn main() -> Result<()> {
    // Load .env file (RUST_LOG)
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    logging::init(&cli.log_target())?;

    match cli.command() {
        Command::Play { config } => {
            let settings =
                Settings::load(config.as_deref()).context("Failed to load settings")?;
            terminal::run(&settings)
        }
        Command::Script { json, indices } => {
            info!(?indices, "Running script");
            let snapshot = run_script(&indices);
            let output = if json {
                render_json(&snapshot)?
            } else {
                render_text(&snapshot)
            };
            println!("{}", output);
            Ok(())
        }
    }
}
