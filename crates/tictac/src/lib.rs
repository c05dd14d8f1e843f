//! Terminal front end for the tictac engine.
//!
//! The [`App`] is the presentation layer: it forwards cell selections and
//! resets to [`tictac_engine::GameEngine`], keeps the cursor and the result
//! announcement, and [`ui::draw`] renders it with ratatui.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
pub mod cli;
mod config;
pub mod input;
pub mod logging;
mod script;
pub mod terminal;
pub mod ui;

pub use app::App;
pub use config::{ConfigError, Settings, Theme};
pub use script::{render_json, render_text, run_script};
