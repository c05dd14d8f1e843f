//! Tracing setup.

use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Where tracing output goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    /// A log file, truncated on start. Used while the TUI owns the screen.
    File(PathBuf),
    /// Standard error, leaving stdout for command output.
    Stderr,
}

/// Installs the global subscriber for `target`.
///
/// The filter comes from `RUST_LOG`, defaulting to `info` for files and
/// `warn` on stderr.
pub fn init(target: &LogTarget) -> Result<()> {
    let builder = tracing_subscriber::fmt().with_ansi(false);

    let _ = match target {
        LogTarget::File(path) => {
            let log_file = std::fs::File::create(path)
                .with_context(|| format!("Failed to create log file {}", path.display()))?;
            builder
                .with_env_filter(env_filter("info"))
                .with_writer(std::sync::Arc::new(log_file))
                .try_init()
        }
        LogTarget::Stderr => builder
            .with_env_filter(env_filter("warn"))
            .with_writer(std::io::stderr)
            .try_init(),
    };

    Ok(())
}

fn env_filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}
