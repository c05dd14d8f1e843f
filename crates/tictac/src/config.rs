//! Display settings loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// User-configurable display settings.
///
/// Every key is optional; missing keys take the defaults below.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Settings {
    /// Title shown above the board.
    #[serde(default = "default_title")]
    title: String,

    /// Color of X marks (`#rrggbb` or a color name).
    #[serde(default = "default_x_color")]
    x_color: String,

    /// Color of O marks.
    #[serde(default = "default_o_color")]
    o_color: String,

    /// Screen background color.
    #[serde(default = "default_background")]
    background: String,
}

fn default_title() -> String {
    "Tic Tac Toe".to_string()
}

fn default_x_color() -> String {
    "#0bb4c6".to_string()
}

fn default_o_color() -> String {
    "#E5C3A6".to_string()
}

fn default_background() -> String {
    "#324345".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            title: default_title(),
            x_color: default_x_color(),
            o_color: default_o_color(),
            background: default_background(),
        }
    }
}

impl Settings {
    /// Parses settings from TOML text and validates the colors.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let settings: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        settings.theme()?;
        Ok(settings)
    }

    /// Loads settings from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let settings = Self::from_toml(&content)?;
        info!(title = %settings.title, "Config loaded successfully");
        Ok(settings)
    }

    /// Loads settings from `path`, or the defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Resolves the color strings into a [`Theme`].
    pub fn theme(&self) -> Result<Theme, ConfigError> {
        Ok(Theme {
            x: parse_color("x_color", &self.x_color)?,
            o: parse_color("o_color", &self.o_color)?,
            background: parse_color("background", &self.background)?,
        })
    }
}

fn parse_color(key: &str, value: &str) -> Result<Color, ConfigError> {
    value
        .parse::<Color>()
        .map_err(|_| ConfigError::new(format!("Invalid color for {}: {:?}", key, value)))
}

/// Resolved colors used when rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// X marks.
    pub x: Color,
    /// O marks.
    pub o: Color,
    /// Screen background.
    pub background: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            x: Color::Rgb(0x0b, 0xb4, 0xc6),
            o: Color::Rgb(0xe5, 0xc3, 0xa6),
            background: Color::Rgb(0x32, 0x43, 0x45),
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error at the caller's location.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_theme_matches_default_settings() {
        assert_eq!(Settings::default().theme().unwrap(), Theme::default());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let settings = Settings::from_toml("title = \"Noughts\"\n").unwrap();
        assert_eq!(settings.title(), "Noughts");
        assert_eq!(settings.x_color(), "#0bb4c6");
    }

    #[test]
    fn test_named_colors_accepted() {
        let settings = Settings::from_toml("x_color = \"red\"\no_color = \"blue\"\n").unwrap();
        let theme = settings.theme().unwrap();
        assert_eq!(theme.x, Color::Red);
        assert_eq!(theme.o, Color::Blue);
    }

    #[test]
    fn test_bad_color_rejected() {
        let err = Settings::from_toml("o_color = \"not-a-color\"\n").unwrap_err();
        assert!(err.message.contains("o_color"));
    }

    #[test]
    fn test_bad_toml_rejected() {
        let err = Settings::from_toml("title = ").unwrap_err();
        assert!(err.message.starts_with("Failed to parse config"));
    }
}
