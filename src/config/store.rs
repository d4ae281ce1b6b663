// Config store for reading user settings.
// Handles JSON deserialization, defaults, and validation. Settings are never written back.

use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{ForecastError, Result};

/// Shape of the emulated watch display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayShape {
    /// Rectangular display: section headers are drawn.
    #[default]
    Rect,
    /// Round display: section headers are omitted.
    Round,
}

impl DisplayShape {
    pub fn shows_headers(&self) -> bool {
        matches!(self, DisplayShape::Rect)
    }
}

/// User settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Header shown above the main menu.
    pub location_label: String,
    /// Display shape, controls whether section headers are drawn.
    pub display_shape: DisplayShape,
    /// Input poll interval in milliseconds.
    pub tick_rate_ms: u64,
    /// Log level used when RUST_LOG is unset.
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            location_label: "Current Location".to_string(),
            display_shape: DisplayShape::Rect,
            tick_rate_ms: 250,
            log_level: "info".to_string(),
        }
    }
}

const LOG_LEVELS: [&str; 6] = ["off", "error", "warn", "info", "debug", "trace"];

impl Config {
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }

    /// Reject values the app can't run with.
    pub fn validate(&self) -> Result<()> {
        if self.tick_rate_ms == 0 {
            return Err(ForecastError::InvalidConfig(
                "tick_rate_ms must be greater than zero".to_string(),
            ));
        }
        if !LOG_LEVELS.contains(&self.log_level.to_lowercase().as_str()) {
            return Err(ForecastError::InvalidConfig(format!(
                "unknown log_level '{}'",
                self.log_level
            )));
        }
        Ok(())
    }
}

/// Load settings from a JSON file. A missing file yields the defaults.
pub fn load(path: &Path) -> Result<Config> {
    if !path.exists() {
        return Ok(Config::default());
    }

    let contents = fs::read_to_string(path)?;
    let config: Config = serde_json::from_str(&contents)?;
    config.validate()?;
    Ok(config)
}

/// Load settings from the standard config location, if one can be resolved.
pub fn load_or_default() -> Result<Config> {
    match super::paths::config_path() {
        Some(path) => load(&path),
        None => Ok(Config::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");

        let config = load(&path).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.location_label, "Current Location");
        assert!(config.display_shape.shows_headers());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");
        fs::write(&path, r#"{ "display_shape": "round", "location_label": "Oslo" }"#).unwrap();

        let config = load(&path).unwrap();
        assert_eq!(config.display_shape, DisplayShape::Round);
        assert!(!config.display_shape.shows_headers());
        assert_eq!(config.location_label, "Oslo");
        assert_eq!(config.tick_rate_ms, 250);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_invalid_json() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");
        fs::write(&path, "{ not json").unwrap();

        assert!(matches!(load(&path), Err(ForecastError::Json(_))));
    }

    #[test]
    fn test_zero_tick_rate_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");
        fs::write(&path, r#"{ "tick_rate_ms": 0 }"#).unwrap();

        assert!(matches!(load(&path), Err(ForecastError::InvalidConfig(_))));
    }

    #[test]
    fn test_unknown_log_level_rejected() {
        let config = Config {
            log_level: "chatty".to_string(),
            ..Config::default()
        };
        assert!(config.validate().is_err());

        let config = Config {
            log_level: "DEBUG".to_string(),
            ..Config::default()
        };
        assert!(config.validate().is_ok());
    }
}
