//! User settings for the expense tracker
//!
//! Manages display preferences for the TUI: currency symbol, time format,
//! tick rate, and which view opens on startup. Settings are the only state
//! that touches disk; the expense records never do.

use serde::{Deserialize, Serialize};

use super::paths::TrackerPaths;
use crate::error::TrackerError;

/// Which view the TUI opens on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DefaultView {
    /// The expense register (default)
    #[default]
    Register,
    /// The per-category distribution chart
    Chart,
}

/// User settings for the expense tracker
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol shown next to amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Time format for the register's entered-at column (strftime format)
    #[serde(default = "default_time_format")]
    pub time_format: String,

    /// TUI tick interval in milliseconds
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,

    /// View the TUI opens on
    #[serde(default)]
    pub default_view: DefaultView,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_time_format() -> String {
    "%H:%M:%S".to_string()
}

fn default_tick_rate_ms() -> u64 {
    250
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            time_format: default_time_format(),
            tick_rate_ms: default_tick_rate_ms(),
            default_view: DefaultView::default(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &TrackerPaths) -> Result<Self, TrackerError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| TrackerError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                TrackerError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Create default settings
            let settings = Settings::default();
            // Don't save yet - let caller decide when to persist
            Ok(settings)
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &TrackerPaths) -> Result<(), TrackerError> {
        // Ensure the config directory exists
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| TrackerError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(&settings_path, contents)
            .map_err(|e| TrackerError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.schema_version, 1);
        assert_eq!(settings.currency_symbol, "$");
        assert_eq!(settings.time_format, "%H:%M:%S");
        assert_eq!(settings.tick_rate_ms, 250);
        assert_eq!(settings.default_view, DefaultView::Register);
    }

    #[test]
    fn test_load_without_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings::load_or_create(&paths).unwrap();
        assert_eq!(settings.currency_symbol, "$");
        // load_or_create must not write anything
        assert!(!paths.is_initialized());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.currency_symbol = "€".to_string();
        settings.default_view = DefaultView::Chart;

        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.currency_symbol, "€");
        assert_eq!(loaded.default_view, DefaultView::Chart);
    }

    #[test]
    fn test_missing_fields_fall_back_to_defaults() {
        let partial: Settings = serde_json::from_str(r#"{"currency_symbol": "£"}"#).unwrap();
        assert_eq!(partial.currency_symbol, "£");
        assert_eq!(partial.schema_version, 1);
        assert_eq!(partial.tick_rate_ms, 250);
        assert_eq!(partial.default_view, DefaultView::Register);
    }

    #[test]
    fn test_default_view_serializes_lowercase() {
        let json = serde_json::to_string(&DefaultView::Chart).unwrap();
        assert_eq!(json, "\"chart\"");
    }
}
