//! Application configuration structures.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};
use crate::surface::LocatorSet;

/// Root application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Wait, pause and scroll timing settings
    #[serde(default)]
    pub timing: TimingConfig,

    /// Export artifact settings
    #[serde(default)]
    pub export: ExportConfig,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Element locator contract
    #[serde(default)]
    pub locators: LocatorSet,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration, falling back to defaults when loading fails.
    ///
    /// The load error is returned alongside the fallback so the caller can
    /// report it once logging is up.
    pub fn load_or_default(path: impl AsRef<Path>) -> (Self, Option<AppError>) {
        match Self::load(path) {
            Ok(config) => (config, None),
            Err(error) => (Self::default(), Some(error)),
        }
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        if self.timing.poll_interval_ms == 0 {
            return Err(AppError::validation("timing.poll_interval_ms must be > 0"));
        }
        if self.timing.scroll_step_px == 0 {
            return Err(AppError::validation("timing.scroll_step_px must be > 0"));
        }
        if self.export.filename.trim().is_empty() {
            return Err(AppError::validation("export.filename is empty"));
        }
        self.locators.compile()?;
        Ok(())
    }
}

/// Wait, pause and scroll timing settings.
///
/// Defaults match the behavior of the live interface the locator contract
/// was documented against; all values are in milliseconds except the scroll
/// step.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimingConfig {
    /// Presence polling interval
    #[serde(default = "defaults::poll_interval")]
    pub poll_interval_ms: u64,

    /// Wait for entry cards on the first page
    #[serde(default = "defaults::card_wait")]
    pub card_wait_ms: u64,

    /// Wait for the detail overlay after activating an entry
    #[serde(default = "defaults::overlay_wait")]
    pub overlay_wait_ms: u64,

    /// Wait for the mutual-connections popover
    #[serde(default = "defaults::popover_wait")]
    pub popover_wait_ms: u64,

    /// Wait for entry cards after a next-page activation
    #[serde(default = "defaults::page_wait")]
    pub page_wait_ms: u64,

    /// Scroll advance per step, in pixels
    #[serde(default = "defaults::scroll_step")]
    pub scroll_step_px: u32,

    /// Delay between scroll steps
    #[serde(default = "defaults::scroll_delay")]
    pub scroll_delay_ms: u64,

    /// Settle pause after reaching the bottom of a scroll pass
    #[serde(default = "defaults::scroll_settle")]
    pub scroll_settle_ms: u64,

    /// Pause after resetting the scroll offset to the top
    #[serde(default = "defaults::scroll_reset")]
    pub scroll_reset_ms: u64,

    /// Pause after activating an entry's name control
    #[serde(default = "defaults::activate_pause")]
    pub activate_pause_ms: u64,

    /// Pause after activating the mutual-connections trigger
    #[serde(default = "defaults::mutual_pause")]
    pub mutual_pause_ms: u64,

    /// Settle pause before activating the next-page control
    #[serde(default = "defaults::next_settle")]
    pub next_settle_ms: u64,

    /// Load pause after activating the next-page control
    #[serde(default = "defaults::next_load")]
    pub next_load_ms: u64,

    /// Pause after dismissing an overlay or popover
    #[serde(default = "defaults::dismiss_pause")]
    pub dismiss_pause_ms: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: defaults::poll_interval(),
            card_wait_ms: defaults::card_wait(),
            overlay_wait_ms: defaults::overlay_wait(),
            popover_wait_ms: defaults::popover_wait(),
            page_wait_ms: defaults::page_wait(),
            scroll_step_px: defaults::scroll_step(),
            scroll_delay_ms: defaults::scroll_delay(),
            scroll_settle_ms: defaults::scroll_settle(),
            scroll_reset_ms: defaults::scroll_reset(),
            activate_pause_ms: defaults::activate_pause(),
            mutual_pause_ms: defaults::mutual_pause(),
            next_settle_ms: defaults::next_settle(),
            next_load_ms: defaults::next_load(),
            dismiss_pause_ms: defaults::dismiss_pause(),
        }
    }
}

/// Export artifact settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Filename of the produced CSV artifact
    #[serde(default = "defaults::filename")]
    pub filename: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            filename: defaults::filename(),
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Minimum log level (debug, info, warn, error)
    #[serde(default = "defaults::log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: defaults::log_level(),
        }
    }
}

mod defaults {
    pub fn poll_interval() -> u64 {
        250
    }
    pub fn card_wait() -> u64 {
        7000
    }
    pub fn overlay_wait() -> u64 {
        4000
    }
    pub fn popover_wait() -> u64 {
        3000
    }
    pub fn page_wait() -> u64 {
        8000
    }
    pub fn scroll_step() -> u32 {
        300
    }
    pub fn scroll_delay() -> u64 {
        25
    }
    pub fn scroll_settle() -> u64 {
        600
    }
    pub fn scroll_reset() -> u64 {
        300
    }
    pub fn activate_pause() -> u64 {
        800
    }
    pub fn mutual_pause() -> u64 {
        600
    }
    pub fn next_settle() -> u64 {
        400
    }
    pub fn next_load() -> u64 {
        1600
    }
    pub fn dismiss_pause() -> u64 {
        300
    }
    pub fn filename() -> String {
        "salesnav_profiles.csv".to_string()
    }
    pub fn log_level() -> String {
        "info".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: Config = toml::from_str(
            r#"
            [timing]
            overlay_wait_ms = 2000
            "#,
        )
        .unwrap();
        assert_eq!(config.timing.overlay_wait_ms, 2000);
        assert_eq!(config.timing.poll_interval_ms, 250);
        assert_eq!(config.export.filename, "salesnav_profiles.csv");
    }

    #[test]
    fn test_validate_rejects_zero_poll_interval() {
        let mut config = Config::default();
        config.timing.poll_interval_ms = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_or_default_on_missing_file() {
        let (config, error) = Config::load_or_default("does/not/exist.toml");
        assert_eq!(config.timing.card_wait_ms, 7000);
        assert!(error.is_some());
    }
}
