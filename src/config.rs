//! Configuration management for Moncal
//!
//! This module handles loading, parsing, and validation of configuration files.

use crate::constants::{
    APP_DIR_NAME, CONFIG_FILE_NAME, CONFIG_GENERATED, DEFAULT_MAX_VISIBLE_EVENTS, DEFAULT_SWIPE_THRESHOLD_COLUMNS,
    DEFAULT_SWIPE_THRESHOLD_ROWS, DEFAULT_TICK_RATE_MS, DEFAULT_WEEK_STARTS_ON, LOCAL_CONFIG_FILE,
    MAX_TICK_RATE_MS, MAX_VISIBLE_EVENTS_LIMIT,
};
use crate::theme::Theme;
use crate::utils::datetime::{self, WeekNum};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub calendar: CalendarConfig,
    pub ui: UiConfig,
    pub theme: ThemeConfig,
    pub logging: LoggingConfig,
}

/// Month view behaviour
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CalendarConfig {
    /// Events shown per day before collapsing into "+K more"
    pub max_visible_event_count: usize,
    /// First column of the week: 0 = Sunday ... 6 = Saturday
    pub week_starts_on: WeekNum,
    /// Stop refreshing the current-day highlight
    pub hide_now_indicator: bool,
}

/// Terminal interaction settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Enable mouse support (presses and swipes)
    pub mouse_enabled: bool,
    /// Horizontal drag distance, in columns, that counts as a swipe
    pub swipe_threshold_columns: u16,
    /// Vertical drag distance, in rows, that cancels a swipe
    pub swipe_threshold_rows: u16,
    /// Interval between clock ticks in milliseconds
    pub tick_rate_ms: u64,
}

/// Theme colours, as palette names or ratatui colour strings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Right-to-left column order
    pub rtl: bool,
    pub primary: String,
    pub border: String,
    pub text: String,
    pub event_foreground: String,
    pub event_background: String,
    pub more_label: String,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggingConfig {
    /// Enable logging to file
    pub enabled: bool,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            max_visible_event_count: DEFAULT_MAX_VISIBLE_EVENTS,
            week_starts_on: DEFAULT_WEEK_STARTS_ON,
            hide_now_indicator: false,
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            mouse_enabled: true,
            swipe_threshold_columns: DEFAULT_SWIPE_THRESHOLD_COLUMNS,
            swipe_threshold_rows: DEFAULT_SWIPE_THRESHOLD_ROWS,
            tick_rate_ms: DEFAULT_TICK_RATE_MS,
        }
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            rtl: false,
            primary: "primary".to_string(),
            border: "gray_200".to_string(),
            text: "reset".to_string(),
            event_foreground: "white".to_string(),
            event_background: "event_blue".to_string(),
            more_label: "reset".to_string(),
        }
    }
}

impl UiConfig {
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }
}

impl Config {
    /// Load configuration from file or return defaults
    pub fn load() -> Result<Self> {
        let config_path = Self::find_config_file()?;

        if let Some(path) = config_path {
            Self::load_from_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Find configuration file in order of precedence
    fn find_config_file() -> Result<Option<PathBuf>> {
        // 1. Check current directory
        let current_dir_config = PathBuf::from(LOCAL_CONFIG_FILE);
        if current_dir_config.exists() {
            return Ok(Some(current_dir_config));
        }

        // 2. Check XDG config directory
        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join(APP_DIR_NAME).join(CONFIG_FILE_NAME);
            if xdg_config.exists() {
                return Ok(Some(xdg_config));
            }
        }

        Ok(None)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.calendar.max_visible_event_count > MAX_VISIBLE_EVENTS_LIMIT {
            anyhow::bail!(
                "max_visible_event_count cannot exceed {}, got {}",
                MAX_VISIBLE_EVENTS_LIMIT,
                self.calendar.max_visible_event_count
            );
        }

        datetime::weekday_from_num(self.calendar.week_starts_on)?;

        if self.ui.swipe_threshold_columns == 0 {
            anyhow::bail!("swipe_threshold_columns must be at least 1");
        }
        if self.ui.swipe_threshold_rows == 0 {
            anyhow::bail!("swipe_threshold_rows must be at least 1");
        }

        if self.ui.tick_rate_ms == 0 || self.ui.tick_rate_ms > MAX_TICK_RATE_MS {
            anyhow::bail!(
                "tick_rate_ms must be between 1 and {}, got {}",
                MAX_TICK_RATE_MS,
                self.ui.tick_rate_ms
            );
        }

        // Every colour must resolve
        Theme::from_config(&self.theme)?;

        Ok(())
    }

    /// Generate default configuration file
    pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
        let config = Self::default();
        let toml_content = toml::to_string_pretty(&config).context("Failed to serialize default config")?;

        let header = format!(
            "# Moncal Configuration File\n# Generated on {}\n\n",
            chrono::Local::now().format(datetime::DATE_FORMAT)
        );

        let full_content = header + &toml_content;

        // Ensure the parent directory exists
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }

        std::fs::write(&path, full_content)
            .with_context(|| format!("Failed to write config file: {}", path.as_ref().display()))?;

        println!("{}: {}", CONFIG_GENERATED, path.as_ref().display());
        Ok(())
    }

    /// Get the XDG config directory path
    pub fn get_xdg_config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
            .map(|dir| dir.join(APP_DIR_NAME))
    }

    /// Get the default config file path
    pub fn get_default_config_path() -> Result<PathBuf> {
        Ok(Self::get_xdg_config_dir()?.join(CONFIG_FILE_NAME))
    }
}
