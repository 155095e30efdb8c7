//! Constants used throughout the application
//!
//! This module centralizes UI text, layout sizes and default values.

/// Number of week rows in a month grid, whether or not the month needs them all
pub const WEEKS_PER_GRID: usize = 6;
/// Number of day slots per week row
pub const DAYS_PER_WEEK: usize = 7;

// Calendar defaults
pub const DEFAULT_MAX_VISIBLE_EVENTS: usize = 3;
pub const MAX_VISIBLE_EVENTS_LIMIT: usize = 20;
/// Sunday, using the 0 = Sunday numbering of week start days
pub const DEFAULT_WEEK_STARTS_ON: u8 = 0;

// Gesture defaults
/// Horizontal travel in columns a drag must exceed to count as a swipe
pub const DEFAULT_SWIPE_THRESHOLD_COLUMNS: u16 = 6;
/// Vertical travel in rows after which a drag is no longer a horizontal swipe
pub const DEFAULT_SWIPE_THRESHOLD_ROWS: u16 = 3;

// Timing
pub const DEFAULT_TICK_RATE_MS: u64 = 1000;
pub const MAX_TICK_RATE_MS: u64 = 60_000;

// UI text
pub const MORE_LABEL_FORMAT: &str = "+{} more";
pub const HEADER_MONTH_FORMAT: &str = "%B %Y";
pub const STATUS_HINT: &str = "[ / ] or swipe: change month · t: today · q: quit";
pub const CONFIG_GENERATED: &str = "✅ Generated default configuration file";

// Files
pub const APP_DIR_NAME: &str = "moncal";
pub const LOCAL_CONFIG_FILE: &str = "moncal.toml";
pub const CONFIG_FILE_NAME: &str = "config.toml";
pub const LOG_FILE_NAME: &str = "moncal.log";
/// Number of log lines kept in memory for the viewer
pub const LOG_RING_CAPACITY: usize = 500;
