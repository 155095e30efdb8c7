//! Moncal - a month-grid calendar body for terminal user interfaces
//!
//! This library renders a six-week month grid with the events of each day,
//! a "now" highlight, press handling for days and events, and horizontal
//! swipe gestures for month navigation. It is built on Ratatui and ships a
//! small viewer binary that hosts the component.
//!
//! # Modules
//!
//! * [`calendar`] - Events, month grid construction, day bucketing and navigation
//! * [`config`] - Application configuration management
//! * [`logger`] - Log dispatching and the in-memory log ring
//! * [`theme`] - Colour palette and layout direction
//! * [`ui`] - Terminal user interface components
//! * [`utils`] - Utility functions and helpers

/// Calendar domain: events, month grids, day buckets and month navigation
pub mod calendar;

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Error types shared by the library
pub mod error;

/// Logging utilities for debugging and error tracking
pub mod logger;

/// Theme used by the calendar components
pub mod theme;

/// Terminal user interface components and rendering
pub mod ui;

/// Utility functions for date/time handling and other helpers
pub mod utils;

pub use calendar::{CalendarEvent, HorizontalDirection, MonthGrid};
pub use error::CalendarError;
pub use ui::components::MonthCalendarBody;
