use std::path::PathBuf;

/// Errors raised while loading calendar data or building a theme.
///
/// Rendering itself never fails; these only surface at the edges where
/// files and configuration values are read.
#[derive(Debug, thiserror::Error)]
pub enum CalendarError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse events from {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid colour: {0}")]
    InvalidColor(String),

    #[error("Invalid week start {0}, expected 0 (Sunday) to 6 (Saturday)")]
    InvalidWeekStart(u8),
}
