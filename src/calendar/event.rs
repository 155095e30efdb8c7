use crate::error::CalendarError;
use crate::utils::datetime::day_bounds;
use chrono::{Duration, NaiveDate, NaiveDateTime};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::path::Path;
use uuid::Uuid;

/// A calendar event with caller-defined payload.
///
/// The payload is flattened next to the base fields when (de)serialized, so a
/// JSON event looks like `{"title": ..., "start": ..., "end": ..., "location": ...}`
/// for a payload type with a `location` field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarEvent<T> {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    pub title: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    #[serde(flatten)]
    pub payload: T,
}

impl<T> CalendarEvent<T> {
    pub fn new(title: impl Into<String>, start: NaiveDateTime, end: NaiveDateTime, payload: T) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            start,
            end,
            payload,
        }
    }

    /// Whether the event starts within `day` (midnight inclusive, next midnight exclusive)
    pub fn starts_on(&self, day: NaiveDate) -> bool {
        let (from, until) = day_bounds(day);
        self.start >= from && self.start < until
    }

    pub fn duration(&self) -> Duration {
        self.end - self.start
    }
}

/// Payload used by the viewer for events read from disk
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Load a JSON array of events from disk
pub fn load_events_from_file<T, P>(path: P) -> Result<Vec<CalendarEvent<T>>, CalendarError>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|source| CalendarError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let events: Vec<CalendarEvent<T>> = serde_json::from_str(&content).map_err(|source| CalendarError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    log::info!("Loaded {} events from {}", events.len(), path.display());
    Ok(events)
}
