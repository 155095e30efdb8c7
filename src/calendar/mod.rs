//! Calendar domain types and the pure calendar arithmetic behind the month view.
//!
//! - [`event`] - Calendar events carrying an opaque caller payload
//! - [`grid`] - Six-week month grids
//! - [`bucket`] - Per-day event buckets with overflow counting
//! - [`navigation`] - Month stepping and swipe directions

pub mod bucket;
pub mod event;
pub mod grid;
pub mod navigation;

pub use bucket::{events_on_day, DaySlot};
pub use event::{load_events_from_file, CalendarEvent, EventDetails};
pub use grid::{MonthGrid, Week};
pub use navigation::{month_after_swipe, shift_month, HorizontalDirection};
