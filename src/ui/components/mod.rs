//! Reusable UI components

pub mod month_body;
pub mod month_event;
pub mod pan_responder;

// Component exports
pub use month_body::{BodyOptions, MonthCalendarBody};
pub use month_event::{EventCellStyle, EventRenderer, MonthEventCell};
pub use pan_responder::{PanOutcome, PanResponder};
