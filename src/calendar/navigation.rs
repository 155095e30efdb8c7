use chrono::{Datelike, Months, NaiveDate};
use serde::{Deserialize, Serialize};

/// Direction of a horizontal swipe, named after the way the pointer travelled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HorizontalDirection {
    Left,
    Right,
}

impl HorizontalDirection {
    /// Month offset the swipe stands for: dragging left reveals the next month
    pub fn month_delta(self) -> i32 {
        match self {
            HorizontalDirection::Left => 1,
            HorizontalDirection::Right => -1,
        }
    }
}

/// Move `date` by `delta` months, clamping the day to the target month's length.
///
/// Falls back to `date` itself if the result would leave chrono's range.
pub fn shift_month(date: NaiveDate, delta: i32) -> NaiveDate {
    let months = Months::new(delta.unsigned_abs());
    let shifted = if delta >= 0 {
        date.checked_add_months(months)
    } else {
        date.checked_sub_months(months)
    };
    shifted.unwrap_or(date)
}

/// Target date after a swipe in `direction`
pub fn month_after_swipe(date: NaiveDate, direction: HorizontalDirection) -> NaiveDate {
    let next = shift_month(date, direction.month_delta());
    log::debug!(
        "Swipe {:?}: {}-{:02} -> {}-{:02}",
        direction,
        date.year(),
        date.month(),
        next.year(),
        next.month()
    );
    next
}
