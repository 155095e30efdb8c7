//! Date and time utility functions
//!
//! This module provides the small pieces of calendar arithmetic the month grid
//! relies on, plus the clock abstraction used for the "now" highlight.

use crate::error::CalendarError;
use chrono::{Datelike, Local, NaiveDate, NaiveDateTime, NaiveTime, Weekday};

/// Standard date format used for command line arguments and configuration
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Week start day numbering: 0 = Sunday through 6 = Saturday
pub type WeekNum = u8;

/// Parse a date string in YYYY-MM-DD format to NaiveDate
pub fn parse_date(date_str: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(date_str, DATE_FORMAT)
}

/// Convert a Sunday-based week number into a chrono weekday
pub fn weekday_from_num(num: WeekNum) -> Result<Weekday, CalendarError> {
    match num {
        0 => Ok(Weekday::Sun),
        1 => Ok(Weekday::Mon),
        2 => Ok(Weekday::Tue),
        3 => Ok(Weekday::Wed),
        4 => Ok(Weekday::Thu),
        5 => Ok(Weekday::Fri),
        6 => Ok(Weekday::Sat),
        other => Err(CalendarError::InvalidWeekStart(other)),
    }
}

/// Number of slots between the week start and `day` when a row starts on `week_start`
pub fn column_of(day: Weekday, week_start: Weekday) -> usize {
    let day = day.num_days_from_monday();
    let start = week_start.num_days_from_monday();
    ((7 + day - start) % 7) as usize
}

/// First day of the month containing `date`
pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    // Day 1 exists in every month
    date - chrono::Duration::days(i64::from(date.day0()))
}

/// Number of days in the given month, or `None` for an invalid year/month
pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    if month == 12 {
        return Some(31);
    }
    let next = NaiveDate::from_ymd_opt(year, month + 1, 1)?;
    Some((next - first).num_days() as u32)
}

/// Start of `day` (inclusive) and start of the following day (exclusive)
pub fn day_bounds(day: NaiveDate) -> (NaiveDateTime, NaiveDateTime) {
    let start = day.and_time(NaiveTime::MIN);
    (start, start + chrono::Duration::days(1))
}

/// Short weekday label used in column headers
pub fn weekday_short_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Mon",
        Weekday::Tue => "Tue",
        Weekday::Wed => "Wed",
        Weekday::Thu => "Thu",
        Weekday::Fri => "Fri",
        Weekday::Sat => "Sat",
        Weekday::Sun => "Sun",
    }
}

/// The seven weekdays in display order for a week starting on `week_start`
pub fn week_days(week_start: Weekday) -> [Weekday; 7] {
    let mut days = [week_start; 7];
    for i in 1..7 {
        days[i] = days[i - 1].succ();
    }
    days
}

/// Source of the current local time.
///
/// The month body asks its clock for "now" when it is created and on every
/// tick, so tests can pin the highlighted day with [`FixedClock`].
pub trait Clock {
    fn now(&self) -> NaiveDateTime;

    fn today(&self) -> NaiveDate {
        self.now().date()
    }
}

/// Wall clock in the local timezone
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Clock frozen at a given instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}
