#![allow(dead_code)]

use chrono::{NaiveDate, NaiveDateTime};
use moncal::calendar::CalendarEvent;
use ratatui::buffer::Buffer;

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
    date(y, m, d).and_hms_opt(h, min, 0).unwrap()
}

/// One-hour event starting at the given time
pub fn event(title: &str, start: NaiveDateTime) -> CalendarEvent<()> {
    CalendarEvent::new(title, start, start + chrono::Duration::hours(1), ())
}

/// Rendered buffer as one string per row
pub fn buffer_lines(buffer: &Buffer) -> Vec<String> {
    let area = buffer.area;
    (0..area.height)
        .map(|y| (0..area.width).map(|x| buffer[(x, y)].symbol()).collect::<String>())
        .collect()
}
