use crate::constants::{DAYS_PER_WEEK, WEEKS_PER_GRID};
use crate::utils::datetime::{column_of, days_in_month, first_of_month};
use chrono::{Datelike, NaiveDate, Weekday};

/// One week row; `None` marks a slot outside the displayed month
pub type Week = [Option<NaiveDate>; DAYS_PER_WEEK];

/// The six-week grid of a single month.
///
/// Slots are filled row-major starting at the column of the month's first
/// day. Rows the month does not reach stay empty, so the grid always has the
/// same shape regardless of how many weeks the month spans.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    first_day: NaiveDate,
    last_day: NaiveDate,
    week_start: Weekday,
    weeks: [Week; WEEKS_PER_GRID],
}

impl MonthGrid {
    pub fn new(target: NaiveDate, week_start: Weekday) -> Self {
        let first_day = first_of_month(target);
        // The month of a valid date always has a length
        let len = days_in_month(first_day.year(), first_day.month()).unwrap_or(31);
        let last_day = first_day.with_day(len).unwrap_or(first_day);

        let mut weeks = [[None; DAYS_PER_WEEK]; WEEKS_PER_GRID];
        let offset = column_of(first_day.weekday(), week_start);
        for (i, date) in (1..=len).filter_map(|day| first_day.with_day(day)).enumerate() {
            let slot = offset + i;
            weeks[slot / DAYS_PER_WEEK][slot % DAYS_PER_WEEK] = Some(date);
        }

        log::debug!(
            "Built month grid for {} starting on {:?} (offset {})",
            first_day.format("%Y-%m"),
            week_start,
            offset
        );

        Self {
            first_day,
            last_day,
            week_start,
            weeks,
        }
    }

    pub fn weeks(&self) -> &[Week] {
        &self.weeks
    }

    pub fn first_day(&self) -> NaiveDate {
        self.first_day
    }

    pub fn last_day(&self) -> NaiveDate {
        self.last_day
    }

    pub fn week_start(&self) -> Weekday {
        self.week_start
    }

    pub fn year(&self) -> i32 {
        self.first_day.year()
    }

    pub fn month(&self) -> u32 {
        self.first_day.month()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.first_day && date <= self.last_day
    }

    /// All dates of the month in grid order
    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.weeks.iter().flatten().flatten().copied()
    }

    /// Row and column of `date`, if it belongs to this month
    pub fn position_of(&self, date: NaiveDate) -> Option<(usize, usize)> {
        if !self.contains(date) {
            return None;
        }
        let slot = column_of(self.first_day.weekday(), self.week_start) + date.day0() as usize;
        Some((slot / DAYS_PER_WEEK, slot % DAYS_PER_WEEK))
    }

    /// Number of rows holding at least one date of the month
    pub fn used_weeks(&self) -> usize {
        self.weeks
            .iter()
            .filter(|week| week.iter().any(Option::is_some))
            .count()
    }
}
