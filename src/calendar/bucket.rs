use super::event::CalendarEvent;
use crate::constants::MORE_LABEL_FORMAT;
use chrono::NaiveDate;

/// Events starting on `day`, in input order, paired with their index in `events`
pub fn events_on_day<T>(events: &[CalendarEvent<T>], day: NaiveDate) -> impl Iterator<Item = (usize, &CalendarEvent<T>)> {
    events.iter().enumerate().filter(move |(_, event)| event.starts_on(day))
}

/// The events of one day cell after truncation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DaySlot {
    pub date: NaiveDate,
    /// Indices into the event list, at most `max_visible` of them
    pub visible: Vec<usize>,
    /// Events of the day that did not fit
    pub hidden: usize,
}

impl DaySlot {
    pub fn collect<T>(events: &[CalendarEvent<T>], date: NaiveDate, max_visible: usize) -> Self {
        let mut visible = Vec::new();
        let mut hidden = 0;
        for (index, _) in events_on_day(events, date) {
            if visible.len() < max_visible {
                visible.push(index);
            } else {
                hidden += 1;
            }
        }
        Self { date, visible, hidden }
    }

    pub fn total(&self) -> usize {
        self.visible.len() + self.hidden
    }

    /// "+K more" when events were cut off
    pub fn more_label(&self) -> Option<String> {
        (self.hidden > 0).then(|| MORE_LABEL_FORMAT.replace("{}", &self.hidden.to_string()))
    }
}
