//! Month grid body: six week rows of day cells with their events.
//!
//! The body is purely presentational. It derives the month grid and the
//! per-day event buckets on every render, draws them, and remembers where
//! each cell and event line landed so mouse presses can be resolved against
//! the last frame. Interactions come back as [`Action`]s; optional callbacks
//! registered on the body are invoked alongside.

use crate::calendar::{CalendarEvent, DaySlot, HorizontalDirection, MonthGrid};
use crate::config::Config;
use crate::constants::{
    DAYS_PER_WEEK, DEFAULT_MAX_VISIBLE_EVENTS, DEFAULT_SWIPE_THRESHOLD_COLUMNS, DEFAULT_SWIPE_THRESHOLD_ROWS,
    WEEKS_PER_GRID,
};
use crate::error::CalendarError;
use crate::theme::Theme;
use crate::ui::components::month_event::{EventCellStyle, EventRenderer, MonthEventCell};
use crate::ui::components::pan_responder::{PanOutcome, PanResponder};
use crate::ui::core::{Action, Component};
use crate::utils::datetime::{weekday_from_num, Clock, SystemClock};
use chrono::{NaiveDate, NaiveDateTime, Weekday};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Position, Rect},
    style::Style,
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use uuid::Uuid;

pub type CellPressCallback = Box<dyn FnMut(NaiveDate)>;
pub type EventPressCallback<T> = Box<dyn FnMut(&CalendarEvent<T>)>;
pub type SwipeCallback = Box<dyn FnMut(HorizontalDirection)>;

/// Display options of the month body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BodyOptions {
    pub max_visible_event_count: usize,
    pub week_starts_on: Weekday,
    pub hide_now_indicator: bool,
    pub swipe_threshold_columns: u16,
    pub swipe_threshold_rows: u16,
}

impl Default for BodyOptions {
    fn default() -> Self {
        Self {
            max_visible_event_count: DEFAULT_MAX_VISIBLE_EVENTS,
            week_starts_on: Weekday::Sun,
            hide_now_indicator: false,
            swipe_threshold_columns: DEFAULT_SWIPE_THRESHOLD_COLUMNS,
            swipe_threshold_rows: DEFAULT_SWIPE_THRESHOLD_ROWS,
        }
    }
}

impl BodyOptions {
    pub fn from_config(config: &Config) -> Result<Self, CalendarError> {
        Ok(Self {
            max_visible_event_count: config.calendar.max_visible_event_count,
            week_starts_on: weekday_from_num(config.calendar.week_starts_on)?,
            hide_now_indicator: config.calendar.hide_now_indicator,
            swipe_threshold_columns: config.ui.swipe_threshold_columns,
            swipe_threshold_rows: config.ui.swipe_threshold_rows,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HitTarget {
    Cell(NaiveDate),
    /// Index into the body's event list
    Event(usize),
}

#[derive(Debug, Clone, Copy)]
struct HitRegion {
    area: Rect,
    target: HitTarget,
}

pub struct MonthCalendarBody<T> {
    target_date: NaiveDate,
    events: Vec<CalendarEvent<T>>,
    options: BodyOptions,
    theme: Theme,
    style: Style,
    event_cell_style: Option<EventCellStyle<T>>,
    render_event: Option<EventRenderer<T>>,
    on_press_cell: Option<CellPressCallback>,
    on_press_event: Option<EventPressCallback<T>>,
    on_swipe_horizontal: Option<SwipeCallback>,
    clock: Box<dyn Clock>,
    now: NaiveDateTime,
    pan: PanResponder,
    area: Rect,
    hits: Vec<HitRegion>,
}

impl<T> MonthCalendarBody<T> {
    pub fn new(target_date: NaiveDate, events: Vec<CalendarEvent<T>>) -> Self {
        let options = BodyOptions::default();
        let clock: Box<dyn Clock> = Box::new(SystemClock);
        let now = clock.now();
        Self {
            target_date,
            events,
            pan: PanResponder::new(options.swipe_threshold_columns, options.swipe_threshold_rows),
            options,
            theme: Theme::default(),
            style: Style::default(),
            event_cell_style: None,
            render_event: None,
            on_press_cell: None,
            on_press_event: None,
            on_swipe_horizontal: None,
            clock,
            now,
            area: Rect::default(),
            hits: Vec::new(),
        }
    }

    pub fn options(mut self, options: BodyOptions) -> Self {
        self.pan = PanResponder::new(options.swipe_threshold_columns, options.swipe_threshold_rows);
        self.options = options;
        self
    }

    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Style applied to the whole body area before cells are drawn
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn event_cell_style(mut self, f: impl Fn(&CalendarEvent<T>) -> Style + 'static) -> Self {
        self.event_cell_style = Some(Box::new(f));
        self
    }

    pub fn render_event(mut self, f: impl Fn(&CalendarEvent<T>, &Theme) -> Line<'static> + 'static) -> Self {
        self.render_event = Some(Box::new(f));
        self
    }

    pub fn on_press_cell(mut self, f: impl FnMut(NaiveDate) + 'static) -> Self {
        self.on_press_cell = Some(Box::new(f));
        self
    }

    pub fn on_press_event(mut self, f: impl FnMut(&CalendarEvent<T>) + 'static) -> Self {
        self.on_press_event = Some(Box::new(f));
        self
    }

    pub fn on_swipe_horizontal(mut self, f: impl FnMut(HorizontalDirection) + 'static) -> Self {
        self.on_swipe_horizontal = Some(Box::new(f));
        self
    }

    pub fn clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self.now = self.clock.now();
        self
    }

    pub fn target_date(&self) -> NaiveDate {
        self.target_date
    }

    pub fn set_target_date(&mut self, date: NaiveDate) {
        self.target_date = date;
    }

    pub fn events(&self) -> &[CalendarEvent<T>] {
        &self.events
    }

    pub fn set_events(&mut self, events: Vec<CalendarEvent<T>>) {
        self.events = events;
    }

    pub fn event(&self, id: Uuid) -> Option<&CalendarEvent<T>> {
        self.events.iter().find(|event| event.id == id)
    }

    pub fn now(&self) -> NaiveDateTime {
        self.now
    }

    /// Current day from the clock, independent of the frozen "now" highlight
    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    pub fn get_options(&self) -> &BodyOptions {
        &self.options
    }

    pub fn get_theme(&self) -> &Theme {
        &self.theme
    }

    /// Grid of the displayed month
    pub fn grid(&self) -> MonthGrid {
        MonthGrid::new(self.target_date, self.options.week_starts_on)
    }

    /// Event bucket of `date` after truncation
    pub fn day_slot(&self, date: NaiveDate) -> DaySlot {
        DaySlot::collect(&self.events, date, self.options.max_visible_event_count)
    }

    /// Where `date` was drawn in the last frame
    pub fn cell_area(&self, date: NaiveDate) -> Option<Rect> {
        self.hits.iter().find_map(|hit| match hit.target {
            HitTarget::Cell(d) if d == date => Some(hit.area),
            _ => None,
        })
    }

    /// Where the event with `id` was drawn in the last frame, if it was visible
    pub fn event_area(&self, id: Uuid) -> Option<Rect> {
        self.hits.iter().find_map(|hit| match hit.target {
            HitTarget::Event(index) if self.events.get(index).is_some_and(|e| e.id == id) => Some(hit.area),
            _ => None,
        })
    }

    /// Topmost target at a terminal position; event lines sit above their cell
    fn target_at(&self, column: u16, row: u16) -> Option<HitTarget> {
        let position = Position::new(column, row);
        self.hits
            .iter()
            .rev()
            .find(|hit| hit.area.contains(position))
            .map(|hit| hit.target)
    }

    fn press(&mut self, target: HitTarget) -> Action {
        match target {
            HitTarget::Cell(date) => {
                log::debug!("Pressed cell {}", date);
                if let Some(callback) = self.on_press_cell.as_mut() {
                    callback(date);
                }
                Action::PressCell(date)
            }
            HitTarget::Event(index) => {
                let Some(event) = self.events.get(index) else {
                    return Action::None;
                };
                log::debug!("Pressed event '{}' ({})", event.title, event.id);
                if let Some(callback) = self.on_press_event.as_mut() {
                    callback(event);
                }
                Action::PressEvent(event.id)
            }
        }
    }

    fn swipe(&mut self, direction: HorizontalDirection) -> Action {
        log::debug!("Swiped {:?}", direction);
        if let Some(callback) = self.on_swipe_horizontal.as_mut() {
            callback(direction);
        }
        Action::SwipeHorizontal(direction)
    }

    /// Refresh "now" unless the indicator is hidden
    pub fn refresh_now(&mut self) {
        if !self.options.hide_now_indicator {
            self.now = self.clock.now();
        }
    }

    fn is_in_area(&self, column: u16, row: u16) -> bool {
        self.area.contains(Position::new(column, row))
    }

    fn render_cell(&mut self, f: &mut Frame, area: Rect, row: usize, column: usize, date: Option<NaiveDate>) {
        let mut borders = Borders::NONE;
        if row > 0 {
            borders |= Borders::TOP;
        }
        if column > 0 {
            borders |= if self.theme.is_rtl { Borders::RIGHT } else { Borders::LEFT };
        }
        let block = Block::default()
            .borders(borders)
            .border_style(self.theme.border_style());
        let inner = block.inner(area);
        f.render_widget(block, area);

        let Some(date) = date else {
            return;
        };
        self.hits.push(HitRegion {
            area,
            target: HitTarget::Cell(date),
        });

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let number_style = if date == self.now.date() {
            self.theme.now_style()
        } else {
            self.theme.day_number_style()
        };
        let number = Paragraph::new(Line::styled(date.format("%-d").to_string(), number_style))
            .alignment(Alignment::Center);
        f.render_widget(number, Rect { height: 1, ..inner });

        let slot = self.day_slot(date);
        let mut y = inner.y + 1;
        let bottom = inner.y + inner.height;

        for &index in &slot.visible {
            if y >= bottom {
                return;
            }
            let line_area = Rect::new(inner.x, y, inner.width, 1);
            MonthEventCell::new(&self.events[index], &self.theme)
                .cell_style(self.event_cell_style.as_ref())
                .renderer(self.render_event.as_ref())
                .render(f, line_area);
            self.hits.push(HitRegion {
                area: line_area,
                target: HitTarget::Event(index),
            });
            y += 1;
        }

        if let Some(label) = slot.more_label() {
            if y < bottom {
                let label = Paragraph::new(Line::styled(label, self.theme.more_label_style()));
                f.render_widget(label, Rect::new(inner.x, y, inner.width, 1));
            }
        }
    }
}

impl<T> Component for MonthCalendarBody<T> {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char(']') => self.swipe(HorizontalDirection::Left),
            KeyCode::Char('[') => self.swipe(HorizontalDirection::Right),
            KeyCode::Right if key.modifiers.contains(KeyModifiers::SHIFT) => self.swipe(HorizontalDirection::Left),
            KeyCode::Left if key.modifiers.contains(KeyModifiers::SHIFT) => self.swipe(HorizontalDirection::Right),
            _ => Action::None,
        }
    }

    fn handle_mouse_events(&mut self, mouse: MouseEvent) -> Action {
        // Only gestures that start inside the body belong to it
        let starts_gesture = matches!(
            mouse.kind,
            MouseEventKind::Down(_) | MouseEventKind::ScrollLeft | MouseEventKind::ScrollRight
        );
        if starts_gesture && !self.is_in_area(mouse.column, mouse.row) {
            return Action::None;
        }

        match self.pan.handle(&mouse) {
            PanOutcome::Swipe(direction) => self.swipe(direction),
            PanOutcome::Press { origin, release } => {
                let pressed = self.target_at(origin.0, origin.1);
                match pressed {
                    Some(target) if pressed == self.target_at(release.0, release.1) => self.press(target),
                    _ => Action::None,
                }
            }
            PanOutcome::None => Action::None,
        }
    }

    fn on_tick(&mut self) {
        self.refresh_now();
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        self.area = rect;
        self.hits.clear();
        f.render_widget(Block::default().style(self.style), rect);

        let grid = self.grid();
        let rows = Layout::vertical([Constraint::Ratio(1, WEEKS_PER_GRID as u32); WEEKS_PER_GRID]).split(rect);

        for (i, week) in grid.weeks().iter().enumerate() {
            let columns =
                Layout::horizontal([Constraint::Ratio(1, DAYS_PER_WEEK as u32); DAYS_PER_WEEK]).split(rows[i]);
            for (ii, date) in week.iter().enumerate() {
                let column = if self.theme.is_rtl { DAYS_PER_WEEK - 1 - ii } else { ii };
                self.render_cell(f, columns[column], i, ii, *date);
            }
        }
    }
}
