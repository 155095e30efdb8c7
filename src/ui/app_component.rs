use crate::calendar::{month_after_swipe, CalendarEvent, EventDetails};
use crate::config::Config;
use crate::constants::{HEADER_MONTH_FORMAT, STATUS_HINT};
use crate::logger::Logger;
use crate::theme::Theme;
use crate::ui::components::{BodyOptions, MonthCalendarBody};
use crate::ui::core::{actions::Action, event_handler::EventType, Component};
use crate::utils::datetime::{week_days, weekday_short_name, Clock, SystemClock};
use anyhow::Result;
use chrono::NaiveDate;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Viewer state separate from UI concerns
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub selected_date: Option<NaiveDate>,
    pub status_message: Option<String>,
}

impl AppState {
    /// Clear any transient messages
    pub fn clear_messages(&mut self) {
        self.status_message = None;
    }
}

/// Hosts the month body with a month header, weekday labels and a status line
pub struct AppComponent {
    body: MonthCalendarBody<EventDetails>,
    state: AppState,
    logger: Logger,
    should_quit: bool,
}

impl AppComponent {
    pub fn new(config: &Config, events: Vec<CalendarEvent<EventDetails>>, target_date: NaiveDate) -> Result<Self> {
        Self::with_clock(config, events, target_date, SystemClock)
    }

    pub fn with_clock(
        config: &Config,
        events: Vec<CalendarEvent<EventDetails>>,
        target_date: NaiveDate,
        clock: impl Clock + 'static,
    ) -> Result<Self> {
        let body = MonthCalendarBody::new(target_date, events)
            .options(BodyOptions::from_config(config)?)
            .theme(Theme::from_config(&config.theme)?)
            .clock(clock);

        Ok(Self {
            body,
            state: AppState::default(),
            logger: Logger::global().clone(),
            should_quit: false,
        })
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn body(&self) -> &MonthCalendarBody<EventDetails> {
        &self.body
    }

    pub fn target_date(&self) -> NaiveDate {
        self.body.target_date()
    }

    fn handle_global_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
            KeyCode::Char('t') => Action::GoToToday,
            _ => Action::None,
        }
    }

    /// Apply an action that reached the top of the component tree
    pub fn handle_app_action(&mut self, action: Action) -> Action {
        match action {
            Action::SwipeHorizontal(direction) => {
                let next = month_after_swipe(self.body.target_date(), direction);
                self.body.set_target_date(next);
                self.state.clear_messages();
                Action::None
            }
            Action::PressCell(date) => {
                let count = self.body.day_slot(date).total();
                self.state.selected_date = Some(date);
                self.state.status_message = Some(format!(
                    "{}: {} event{}",
                    date.format("%A %-d %B %Y"),
                    count,
                    if count == 1 { "" } else { "s" }
                ));
                Action::None
            }
            Action::PressEvent(id) => {
                self.state.status_message = self.body.event(id).map(|event| {
                    let mut message = format!("{} · {}", event.title, event.start.format("%H:%M"));
                    if let Some(location) = &event.payload.location {
                        message.push_str(&format!(" @ {}", location));
                    }
                    message
                });
                Action::None
            }
            Action::GoToToday => {
                let today = self.body.today();
                self.body.set_target_date(today);
                self.state.selected_date = Some(today);
                self.state.clear_messages();
                Action::None
            }
            Action::Quit => {
                self.should_quit = true;
                Action::Quit
            }
            Action::None => Action::None,
        }
    }

    pub fn handle_event(&mut self, event_type: EventType) -> Result<()> {
        let action = match event_type {
            EventType::Mouse(mouse) => self.body.handle_mouse_events(mouse),
            EventType::Key(key) => {
                let body_action = self.body.handle_key_events(key);
                if !body_action.is_none() {
                    body_action
                } else {
                    self.handle_global_key(key)
                }
            }
            EventType::Tick => {
                self.body.on_tick();
                Action::None
            }
            EventType::Resize(_, _) | EventType::Other => Action::None,
        };

        // Process action through component hierarchy
        let action = self.body.update(action);
        self.handle_app_action(action);

        Ok(())
    }

    fn render_header(&self, f: &mut Frame, rect: Rect) {
        let title = self.body.target_date().format(HEADER_MONTH_FORMAT).to_string();
        let header = Paragraph::new(Line::styled(
            title,
            Style::default()
                .fg(self.body.get_theme().palette.primary)
                .add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center);
        f.render_widget(header, rect);
    }

    fn render_weekdays(&self, f: &mut Frame, rect: Rect) {
        let mut days = week_days(self.body.get_options().week_starts_on);
        if self.body.get_theme().is_rtl {
            days.reverse();
        }
        let columns = Layout::horizontal([Constraint::Ratio(1, 7); 7]).split(rect);
        for (area, day) in columns.iter().zip(days) {
            let label = Paragraph::new(Line::styled(
                weekday_short_name(day),
                Style::default().add_modifier(Modifier::DIM),
            ))
            .alignment(Alignment::Center);
            f.render_widget(label, *area);
        }
    }

    fn render_status(&self, f: &mut Frame, rect: Rect) {
        let text = self
            .state
            .status_message
            .clone()
            .or_else(|| self.logger.latest())
            .unwrap_or_else(|| STATUS_HINT.to_string());
        f.render_widget(
            Paragraph::new(Line::from(Span::styled(text, Style::default().add_modifier(Modifier::DIM)))),
            rect,
        );
    }
}

impl Component for AppComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        let action = self.body.handle_key_events(key);
        if action.is_none() {
            self.handle_global_key(key)
        } else {
            action
        }
    }

    fn update(&mut self, action: Action) -> Action {
        let action = self.body.update(action);
        self.handle_app_action(action)
    }

    fn on_tick(&mut self) {
        self.body.on_tick();
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let chunks = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(rect);

        self.render_header(f, chunks[0]);
        self.render_weekdays(f, chunks[1]);
        self.body.render(f, chunks[2]);
        self.render_status(f, chunks[3]);
    }
}
