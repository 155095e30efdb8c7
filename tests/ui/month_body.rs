use crate::common::{at, buffer_lines, date, event};
use chrono::NaiveDateTime;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use moncal::calendar::{CalendarEvent, HorizontalDirection};
use moncal::theme::Theme;
use moncal::ui::components::{BodyOptions, MonthCalendarBody};
use moncal::ui::core::{Action, Component};
use moncal::utils::datetime::{Clock, FixedClock};
use ratatui::{backend::TestBackend, buffer::Buffer, layout::Rect, style::Color, style::Style, Terminal};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

const PRIMARY: Color = Color::Rgb(66, 133, 244);

fn now() -> NaiveDateTime {
    at(2026, 10, 19, 10, 0)
}

fn body(events: Vec<CalendarEvent<()>>) -> MonthCalendarBody<()> {
    MonthCalendarBody::new(date(2026, 10, 19), events).clock(FixedClock(now()))
}

fn draw(body: &mut MonthCalendarBody<()>) -> Buffer {
    let mut terminal = Terminal::new(TestBackend::new(70, 42)).unwrap();
    terminal
        .draw(|f| {
            let area = f.area();
            body.render(f, area);
        })
        .unwrap();
    terminal.backend().buffer().clone()
}

fn cell_text(buffer: &Buffer, area: Rect) -> Vec<String> {
    buffer_lines(buffer)
        .into_iter()
        .skip(area.y as usize)
        .take(area.height as usize)
        .map(|line| {
            line.chars()
                .skip(area.x as usize)
                .take(area.width as usize)
                .collect::<String>()
                .trim_matches(|c| c == ' ' || c == '│' || c == '─')
                .to_string()
        })
        .collect()
}

fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

fn click(body: &mut MonthCalendarBody<()>, column: u16, row: u16) -> Action {
    body.handle_mouse_events(mouse(MouseEventKind::Down(MouseButton::Left), column, row));
    body.handle_mouse_events(mouse(MouseEventKind::Up(MouseButton::Left), column, row))
}

fn center(area: Rect) -> (u16, u16) {
    (area.x + area.width / 2, area.y + area.height / 2)
}

/// Position of the first character of `text` inside `area`
fn find_text(buffer: &Buffer, area: Rect, text: &str) -> Option<(u16, u16)> {
    let lines = buffer_lines(buffer);
    for y in area.y..area.y + area.height {
        let line: Vec<char> = lines[y as usize].chars().collect();
        for x in area.x..area.x + area.width {
            let candidate: String = line.iter().skip(x as usize).take(text.chars().count()).collect();
            if candidate == text {
                return Some((x, y));
            }
        }
    }
    None
}

#[test]
fn test_renders_every_day_of_the_month() {
    let mut body = body(Vec::new());
    let buffer = draw(&mut body);

    for day in 1..=31 {
        let area = body.cell_area(date(2026, 10, day)).expect("day should be drawn");
        let text = cell_text(&buffer, area);
        assert!(
            text.iter().any(|line| line == &day.to_string()),
            "day {} missing from {:?}",
            day,
            text
        );
    }
    assert!(body.cell_area(date(2026, 11, 1)).is_none());
}

#[test]
fn test_today_is_highlighted() {
    let mut body = body(Vec::new());
    let buffer = draw(&mut body);

    let today = body.cell_area(date(2026, 10, 19)).unwrap();
    let (x, y) = find_text(&buffer, today, "19").unwrap();
    assert_eq!(buffer[(x, y)].fg, PRIMARY);

    let other = body.cell_area(date(2026, 10, 18)).unwrap();
    let (x, y) = find_text(&buffer, other, "18").unwrap();
    assert_ne!(buffer[(x, y)].fg, PRIMARY);
}

#[test]
fn test_overflowing_events_collapse_into_label() {
    let events: Vec<_> = ["Alpha", "Beta", "Gamma", "Delta", "Omega"]
        .iter()
        .enumerate()
        .map(|(i, title)| event(title, at(2026, 10, 20, 8 + i as u32, 0)))
        .collect();
    let mut body = body(events);
    let buffer = draw(&mut body);

    let area = body.cell_area(date(2026, 10, 20)).unwrap();
    let text = cell_text(&buffer, area);
    assert!(text.iter().any(|line| line == "Alpha"));
    assert!(text.iter().any(|line| line == "Gamma"));
    assert!(!text.iter().any(|line| line == "Delta"));
    assert!(text.iter().any(|line| line == "+2 more"));

    let hidden = body.events()[3].id;
    assert!(body.event_area(hidden).is_none());
}

#[test]
fn test_long_titles_are_truncated() {
    let mut body = body(vec![event("Quarterly planning review", at(2026, 10, 20, 9, 0))]);
    let buffer = draw(&mut body);

    let id = body.events()[0].id;
    let area = body.event_area(id).unwrap();
    let line = &cell_text(&buffer, area)[0];
    assert!(line.ends_with('…'), "{:?}", line);
    assert!(line.chars().count() <= area.width as usize);
}

#[test]
fn test_event_cell_style_and_custom_renderer() {
    let mut body = body(vec![event("Gym", at(2026, 10, 20, 18, 0))])
        .event_cell_style(|_| Style::default().bg(Color::Red))
        .render_event(|e, _| ratatui::text::Line::from(format!("* {}", e.title)));
    let buffer = draw(&mut body);

    let area = body.event_area(body.events()[0].id).unwrap();
    assert_eq!(cell_text(&buffer, area)[0], "* Gym");
    assert_eq!(buffer[(area.x, area.y)].bg, Color::Red);
}

#[test]
fn test_press_cell_invokes_callback() {
    let pressed = Rc::new(RefCell::new(Vec::new()));
    let sink = pressed.clone();
    let mut body = body(Vec::new()).on_press_cell(move |d| sink.borrow_mut().push(d));
    draw(&mut body);

    let (x, y) = center(body.cell_area(date(2026, 10, 5)).unwrap());
    assert_eq!(click(&mut body, x, y), Action::PressCell(date(2026, 10, 5)));
    assert_eq!(*pressed.borrow(), vec![date(2026, 10, 5)]);
}

#[test]
fn test_press_without_callbacks_still_reports_action() {
    let mut body = body(Vec::new());
    draw(&mut body);

    let (x, y) = center(body.cell_area(date(2026, 10, 12)).unwrap());
    assert_eq!(click(&mut body, x, y), Action::PressCell(date(2026, 10, 12)));
}

#[test]
fn test_press_empty_slot_does_nothing() {
    // The first Sunday of October 2026 belongs to September
    let mut body = body(Vec::new()).on_press_cell(|_| panic!("empty slot pressed"));
    draw(&mut body);

    assert_eq!(click(&mut body, 1, 1), Action::None);
}

#[test]
fn test_press_event_takes_precedence_over_cell() {
    let pressed_cells = Rc::new(Cell::new(0));
    let pressed_events = Rc::new(RefCell::new(Vec::new()));
    let cells = pressed_cells.clone();
    let events = pressed_events.clone();

    let mut body = body(vec![event("Dentist", at(2026, 10, 20, 14, 0))])
        .on_press_cell(move |_| cells.set(cells.get() + 1))
        .on_press_event(move |e| events.borrow_mut().push(e.title.clone()));
    draw(&mut body);

    let id = body.events()[0].id;
    let area = body.event_area(id).unwrap();
    assert_eq!(click(&mut body, area.x + 1, area.y), Action::PressEvent(id));
    assert_eq!(*pressed_events.borrow(), vec!["Dentist".to_string()]);
    assert_eq!(pressed_cells.get(), 0);
}

#[test]
fn test_press_released_in_another_cell_is_ignored() {
    let mut body = body(Vec::new());
    draw(&mut body);

    let (x1, y1) = center(body.cell_area(date(2026, 10, 5)).unwrap());
    let (x2, y2) = center(body.cell_area(date(2026, 10, 12)).unwrap());
    body.handle_mouse_events(mouse(MouseEventKind::Down(MouseButton::Left), x1, y1));
    assert_eq!(
        body.handle_mouse_events(mouse(MouseEventKind::Up(MouseButton::Left), x2, y2)),
        Action::None
    );
}

#[test]
fn test_horizontal_drag_swipes() {
    let swipes = Rc::new(RefCell::new(Vec::new()));
    let sink = swipes.clone();
    let mut body = body(Vec::new()).on_swipe_horizontal(move |d| sink.borrow_mut().push(d));
    draw(&mut body);

    body.handle_mouse_events(mouse(MouseEventKind::Down(MouseButton::Left), 40, 20));
    assert_eq!(
        body.handle_mouse_events(mouse(MouseEventKind::Drag(MouseButton::Left), 30, 20)),
        Action::SwipeHorizontal(HorizontalDirection::Left)
    );
    // Releasing after a swipe is not a press
    assert_eq!(
        body.handle_mouse_events(mouse(MouseEventKind::Up(MouseButton::Left), 30, 20)),
        Action::None
    );

    body.handle_mouse_events(mouse(MouseEventKind::Down(MouseButton::Left), 20, 20));
    assert_eq!(
        body.handle_mouse_events(mouse(MouseEventKind::Drag(MouseButton::Left), 35, 21)),
        Action::SwipeHorizontal(HorizontalDirection::Right)
    );

    assert_eq!(
        *swipes.borrow(),
        vec![HorizontalDirection::Left, HorizontalDirection::Right]
    );
}

#[test]
fn test_gestures_outside_body_are_ignored() {
    let mut body = body(Vec::new());
    let mut terminal = Terminal::new(TestBackend::new(70, 44)).unwrap();
    terminal
        .draw(|f| body.render(f, Rect::new(0, 2, 70, 42)))
        .unwrap();

    assert_eq!(
        body.handle_mouse_events(mouse(MouseEventKind::ScrollRight, 10, 0)),
        Action::None
    );
    assert_eq!(
        body.handle_mouse_events(mouse(MouseEventKind::ScrollRight, 10, 10)),
        Action::SwipeHorizontal(HorizontalDirection::Left)
    );
}

#[test]
fn test_keys_navigate_months() {
    let mut body = body(Vec::new());
    assert_eq!(
        body.handle_key_events(KeyEvent::new(KeyCode::Char(']'), KeyModifiers::NONE)),
        Action::SwipeHorizontal(HorizontalDirection::Left)
    );
    assert_eq!(
        body.handle_key_events(KeyEvent::new(KeyCode::Left, KeyModifiers::SHIFT)),
        Action::SwipeHorizontal(HorizontalDirection::Right)
    );
    assert_eq!(
        body.handle_key_events(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE)),
        Action::None
    );
}

#[test]
fn test_rtl_reverses_columns() {
    let mut ltr = body(Vec::new());
    draw(&mut ltr);
    assert!(ltr.cell_area(date(2026, 10, 1)).unwrap().x < ltr.cell_area(date(2026, 10, 3)).unwrap().x);

    let theme = Theme {
        is_rtl: true,
        ..Theme::default()
    };
    let mut rtl = body(Vec::new()).theme(theme);
    draw(&mut rtl);
    assert!(rtl.cell_area(date(2026, 10, 1)).unwrap().x > rtl.cell_area(date(2026, 10, 3)).unwrap().x);
}

#[test]
fn test_week_start_moves_first_day() {
    let mut body = body(Vec::new()).options(BodyOptions {
        week_starts_on: chrono::Weekday::Thu,
        ..BodyOptions::default()
    });
    draw(&mut body);

    let first = body.cell_area(date(2026, 10, 1)).unwrap();
    assert_eq!((first.x, first.y), (0, 0));
}

struct SharedClock(Rc<Cell<NaiveDateTime>>);

impl Clock for SharedClock {
    fn now(&self) -> NaiveDateTime {
        self.0.get()
    }
}

#[test]
fn test_now_refreshes_on_tick_unless_hidden() {
    let time = Rc::new(Cell::new(now()));

    let mut shown = MonthCalendarBody::<()>::new(date(2026, 10, 19), Vec::new()).clock(SharedClock(time.clone()));
    let mut hidden = MonthCalendarBody::<()>::new(date(2026, 10, 19), Vec::new())
        .options(BodyOptions {
            hide_now_indicator: true,
            ..BodyOptions::default()
        })
        .clock(SharedClock(time.clone()));

    time.set(at(2026, 10, 20, 0, 1));
    shown.on_tick();
    hidden.on_tick();

    assert_eq!(shown.now(), at(2026, 10, 20, 0, 1));
    assert_eq!(hidden.now(), now());
}
