use crate::common::{at, event};
use moncal::theme::Theme;
use moncal::ui::components::month_event::{truncate, EventCellStyle, MonthEventCell};
use ratatui::backend::TestBackend;
use ratatui::style::{Color, Style};
use ratatui::Terminal;

#[test]
fn test_truncate() {
    assert_eq!(truncate("Lunch", 10), "Lunch");
    assert_eq!(truncate("Lunch", 5), "Lunch");
    assert_eq!(truncate("Lunch with Sam", 6), "Lunch…");
    assert_eq!(truncate("Lunch", 0), "");
}

#[test]
fn test_default_line_uses_title_and_theme_style() {
    let theme = Theme::default();
    let e = event("Lunch with Sam", at(2026, 10, 20, 12, 0));
    let cell = MonthEventCell::new(&e, &theme);

    assert_eq!(cell.line(6).to_string(), "Lunch…");
    assert_eq!(cell.style(), theme.event_style());
}

#[test]
fn test_cell_style_is_patched_over_theme() {
    let theme = Theme::default();
    let e = event("Gym", at(2026, 10, 20, 18, 0));
    let style: EventCellStyle<()> = Box::new(|_| Style::default().fg(Color::Yellow));
    let cell = MonthEventCell::new(&e, &theme).cell_style(Some(&style));

    let resolved = cell.style();
    assert_eq!(resolved.fg, Some(Color::Yellow));
    assert_eq!(resolved.bg, Some(theme.palette.event_background));
}

#[test]
fn test_truncate_counts_display_columns() {
    // Each of these characters is two columns wide
    assert_eq!(truncate("会議会議会議会議", 9), "会議会議…");
    assert_eq!(truncate("会議会議会議会議", 8), "会議会…");
    assert_eq!(truncate("会議", 4), "会議");
    assert_eq!(truncate("会議", 1), "…");
}

#[test]
fn test_wide_title_keeps_ellipsis_when_rendered() {
    let theme = Theme::default();
    let e = event("会議会議会議会議", at(2026, 10, 20, 9, 0));
    let backend = TestBackend::new(9, 1);
    let mut terminal = Terminal::new(backend).unwrap();

    terminal
        .draw(|f| {
            let area = f.area();
            MonthEventCell::new(&e, &theme).render(f, area);
        })
        .unwrap();

    let buffer = terminal.backend().buffer();
    assert_eq!(buffer[(0, 0)].symbol(), "会");
    assert_eq!(buffer[(8, 0)].symbol(), "…");
}
