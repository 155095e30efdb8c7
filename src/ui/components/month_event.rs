//! Single event line inside a month day cell.

use crate::calendar::CalendarEvent;
use crate::theme::Theme;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Computes the style of an event line from the event itself
pub type EventCellStyle<T> = Box<dyn Fn(&CalendarEvent<T>) -> Style>;

/// Builds the content of an event line in place of the default title
pub type EventRenderer<T> = Box<dyn Fn(&CalendarEvent<T>, &Theme) -> Line<'static>>;

const ELLIPSIS: char = '…';

/// Renders one event of a day cell on a single line.
///
/// The base style comes from the theme; a per-event style, when given, is
/// patched on top. A custom renderer replaces the default title line.
pub struct MonthEventCell<'a, T> {
    event: &'a CalendarEvent<T>,
    theme: &'a Theme,
    cell_style: Option<&'a EventCellStyle<T>>,
    renderer: Option<&'a EventRenderer<T>>,
}

impl<'a, T> MonthEventCell<'a, T> {
    pub fn new(event: &'a CalendarEvent<T>, theme: &'a Theme) -> Self {
        Self {
            event,
            theme,
            cell_style: None,
            renderer: None,
        }
    }

    pub fn cell_style(mut self, cell_style: Option<&'a EventCellStyle<T>>) -> Self {
        self.cell_style = cell_style;
        self
    }

    pub fn renderer(mut self, renderer: Option<&'a EventRenderer<T>>) -> Self {
        self.renderer = renderer;
        self
    }

    pub fn style(&self) -> Style {
        let base = self.theme.event_style();
        match self.cell_style {
            Some(cell_style) => base.patch(cell_style(self.event)),
            None => base,
        }
    }

    /// Content of the line, truncated with an ellipsis to `width` columns
    pub fn line(&self, width: u16) -> Line<'static> {
        match self.renderer {
            Some(renderer) => renderer(self.event, self.theme),
            None => Line::from(Span::raw(truncate(&self.event.title, width as usize))),
        }
    }

    pub fn render(&self, f: &mut Frame, area: Rect) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let paragraph = Paragraph::new(self.line(area.width)).style(self.style());
        f.render_widget(paragraph, area);
    }
}

/// Cut `text` to at most `width` terminal columns, marking the cut with an ellipsis
pub fn truncate(text: &str, width: usize) -> String {
    if UnicodeWidthStr::width(text) <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }
    // Leave one column for the ellipsis
    let budget = width - 1;
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w > budget {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push(ELLIPSIS);
    out
}
