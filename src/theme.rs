//! Colours and layout direction for the calendar components.

use crate::config::ThemeConfig;
use crate::error::CalendarError;
use crate::utils::color::parse_color;
use ratatui::style::{Color, Modifier, Style};

/// Resolved colour palette
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    pub primary: Color,
    pub border: Color,
    pub text: Color,
    pub event_foreground: Color,
    pub event_background: Color,
    pub more_label: Color,
}

/// Theme shared by the month body and its children
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Lay weekday columns out right to left
    pub is_rtl: bool,
    pub palette: Palette,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            is_rtl: false,
            palette: Palette {
                primary: Color::Rgb(66, 133, 244),
                border: Color::Rgb(224, 224, 224),
                text: Color::Reset,
                event_foreground: Color::White,
                event_background: Color::Rgb(26, 115, 232),
                more_label: Color::Reset,
            },
        }
    }
}

impl Theme {
    pub fn from_config(config: &ThemeConfig) -> Result<Self, CalendarError> {
        Ok(Self {
            is_rtl: config.rtl,
            palette: Palette {
                primary: parse_color(&config.primary)?,
                border: parse_color(&config.border)?,
                text: parse_color(&config.text)?,
                event_foreground: parse_color(&config.event_foreground)?,
                event_background: parse_color(&config.event_background)?,
                more_label: parse_color(&config.more_label)?,
            },
        })
    }

    pub fn day_number_style(&self) -> Style {
        Style::default().fg(self.palette.text)
    }

    /// Day number of the current date
    pub fn now_style(&self) -> Style {
        Style::default()
            .fg(self.palette.primary)
            .add_modifier(Modifier::BOLD)
    }

    pub fn border_style(&self) -> Style {
        Style::default().fg(self.palette.border)
    }

    pub fn event_style(&self) -> Style {
        Style::default()
            .fg(self.palette.event_foreground)
            .bg(self.palette.event_background)
    }

    pub fn more_label_style(&self) -> Style {
        Style::default()
            .fg(self.palette.more_label)
            .add_modifier(Modifier::BOLD)
    }
}
