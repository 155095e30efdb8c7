use crate::error::CalendarError;
use ratatui::style::Color;
use std::str::FromStr;

/// Resolve a configured colour name to a terminal colour.
///
/// Accepts the palette names below first, then anything ratatui can parse
/// (`"red"`, `"#1a73e8"`, `"42"` for indexed colours).
pub fn parse_color(name: &str) -> Result<Color, CalendarError> {
    if let Some(color) = palette_color(name) {
        return Ok(color);
    }
    Color::from_str(name).map_err(|_| CalendarError::InvalidColor(name.to_string()))
}

/// Named palette colours
#[must_use]
pub fn palette_color(name: &str) -> Option<Color> {
    let color = match name.to_lowercase().as_str() {
        "primary" => Color::Rgb(66, 133, 244),
        "gray_100" | "grey_100" => Color::Rgb(245, 245, 245),
        "gray_200" | "grey_200" => Color::Rgb(224, 224, 224),
        "gray_500" | "grey_500" => Color::Rgb(158, 158, 158),
        "gray_800" | "grey_800" => Color::Rgb(66, 66, 66),
        "event_blue" => Color::Rgb(26, 115, 232),
        _ => return None,
    };
    Some(color)
}
