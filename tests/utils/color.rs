use moncal::utils::color::{palette_color, parse_color};
use ratatui::style::Color;

#[test]
fn test_palette_names_resolve() {
    assert_eq!(parse_color("primary").unwrap(), Color::Rgb(66, 133, 244));
    assert_eq!(parse_color("GRAY_200").unwrap(), palette_color("gray_200").unwrap());
}

#[test]
fn test_ratatui_colour_strings_resolve() {
    assert_eq!(parse_color("red").unwrap(), Color::Red);
    assert_eq!(parse_color("#1a73e8").unwrap(), Color::Rgb(26, 115, 232));
    assert_eq!(parse_color("reset").unwrap(), Color::Reset);
}

#[test]
fn test_unknown_colour_is_an_error() {
    assert!(parse_color("chartreuse-ish").is_err());
}
