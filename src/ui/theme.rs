//! Brand palette and the handful of styles built from it

use ratatui::style::{Color, Modifier, Style};

pub const PURPLE_MAIN: Color = Color::Rgb(0x2F, 0x30, 0x5E);
pub const PURPLE_LIGHT: Color = Color::Rgb(0xF1, 0xF3, 0xFF);
pub const PURPLE_DARK: Color = Color::Rgb(0x6B, 0x42, 0xFE);
pub const PURPLE_MIDDLE: Color = Color::Rgb(0xA7, 0x42, 0xE9);
pub const ORANGE: Color = Color::Rgb(0xFD, 0x9D, 0x46);
pub const LIGHT: Color = Color::Rgb(0xF1, 0xE7, 0xFF);
pub const MUTED: Color = Color::DarkGray;

pub fn title() -> Style {
    Style::default()
        .fg(PURPLE_DARK)
        .add_modifier(Modifier::BOLD)
}

pub fn subtitle() -> Style {
    Style::default().fg(PURPLE_LIGHT)
}

pub fn heading() -> Style {
    Style::default().fg(ORANGE).add_modifier(Modifier::BOLD)
}

pub fn label() -> Style {
    Style::default().fg(MUTED)
}

pub fn button() -> Style {
    Style::default()
        .fg(Color::White)
        .bg(PURPLE_MAIN)
        .add_modifier(Modifier::BOLD)
}

pub fn table_header() -> Style {
    Style::default()
        .fg(Color::White)
        .bg(PURPLE_MAIN)
        .add_modifier(Modifier::BOLD)
}

pub fn badge() -> Style {
    Style::default().fg(Color::White).bg(PURPLE_MIDDLE)
}

pub fn action() -> Style {
    Style::default()
        .fg(LIGHT)
        .add_modifier(Modifier::UNDERLINED)
}

pub fn highlight() -> Style {
    Style::default()
        .bg(PURPLE_DARK)
        .fg(Color::White)
        .add_modifier(Modifier::BOLD)
}

pub fn border(active: bool) -> Style {
    if active {
        Style::default().fg(PURPLE_DARK)
    } else {
        Style::default().fg(MUTED)
    }
}
