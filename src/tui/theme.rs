//! Shared colors for the site shell. Brass on charcoal, the shop's sign.

use ratatui::style::{Color, Modifier, Style};

pub const ACCENT: Color = Color::Rgb(201, 162, 39);
pub const BODY: Color = Color::Gray;

pub fn accent() -> Style {
    Style::default().fg(ACCENT)
}

pub fn muted() -> Style {
    Style::default().fg(Color::DarkGray)
}

pub fn link() -> Style {
    Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::UNDERLINED)
}

pub fn key_cap() -> Style {
    Style::default().fg(Color::Black).bg(ACCENT)
}

pub fn selected() -> Style {
    Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD | Modifier::REVERSED)
}

pub fn success() -> Style {
    Style::default().fg(Color::Green)
}

pub fn failure() -> Style {
    Style::default().fg(Color::Red)
}

/// Border for an input or card, brighter when it has focus.
pub fn border(focused: bool) -> Style {
    if focused {
        accent()
    } else {
        muted()
    }
}
