//! Semantic style builders derived from the active [`Theme`].
//!
//! Translucent theme colours are flattened against the gradient colour they
//! are most likely to sit on: the centre for stage text, the edge for frame
//! decorations.

use glitch_core::{Rgb, Rgba, Theme};
use ratatui::style::{Color, Modifier, Style};

use super::palette;

pub fn color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.r, rgb.g, rgb.b)
}

/// Opaque channels of a cell colour, if it has them.
pub fn rgb_of(color: Color) -> Option<Rgb> {
    match color {
        Color::Rgb(r, g, b) => Some(Rgb::new(r, g, b)),
        Color::Black => Some(Rgb::BLACK),
        Color::White => Some(Rgb::WHITE),
        _ => None,
    }
}

/// Flatten a translucent colour onto `background`.
pub fn flatten(rgba: Rgba, background: Rgb) -> Color {
    color(rgba.over(background))
}

// --- Text styles ---
pub fn text(theme: &Theme) -> Style {
    Style::default().fg(flatten(theme.text_color, theme.background.centre))
}

pub fn text_bold(theme: &Theme) -> Style {
    text(theme).add_modifier(Modifier::BOLD)
}

pub fn sub_text(theme: &Theme) -> Style {
    Style::default().fg(flatten(theme.sub_text_color, theme.background.centre))
}

/// Secondary text near the screen edges (status and footer labels)
pub fn edge_label(theme: &Theme) -> Style {
    Style::default().fg(flatten(theme.sub_text_color, theme.background.edge))
}

// --- Accent styles ---
pub fn accent(theme: &Theme) -> Style {
    Style::default().fg(flatten(theme.accent_color, theme.background.edge))
}

// --- Glitch layers ---
pub fn glitch_primary(theme: &Theme) -> Style {
    Style::default()
        .fg(color(theme.glitch_primary))
        .add_modifier(Modifier::BOLD)
}

pub fn glitch_secondary(theme: &Theme) -> Style {
    Style::default()
        .fg(color(theme.glitch_secondary))
        .add_modifier(Modifier::BOLD)
}

// --- Buttons ---
pub fn button(theme: &Theme) -> Style {
    text(theme)
}

/// Pressed button: text colour becomes the background
pub fn button_pressed(theme: &Theme) -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(flatten(theme.text_color, theme.background.centre))
        .add_modifier(Modifier::BOLD)
}

// --- Picker pills ---
pub fn pill_active() -> Style {
    Style::default()
        .fg(palette::PILL_ACTIVE_FG)
        .bg(palette::PILL_ACTIVE_BG)
        .add_modifier(Modifier::BOLD)
}

pub fn pill_inactive() -> Style {
    Style::default().fg(palette::PILL_INACTIVE_FG)
}

pub fn pill_cursor(theme: &Theme) -> Style {
    text(theme).add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
}
