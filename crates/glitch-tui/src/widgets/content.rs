//! Theme reveal shown once the presentation settles.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

use glitch_core::Theme;

use crate::theme::styles;

/// Widest the description may run before wrapping
const DESCRIPTION_WIDTH: u16 = 60;

const DIVIDER_WIDTH: u16 = 24;

pub const RECALIBRATE_HINT: &str = "[ R ] RECALIBRATE";

/// Name, divider, description and the recalibrate hint, centred.
pub struct ThemeContent<'a> {
    theme: &'a Theme,
}

impl<'a> ThemeContent<'a> {
    pub fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }

    fn lines(&self, width: u16) -> Vec<Line<'static>> {
        let theme = self.theme;
        let mut lines = vec![
            Line::from(Span::styled(
                spaced(&theme.name.to_uppercase()),
                styles::text_bold(theme),
            )),
            Line::from(Span::styled(
                "─".repeat(DIVIDER_WIDTH.min(width) as usize),
                styles::sub_text(theme),
            )),
            Line::default(),
        ];

        let wrap_width = DESCRIPTION_WIDTH.min(width) as usize;
        lines.extend(
            wrap_words(theme.description, wrap_width)
                .into_iter()
                .map(|row| Line::from(Span::styled(row, styles::text(theme)))),
        );

        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            RECALIBRATE_HINT,
            styles::sub_text(theme),
        )));
        lines
    }
}

impl Widget for ThemeContent<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let lines = self.lines(area.width);
        let height = (lines.len() as u16).min(area.height);
        let top = area.y + (area.height - height) / 2;
        let inner = Rect::new(area.x, top, area.width, height);

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(inner, buf);
    }
}

/// Letter-space a heading: `VOID` becomes `V O I D`
fn spaced(text: &str) -> String {
    let mut out = String::with_capacity(text.len() * 2);
    for (i, ch) in text.chars().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push(ch);
    }
    out
}

/// Greedy word wrap by display width. Words wider than `width` get a row of
/// their own and are clipped by the renderer.
pub fn wrap_words(text: &str, width: usize) -> Vec<String> {
    let mut rows = Vec::new();
    if width == 0 {
        return rows;
    }

    let mut current = String::new();
    for word in text.split_whitespace() {
        let needed = if current.is_empty() {
            word.width()
        } else {
            current.width() + 1 + word.width()
        };
        if needed > width && !current.is_empty() {
            rows.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        rows.push(current);
    }
    rows
}
