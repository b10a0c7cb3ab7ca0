//! "Theory & Intent" modal explaining the active theme.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use glitch_core::Theme;

use super::content::wrap_words;
use super::modal_overlay::{centered_rect, dim_background};
use crate::theme::{palette, styles};

pub const HEADING: &str = "T H E O R Y  &  I N T E N T";
pub const CLOSE_HINT: &str = "[ ESC TO CLOSE ]";

/// Widest the meaning text may run before wrapping
const PANEL_WIDTH: u16 = 56;

/// Dims the whole screen, then centres the meaning panel.
pub struct MeaningOverlay<'a> {
    theme: &'a Theme,
}

impl<'a> MeaningOverlay<'a> {
    pub fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }

    fn lines(&self, width: u16) -> Vec<Line<'static>> {
        let theme = self.theme;
        let heading = Style::default()
            .fg(styles::flatten(
                theme.text_color.with_alpha(theme.text_color.alpha * 0.5),
                theme.background.centre.scale(1.0 - palette::SCRIM_SHADE),
            ))
            .add_modifier(Modifier::BOLD);

        let mut lines = vec![Line::from(Span::styled(HEADING, heading)), Line::default()];
        lines.extend(
            wrap_words(theme.meaning, width as usize)
                .into_iter()
                .map(|row| Line::from(Span::styled(row, styles::text(theme)))),
        );
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            "──────",
            Style::default().fg(palette::PILL_BORDER),
        )));
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            CLOSE_HINT,
            Style::default().fg(palette::CLOSE_HINT),
        )));
        lines
    }
}

impl Widget for MeaningOverlay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        dim_background(buf, area, palette::SCRIM_SHADE);

        let width = PANEL_WIDTH.min(area.width.saturating_sub(4)).max(1);
        let lines = self.lines(width);
        let panel = centered_rect(width, lines.len() as u16, area);

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(panel, buf);
    }
}
