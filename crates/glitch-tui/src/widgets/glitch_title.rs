//! The glitching `状態` title with its two chromatic aberration layers.

use ratatui::{buffer::Buffer, layout::Rect, style::Modifier, widgets::Widget};
use unicode_width::UnicodeWidthStr;

use glitch_core::Theme;

use crate::animation;
use crate::theme::styles;

pub const TITLE: &str = "状 態";
pub const CAPTION: &str = "[ STATE / CONDITION ]";

/// Shown while the presentation is glitching.
pub struct GlitchTitle<'a> {
    theme: &'a Theme,
    frame: u64,
}

impl<'a> GlitchTitle<'a> {
    pub fn new(theme: &'a Theme, frame: u64) -> Self {
        Self { theme, frame }
    }
}

impl Widget for GlitchTitle<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let title_width = TITLE.width() as u16;
        let centre_x = area.x + area.width.saturating_sub(title_width) / 2;
        let title_y = area.y + area.height.saturating_sub(3) / 2;
        let shift = animation::skew(self.frame);

        // Back to front: secondary, primary, then the title itself
        let layers = [
            (animation::jitter(self.frame, true), styles::glitch_secondary(self.theme)),
            (animation::jitter(self.frame, false), styles::glitch_primary(self.theme)),
            ((0, 0), styles::text_bold(self.theme)),
        ];
        for ((dx, dy), style) in layers {
            let x = nudge(centre_x, dx + shift, area.x, area.right().saturating_sub(title_width));
            let y = nudge(title_y, dy, area.y, area.bottom().saturating_sub(1));
            let max_width = area.right().saturating_sub(x) as usize;
            buf.set_stringn(x, y, TITLE, max_width, style);
        }

        let caption_y = title_y + 2;
        if caption_y < area.bottom() {
            let caption_width = (CAPTION.width() as u16).min(area.width);
            let x = area.x + (area.width - caption_width) / 2;
            let mut style = styles::sub_text(self.theme);
            if animation::pulse_dimmed(self.frame) {
                style = style.add_modifier(Modifier::DIM);
            }
            buf.set_stringn(x, caption_y, CAPTION, caption_width as usize, style);
        }
    }
}

/// Offset `value` by `delta`, staying within `[min, max]`
fn nudge(value: u16, delta: i16, min: u16, max: u16) -> u16 {
    let max = max.max(min);
    (value as i32 + delta as i32).clamp(min as i32, max as i32) as u16
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use glitch_core::ThemeIndex;
    use ratatui::style::Color;

    fn rain() -> &'static Theme {
        ThemeIndex::new(1).unwrap().get()
    }

    #[test]
    fn test_title_and_caption_render() {
        let mut term = TestTerminal::with_size(40, 9);
        term.render_widget(GlitchTitle::new(rain(), 0), term.area());

        assert!(term.buffer_contains("状"));
        assert!(term.buffer_contains("態"));
        assert!(term.buffer_contains(CAPTION));
    }

    #[test]
    fn test_title_centred_on_frame_zero() {
        let mut term = TestTerminal::with_size(41, 9);
        term.render_widget(GlitchTitle::new(rain(), 0), term.area());
        // (41 - 5) / 2 = 18, (9 - 3) / 2 = 3
        assert_eq!(term.cell_at(18, 3), Some("状"));
        let fg = term.cell(18, 3).map(|c| c.fg);
        assert_eq!(fg, Some(styles::text(rain()).fg.unwrap_or(Color::Reset)));
    }

    #[test]
    fn test_aberration_layers_visible_when_jittered() {
        let theme = rain();
        let mut term = TestTerminal::with_size(41, 9);
        // Frame 1: primary layer at (-1, +1)
        term.render_widget(GlitchTitle::new(theme, 1), term.area());
        assert_eq!(term.cell_at(17, 4), Some("状"));
        assert_eq!(
            term.cell(17, 4).map(|c| c.fg),
            Some(styles::color(theme.glitch_primary))
        );
    }

    #[test]
    fn test_caption_skipped_when_no_room() {
        let mut term = TestTerminal::with_size(40, 2);
        term.render_widget(GlitchTitle::new(rain(), 0), term.area());
        assert!(!term.buffer_contains("CONDITION"));
    }

    #[test]
    fn test_narrow_area_does_not_panic() {
        let mut term = TestTerminal::with_size(3, 1);
        term.render_widget(GlitchTitle::new(rain(), 59), term.area());
        term.render_widget(GlitchTitle::new(rain(), 0), Rect::new(0, 0, 0, 0));
    }

    #[test]
    fn test_nudge_clamps() {
        assert_eq!(nudge(5, -10, 2, 20), 2);
        assert_eq!(nudge(5, 30, 2, 20), 20);
        assert_eq!(nudge(5, 1, 2, 20), 6);
        assert_eq!(nudge(5, 1, 8, 3), 8);
    }
}
