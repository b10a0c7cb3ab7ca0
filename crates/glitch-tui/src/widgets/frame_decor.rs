//! Screen edge decorations: accent glow, corner brackets and the two
//! chapter labels.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

use glitch_core::{Theme, ThemeIndex};

use crate::animation;
use crate::theme::{palette, styles};

/// Bracket inset from the screen edge (columns, rows)
const BRACKET_INSET: (u16, u16) = (2, 1);

/// Horizontal arm length of a bracket in cells
const BRACKET_ARM: u16 = 3;

/// Accent ring along the outermost cells plus the four corner brackets.
pub struct FrameDecor<'a> {
    theme: &'a Theme,
}

impl<'a> FrameDecor<'a> {
    pub fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }

    fn render_edge_glow(&self, area: Rect, buf: &mut Buffer) {
        let accent = self.theme.accent_color;
        let glow = accent.with_alpha(accent.alpha * palette::EDGE_GLOW_ALPHA);

        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                let on_edge = y == area.top()
                    || y == area.bottom() - 1
                    || x == area.left()
                    || x == area.right() - 1;
                if !on_edge {
                    continue;
                }
                if let Some(cell) = buf.cell_mut((x, y)) {
                    let under = styles::rgb_of(cell.bg).unwrap_or(palette::SCREEN_BG);
                    cell.set_bg(styles::color(glow.over(under)));
                }
            }
        }
    }

    fn render_brackets(&self, area: Rect, buf: &mut Buffer) {
        let (inset_x, inset_y) = BRACKET_INSET;
        let min_width = 2 * (inset_x + BRACKET_ARM);
        let min_height = 2 * (inset_y + 2);
        if area.width < min_width || area.height < min_height {
            return;
        }

        let style = styles::accent(self.theme).add_modifier(Modifier::BOLD);
        let left = area.left() + inset_x;
        let right = area.right() - 1 - inset_x;
        let top = area.top() + inset_y;
        let bottom = area.bottom() - 1 - inset_y;

        // (corner x, corner y, arm direction, leg direction)
        let corners = [
            (left, top, '┌', 1i32, 1i32),
            (right, top, '┐', -1, 1),
            (left, bottom, '└', 1, -1),
            (right, bottom, '┘', -1, -1),
        ];

        for (x, y, glyph, arm_dir, leg_dir) in corners {
            put(buf, x, y, glyph, style);
            for step in 1..BRACKET_ARM as i32 {
                put(buf, offset(x, arm_dir * step), y, '─', style);
            }
            put(buf, x, offset(y, leg_dir), '│', style);
        }
    }
}

impl Widget for FrameDecor<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        self.render_edge_glow(area, buf);
        self.render_brackets(area, buf);
    }
}

fn offset(value: u16, delta: i32) -> u16 {
    (value as i32 + delta).clamp(0, u16::MAX as i32) as u16
}

/// Write one glyph, keeping the background already painted underneath
fn put(buf: &mut Buffer, x: u16, y: u16, glyph: char, style: Style) {
    if let Some(cell) = buf.cell_mut((x, y)) {
        cell.set_char(glyph).set_style(style);
    }
}

/// `● CHAPTER_xx: ...` in the top-left corner; the dot pulses.
pub struct StatusLabel<'a> {
    theme: &'a Theme,
    frame: u64,
}

impl<'a> StatusLabel<'a> {
    pub fn new(theme: &'a Theme, frame: u64) -> Self {
        Self { theme, frame }
    }
}

impl Widget for StatusLabel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let mut dot = Style::default().fg(palette::STATUS_DOT);
        if animation::pulse_dimmed(self.frame) {
            dot = dot.add_modifier(Modifier::DIM);
        }
        let line = Line::from(vec![
            Span::styled("● ", dot),
            Span::styled(self.theme.chapter_label, styles::edge_label(self.theme)),
        ]);
        buf.set_line(area.x, area.y, &line, area.width);
    }
}

/// `P-00n // AUTH: VERIFIED` in the bottom-left corner.
pub struct FooterLabel<'a> {
    theme: &'a Theme,
    index: ThemeIndex,
}

impl<'a> FooterLabel<'a> {
    pub fn new(theme: &'a Theme, index: ThemeIndex) -> Self {
        Self { theme, index }
    }
}

impl Widget for FooterLabel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let text = footer_text(self.index);
        buf.set_stringn(
            area.x,
            area.y,
            &text,
            area.width as usize,
            styles::edge_label(self.theme),
        );
    }
}

pub fn footer_text(index: ThemeIndex) -> String {
    format!("P-00{} // AUTH: VERIFIED", index.ordinal())
}
