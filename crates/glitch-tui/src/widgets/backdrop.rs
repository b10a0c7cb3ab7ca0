//! Full-screen background: radial gradient, vignette and scanlines.

use ratatui::{buffer::Buffer, layout::Rect, style::Style, widgets::Widget};

use glitch_core::{Rgb, Theme};

use crate::theme::{palette, styles};

/// Horizontal pixels covered by one cell
pub const CELL_WIDTH_PX: f32 = 8.0;

/// Vertical pixels covered by one cell
pub const CELL_HEIGHT_PX: f32 = 16.0;

/// Paints every cell background of the area.
pub struct Backdrop<'a> {
    theme: &'a Theme,
    scanlines: bool,
    vignette: bool,
}

impl<'a> Backdrop<'a> {
    pub fn new(theme: &'a Theme) -> Self {
        Self {
            theme,
            scanlines: true,
            vignette: true,
        }
    }

    pub fn scanlines(mut self, enabled: bool) -> Self {
        self.scanlines = enabled;
        self
    }

    pub fn vignette(mut self, enabled: bool) -> Self {
        self.vignette = enabled;
        self
    }

    /// Final background colour of the cell at `(col, row)` relative to the area
    pub fn shade(&self, area: Rect, col: u16, row: u16) -> Rgb {
        let distance = normalized_distance(area, col, row);
        let mut rgb = self.theme.background.sample(distance);
        if self.vignette {
            rgb = rgb.scale(1.0 - palette::VIGNETTE_SHADE * distance);
        }
        if self.scanlines && row % 2 == 1 {
            rgb = rgb.scale(1.0 - palette::SCANLINE_SHADE);
        }
        rgb
    }
}

impl Widget for Backdrop<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        for row in 0..area.height {
            for col in 0..area.width {
                let bg = styles::color(self.shade(area, col, row));
                if let Some(cell) = buf.cell_mut((area.x + col, area.y + row)) {
                    cell.set_char(' ');
                    cell.set_style(Style::default().bg(bg));
                }
            }
        }
    }
}

/// Distance of a cell centre from the area centre in pixel space,
/// normalised so the farthest corner is 1.0.
pub fn normalized_distance(area: Rect, col: u16, row: u16) -> f32 {
    let half_w = area.width as f32 * CELL_WIDTH_PX / 2.0;
    let half_h = area.height as f32 * CELL_HEIGHT_PX / 2.0;
    let radius = half_w.hypot(half_h);
    if radius == 0.0 {
        return 0.0;
    }

    let px = (col as f32 + 0.5) * CELL_WIDTH_PX;
    let py = (row as f32 + 0.5) * CELL_HEIGHT_PX;
    ((px - half_w).hypot(py - half_h) / radius).clamp(0.0, 1.0)
}
