//! Short-lived noise bars drawn over the stage while glitching.

use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

use glitch_app::{NoiseBlock, NoiseField};
use glitch_core::Rgba;

use super::backdrop::CELL_WIDTH_PX;
use crate::theme::{palette, styles};

/// Tints cell backgrounds under every live block.
pub struct NoiseLayer<'a> {
    noise: &'a NoiseField,
    opacity: f32,
}

impl<'a> NoiseLayer<'a> {
    pub fn new(noise: &'a NoiseField, opacity: f32) -> Self {
        Self { noise, opacity }
    }
}

impl Widget for NoiseLayer<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 || self.opacity <= 0.0 {
            return;
        }

        for block in self.noise.blocks() {
            let bar = block_cells(block, area);
            let tint = Rgba::from(block.color).with_alpha(self.opacity);
            for x in bar.left()..bar.right() {
                if let Some(cell) = buf.cell_mut((x, bar.y)) {
                    let under = styles::rgb_of(cell.bg).unwrap_or(palette::SCREEN_BG);
                    cell.set_bg(styles::color(tint.over(under)));
                }
            }
        }
    }
}

/// Cells covered by a block: always one row, at least one column,
/// clipped to `area`.
pub fn block_cells(block: &NoiseBlock, area: Rect) -> Rect {
    let col = (block.left_pct / 100.0 * area.width as f32) as u16;
    let row = (block.top_pct / 100.0 * area.height as f32) as u16;
    let width = ((block.width_px / CELL_WIDTH_PX).ceil() as u16).max(1);

    let x = area.x + col.min(area.width.saturating_sub(1));
    let y = area.y + row.min(area.height.saturating_sub(1));
    Rect::new(x, y, width, 1).intersection(area)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use glitch_core::Rgb;
    use ratatui::style::{Color, Style};
    use std::time::{Duration, Instant};

    fn block(left_pct: f32, top_pct: f32, width_px: f32) -> NoiseBlock {
        NoiseBlock {
            width_px,
            height_px: 4.0,
            top_pct,
            left_pct,
            color: Rgb::WHITE,
            expires_at: Instant::now(),
        }
    }

    #[test]
    fn test_block_cells_maps_pixels_to_cells() {
        let area = Rect::new(0, 0, 100, 50);
        let cells = block_cells(&block(10.0, 50.0, 120.0), area);
        assert_eq!(cells, Rect::new(10, 25, 15, 1));
    }

    #[test]
    fn test_block_cells_clipped_at_right_edge() {
        let area = Rect::new(0, 0, 40, 10);
        let cells = block_cells(&block(99.9, 0.0, 250.0), area);
        assert_eq!(cells.x, 39);
        assert_eq!(cells.right(), 40);
    }

    #[test]
    fn test_block_cells_respects_area_offset() {
        let area = Rect::new(5, 3, 20, 10);
        let cells = block_cells(&block(0.0, 0.0, 100.0), area);
        assert_eq!((cells.x, cells.y), (5, 3));
    }

    #[test]
    fn test_noise_tints_background() {
        let mut noise = NoiseField::seeded(Duration::from_millis(80), 5);
        noise.spawn(Rgb::WHITE, Instant::now());
        let block = noise.blocks().next().cloned().unwrap();

        let mut term = TestTerminal::with_size(60, 20);
        term.draw_with(|frame| {
            let area = frame.area();
            frame
                .buffer_mut()
                .set_style(area, Style::default().bg(Color::Rgb(0, 0, 0)));
            frame.render_widget(NoiseLayer::new(&noise, 0.15), area);
        });

        let cells = block_cells(&block, Rect::new(0, 0, 60, 20));
        // 15% white over black
        assert_eq!(
            term.cell(cells.x, cells.y).map(|c| c.bg),
            Some(Color::Rgb(38, 38, 38))
        );
    }

    #[test]
    fn test_zero_opacity_draws_nothing() {
        let mut noise = NoiseField::seeded(Duration::from_millis(80), 5);
        noise.spawn(Rgb::WHITE, Instant::now());

        let mut term = TestTerminal::with_size(20, 5);
        term.render_widget(NoiseLayer::new(&noise, 0.0), term.area());
        for y in 0..5 {
            for x in 0..20 {
                assert_eq!(term.cell(x, y).map(|c| c.bg), Some(Color::Reset));
            }
        }
    }
}
