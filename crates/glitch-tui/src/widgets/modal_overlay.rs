//! Shared modal overlay utilities.
//!
//! Centering rects and dimming whatever was drawn underneath a modal.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;

use crate::theme::{palette, styles};

/// Center a fixed-size rect within an area.
///
/// If the requested size exceeds the area, clamps to the area dimensions.
///
/// # Examples
/// ```
/// use ratatui::layout::Rect;
/// use glitch_tui::widgets::modal_overlay::centered_rect;
///
/// let area = Rect::new(0, 0, 80, 24);
/// let modal = centered_rect(40, 10, area);
/// assert_eq!(modal, Rect::new(20, 7, 40, 10));
/// ```
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    let x = area.x + (area.width.saturating_sub(w)) / 2;
    let y = area.y + (area.height.saturating_sub(h)) / 2;
    Rect::new(x, y, w, h)
}

/// Darken every cell in the area by `shade` (0 = unchanged, 1 = black).
///
/// Simulates a translucent black scrim (`bg-black/60`) laid over the
/// screen. Cells without an RGB colour are treated as [`palette::SCREEN_BG`].
pub fn dim_background(buf: &mut Buffer, area: Rect, shade: f32) {
    let keep = 1.0 - shade.clamp(0.0, 1.0);
    let area = area.intersection(buf.area);

    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            if let Some(cell) = buf.cell_mut((x, y)) {
                let bg = styles::rgb_of(cell.bg).unwrap_or(palette::SCREEN_BG);
                cell.set_bg(styles::color(bg.scale(keep)));
                if let Some(fg) = styles::rgb_of(cell.fg) {
                    cell.set_fg(styles::color(fg.scale(keep)));
                }
            }
        }
    }
}
