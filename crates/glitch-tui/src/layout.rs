//! Screen layout definitions for the TUI
//!
//! Everything is positioned absolutely inside the full frame, the same way
//! the decorations hug the screen edges. Rows that fall outside a small
//! terminal collapse to zero-height rects, which widgets skip.

use ratatui::layout::Rect;

/// Columns between the screen edge and the status/footer labels
pub const LABEL_INSET_X: u16 = 4;

/// Rows between the screen edge and the status/footer labels
pub const LABEL_INSET_Y: u16 = 2;

/// Rows reserved for the wrapped theme picker
pub const PICKER_ROWS: u16 = 2;

const CONTROLS_ROW: u16 = 4;
const STAGE_INSET_X: u16 = 2;

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenAreas {
    /// Whole terminal
    pub frame: Rect,

    /// Chapter label (top-left)
    pub status: Rect,

    /// `P-00n // AUTH` label (bottom-left)
    pub footer: Rect,

    /// Perspective/meaning buttons (top, centred)
    pub controls: Rect,

    /// Theme pills below the controls
    pub picker: Rect,

    /// Title while glitching, theme content once settled
    pub stage: Rect,
}

/// Create the main screen layout
pub fn create(area: Rect) -> ScreenAreas {
    let status = row(area, area.y.saturating_add(LABEL_INSET_Y), LABEL_INSET_X);
    let footer = match area.bottom().checked_sub(LABEL_INSET_Y + 1) {
        Some(y) => row(area, y, LABEL_INSET_X),
        None => empty(area),
    };
    let controls = row(area, area.y.saturating_add(CONTROLS_ROW), STAGE_INSET_X);

    let picker_y = area.y.saturating_add(CONTROLS_ROW + 2);
    let picker = rows(area, picker_y, PICKER_ROWS, STAGE_INSET_X);

    // Stage sits between the picker and the footer
    let stage_top = picker_y.saturating_add(PICKER_ROWS + 1);
    let stage_bottom = area.bottom().saturating_sub(LABEL_INSET_Y + 2);
    let stage = rows(
        area,
        stage_top,
        stage_bottom.saturating_sub(stage_top),
        STAGE_INSET_X,
    );

    ScreenAreas {
        frame: area,
        status,
        footer,
        controls,
        picker,
        stage,
    }
}

fn empty(area: Rect) -> Rect {
    Rect::new(area.x, area.y, 0, 0)
}

fn row(area: Rect, y: u16, inset_x: u16) -> Rect {
    rows(area, y, 1, inset_x)
}

/// Horizontal band of `height` rows starting at `y`, clipped to `area`
fn rows(area: Rect, y: u16, height: u16, inset_x: u16) -> Rect {
    if y < area.y || y >= area.bottom() || height == 0 {
        return empty(area);
    }
    let height = height.min(area.bottom() - y);
    let width = area.width.saturating_sub(inset_x.saturating_mul(2));
    if width == 0 {
        return empty(area);
    }
    Rect::new(area.x + inset_x, y, width, height)
}
