//! Interface buttons and the theme picker pill list.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};
use unicode_width::UnicodeWidthStr;

use glitch_app::PresentationState;
use glitch_core::{Theme, ThemeIndex};

use crate::theme::styles;

const BUTTON_GAP: u16 = 4;
const PILL_GAP: u16 = 1;

/// Perspective and meaning buttons.
pub struct ControlBar<'a> {
    presentation: &'a PresentationState,
}

impl<'a> ControlBar<'a> {
    pub fn new(presentation: &'a PresentationState) -> Self {
        Self { presentation }
    }

    fn buttons(&self) -> Vec<Span<'static>> {
        let theme = self.presentation.theme();
        let perspective = if self.presentation.picker_open() {
            "[ t ] CLOSE INTERFACE"
        } else {
            "[ t ] SELECT PERSPECTIVE"
        };
        let mut buttons = vec![Span::styled(perspective, styles::button(theme))];

        // Meaning is only offered once settled
        if !self.presentation.is_glitching() {
            let span = if self.presentation.meaning_open() {
                Span::styled(" [ m ] HIDE MEANING ", styles::button_pressed(theme))
            } else {
                Span::styled("[ m ] SHOW MEANING", styles::button(theme))
            };
            buttons.push(span);
        }
        buttons
    }
}

impl Widget for ControlBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let buttons = self.buttons();
        let gap = " ".repeat(BUTTON_GAP as usize);
        let mut spans = Vec::with_capacity(buttons.len() * 2);
        for (i, button) in buttons.into_iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(gap.clone()));
            }
            spans.push(button);
        }
        let line = Line::from(spans);

        let width = (line.width() as u16).min(area.width);
        let x = area.x + (area.width - width) / 2;
        buf.set_line(x, area.y, &line, width);
    }
}

/// A pill label with its resolved style
struct Pill {
    label: String,
    style: Style,
}

/// Row of theme names; the active one inverted, the cursor underlined.
pub struct ThemePicker<'a> {
    active: ThemeIndex,
    cursor: ThemeIndex,
    theme: &'a Theme,
}

impl<'a> ThemePicker<'a> {
    pub fn new(active: ThemeIndex, cursor: ThemeIndex) -> Self {
        Self {
            active,
            cursor,
            theme: active.get(),
        }
    }

    fn pills(&self) -> Vec<Pill> {
        ThemeIndex::iter()
            .map(|index| {
                let label = pill_label(index);
                let style = match (index == self.active, index == self.cursor) {
                    (true, true) => styles::pill_active().add_modifier(Modifier::UNDERLINED),
                    (true, false) => styles::pill_active(),
                    (false, true) => styles::pill_cursor(self.theme),
                    (false, false) => styles::pill_inactive(),
                };
                Pill { label, style }
            })
            .collect()
    }
}

impl Widget for ThemePicker<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let rows = wrap_pills(self.pills(), area.width);
        for (offset, row) in rows.into_iter().enumerate().take(area.height as usize) {
            let mut spans = Vec::with_capacity(row.len() * 2);
            for (i, pill) in row.into_iter().enumerate() {
                if i > 0 {
                    spans.push(Span::raw(" ".repeat(PILL_GAP as usize)));
                }
                spans.push(Span::styled(pill.label, pill.style));
            }
            let line = Line::from(spans);
            let width = (line.width() as u16).min(area.width);
            let x = area.x + (area.width - width) / 2;
            buf.set_line(x, area.y + offset as u16, &line, width);
        }
    }
}

/// ` 3 STATIC ` - the digit doubles as the shortcut
pub fn pill_label(index: ThemeIndex) -> String {
    format!(" {} {} ", index.ordinal(), index.get().name.to_uppercase())
}

/// Greedily pack pills into rows no wider than `width`
fn wrap_pills(pills: Vec<Pill>, width: u16) -> Vec<Vec<Pill>> {
    let mut rows: Vec<Vec<Pill>> = Vec::new();
    let mut current: Vec<Pill> = Vec::new();
    let mut used = 0u16;

    for pill in pills {
        let pill_width = pill.label.width() as u16;
        let needed = if current.is_empty() {
            pill_width
        } else {
            used + PILL_GAP + pill_width
        };
        if needed > width && !current.is_empty() {
            rows.push(std::mem::take(&mut current));
            used = pill_width;
        } else {
            used = needed;
        }
        current.push(pill);
    }
    if !current.is_empty() {
        rows.push(current);
    }
    rows
}
