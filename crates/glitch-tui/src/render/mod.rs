//! Main render/view function (View in TEA pattern)


use ratatui::Frame;

use glitch_app::AppState;

use crate::{layout, widgets};

/// Render the complete UI (View function in TEA)
///
/// Layers are painted back to front: backdrop, stage, frame decorations,
/// noise, the meaning overlay, and finally the controls which stay usable
/// above everything else.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    if area.width == 0 || area.height == 0 {
        return;
    }

    let presentation = &state.presentation;
    let theme = presentation.theme();
    let ui = &state.settings.ui;
    let areas = layout::create(area);

    frame.render_widget(
        widgets::Backdrop::new(theme)
            .scanlines(ui.scanlines)
            .vignette(ui.vignette),
        area,
    );

    if presentation.is_glitching() {
        frame.render_widget(
            widgets::GlitchTitle::new(theme, state.animation_frame),
            areas.stage,
        );
    } else if presentation.content_visible() {
        frame.render_widget(widgets::ThemeContent::new(theme), areas.stage);
    }

    frame.render_widget(widgets::FrameDecor::new(theme), area);
    frame.render_widget(
        widgets::StatusLabel::new(theme, state.animation_frame),
        areas.status,
    );
    frame.render_widget(
        widgets::FooterLabel::new(theme, presentation.active()),
        areas.footer,
    );

    frame.render_widget(widgets::NoiseLayer::new(&state.noise, ui.noise_opacity), area);

    if presentation.meaning_open() {
        frame.render_widget(widgets::MeaningOverlay::new(theme), area);
    }

    frame.render_widget(widgets::ControlBar::new(presentation), areas.controls);
    if presentation.picker_open() {
        frame.render_widget(
            widgets::ThemePicker::new(presentation.active(), state.picker_cursor),
            areas.picker,
        );
    }
}
