//! Main update function - handles state transitions (TEA pattern)

use glitch_core::prelude::*;
use glitch_core::ThemeIndex;

use crate::message::Message;
use crate::state::AppState;

use super::{keys::handle_key, UpdateAction, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Key(key) => match handle_key(state, key) {
            Some(msg) => UpdateResult::message(msg),
            None => UpdateResult::none(),
        },

        Message::Tick { now } => {
            state.tick(now);
            UpdateResult::none()
        }

        Message::Quit => {
            info!("Quit requested");
            state.phase = glitch_core::AppPhase::Quitting;
            state.noise.clear();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Theme Selection
        // ─────────────────────────────────────────────────────────
        Message::SelectTheme(index) => select_theme(state, index),
        Message::NextTheme => {
            let next = state.presentation.active().next();
            select_theme(state, next)
        }
        Message::PreviousTheme => {
            let prev = state.presentation.active().prev();
            select_theme(state, prev)
        }
        Message::Recalibrate => {
            debug!("Recalibrating {}", state.presentation.active());
            begin_transition(state)
        }

        // ─────────────────────────────────────────────────────────
        // Overlays
        // ─────────────────────────────────────────────────────────
        Message::ToggleThemePicker => {
            state.presentation.toggle_picker();
            if state.presentation.picker_open() {
                state.picker_cursor = state.presentation.active();
            }
            UpdateResult::none()
        }
        Message::PickerNext => {
            state.picker_cursor = state.picker_cursor.next();
            UpdateResult::none()
        }
        Message::PickerPrevious => {
            state.picker_cursor = state.picker_cursor.prev();
            UpdateResult::none()
        }
        Message::PickerConfirm => {
            if !state.presentation.picker_open() {
                return UpdateResult::none();
            }
            UpdateResult::message(Message::SelectTheme(state.picker_cursor))
        }
        Message::ToggleMeaning => {
            if !state.presentation.toggle_meaning() {
                trace!("Meaning overlay unavailable while glitching");
            }
            UpdateResult::none()
        }
        Message::CloseMeaning => {
            state.presentation.close_meaning();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Timers
        // ─────────────────────────────────────────────────────────
        Message::SettleElapsed { generation } => {
            if state.presentation.settle(generation) {
                debug!(
                    "Transition {} settled on {}",
                    generation,
                    state.presentation.active()
                );
                UpdateResult::action(UpdateAction::EndTransition)
            } else {
                trace!("Ignoring stale settle for transition {}", generation);
                UpdateResult::none()
            }
        }
        Message::NoiseTick { generation, at } => {
            if state.presentation.is_glitching()
                && generation == state.presentation.generation()
            {
                let color = state.theme().text_color.rgb;
                state.noise.spawn(color, at);
            }
            UpdateResult::none()
        }
    }
}

fn select_theme(state: &mut AppState, index: ThemeIndex) -> UpdateResult {
    state.presentation.select(index);
    state.picker_cursor = index;
    info!("Theme changed to {}", index);
    transition_action(state)
}

/// Restart the glitch transition on the current theme.
fn begin_transition(state: &mut AppState) -> UpdateResult {
    state.presentation.start_glitch();
    transition_action(state)
}

fn transition_action(state: &AppState) -> UpdateResult {
    let timing = &state.settings.timing;
    UpdateResult::action(UpdateAction::BeginTransition {
        generation: state.presentation.generation(),
        settle_after: timing.settle(),
        noise_every: timing.noise_tick(),
    })
}
