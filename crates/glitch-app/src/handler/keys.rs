//! Key event handlers for each overlay

use glitch_core::ThemeIndex;

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::AppState;

/// Convert key events to messages based on which overlay is on top
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    // Force quit works everywhere
    if key == InputKey::CharCtrl('c') {
        return Some(Message::Quit);
    }

    // The picker is drawn above the meaning overlay, so it gets keys first
    let presentation = &state.presentation;
    if presentation.picker_open() {
        handle_key_picker(state, key)
    } else if presentation.meaning_open() {
        handle_key_meaning(key)
    } else {
        handle_key_normal(state, key)
    }
}

/// Handle key events while the meaning overlay is shown
fn handle_key_meaning(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc | InputKey::Enter | InputKey::Char(' ') => Some(Message::CloseMeaning),
        InputKey::Char('m' | 'M') => Some(Message::ToggleMeaning),
        InputKey::Char('t' | 'T') | InputKey::Tab => Some(Message::ToggleThemePicker),
        InputKey::Char('q') => Some(Message::Quit),
        _ => None,
    }
}

/// Handle key events while the theme picker is open
fn handle_key_picker(state: &AppState, key: InputKey) -> Option<Message> {
    if let Some(position) = key.digit_position() {
        return ThemeIndex::new(position).map(Message::SelectTheme);
    }

    match key {
        InputKey::Esc | InputKey::Char('t' | 'T') | InputKey::Tab => {
            Some(Message::ToggleThemePicker)
        }
        InputKey::Right | InputKey::Down | InputKey::Char('l' | 'j') => Some(Message::PickerNext),
        InputKey::Left | InputKey::Up | InputKey::BackTab | InputKey::Char('h' | 'k') => {
            Some(Message::PickerPrevious)
        }
        InputKey::Enter | InputKey::Char(' ') => Some(Message::PickerConfirm),
        InputKey::Char('m' | 'M') if !state.presentation.is_glitching() => {
            Some(Message::ToggleMeaning)
        }
        InputKey::Char('q') => Some(Message::Quit),
        _ => None,
    }
}

/// Handle key events with no overlay open
fn handle_key_normal(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('q') | InputKey::Esc => Some(Message::Quit),
        InputKey::Char('t' | 'T') | InputKey::Tab => Some(Message::ToggleThemePicker),
        InputKey::Char('n') | InputKey::Right => Some(Message::NextTheme),
        InputKey::Char('p') | InputKey::Left => Some(Message::PreviousTheme),

        // Only reachable once settled, like the buttons they stand for
        InputKey::Char('m' | 'M') if !state.presentation.is_glitching() => {
            Some(Message::ToggleMeaning)
        }
        InputKey::Char('r' | 'R') if state.presentation.content_visible() => {
            Some(Message::Recalibrate)
        }
        _ => None,
    }
}
