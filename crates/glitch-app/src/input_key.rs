//! Abstract input key event, independent of terminal library.
//!
//! Keeps glitch-app free of crossterm types; the TUI converts
//! `crossterm::event::KeyEvent` into [`InputKey`] at its boundary.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKey {
    /// Regular character key
    Char(char),
    /// Character with Ctrl modifier
    CharCtrl(char),

    Up,
    Down,
    Left,
    Right,

    Enter,
    Esc,
    Tab,
    BackTab,
}

impl InputKey {
    /// Digit keys `1`..=`9` as a 0-based position.
    pub fn digit_position(&self) -> Option<usize> {
        match self {
            InputKey::Char(c @ '1'..='9') => c.to_digit(10).map(|d| d as usize - 1),
            _ => None,
        }
    }
}
