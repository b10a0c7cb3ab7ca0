//! Message types for the application (TEA pattern)

use std::time::Instant;

use glitch_core::ThemeIndex;

use crate::input_key::InputKey;

/// All possible messages/actions in the application
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Animation frame from the event loop
    Tick { now: Instant },

    /// Quit immediately (q, Ctrl+C, signal handler)
    Quit,

    // ─────────────────────────────────────────────────────────
    // Theme Selection
    // ─────────────────────────────────────────────────────────
    /// Activate a theme and restart the glitch transition
    SelectTheme(ThemeIndex),
    /// Activate the following theme (wraps)
    NextTheme,
    /// Activate the preceding theme (wraps)
    PreviousTheme,
    /// Replay the glitch transition on the current theme
    Recalibrate,

    // ─────────────────────────────────────────────────────────
    // Overlays
    // ─────────────────────────────────────────────────────────
    ToggleThemePicker,
    /// Move the picker highlight forward
    PickerNext,
    /// Move the picker highlight back
    PickerPrevious,
    /// Select the highlighted picker entry
    PickerConfirm,
    ToggleMeaning,
    CloseMeaning,

    // ─────────────────────────────────────────────────────────
    // Timers
    // ─────────────────────────────────────────────────────────
    /// Settle timer for transition `generation` fired
    SettleElapsed { generation: u64 },
    /// Noise ticker for transition `generation` fired
    NoiseTick { generation: u64, at: Instant },
}
