//! Startup functions for the TUI runner
//!
//! - `resolve_initial_theme`: picks the first theme from CLI or config
//! - `startup`: kicks off the initial glitch transition

use glitch_app::config::Settings;
use glitch_app::process::process_message;
use glitch_app::{AppState, Message, TimerSet};
use glitch_core::prelude::*;
use glitch_core::{find_theme, ThemeIndex};

/// Pick the theme shown first.
///
/// A `--theme` argument must name a known theme. The config file value is
/// advisory: an unknown name there is logged and ignored.
pub fn resolve_initial_theme(cli_theme: Option<&str>, settings: &Settings) -> Result<ThemeIndex> {
    if let Some(query) = cli_theme {
        return find_theme(query).ok_or_else(|| Error::unknown_theme(query));
    }

    match settings.ui.initial_theme.as_deref() {
        Some(query) => Ok(find_theme(query).unwrap_or_else(|| {
            warn!("Unknown initial_theme '{}' in config, using the first theme", query);
            ThemeIndex::FIRST
        })),
        None => Ok(ThemeIndex::FIRST),
    }
}

/// Enter the initial transition; the page loads glitching.
pub fn startup(state: &mut AppState, timers: &mut TimerSet) {
    info!("Starting on theme {}", state.presentation.active());
    process_message(state, Message::Recalibrate, timers);
}
