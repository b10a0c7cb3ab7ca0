//! glitch-state Library
//!
//! A full-screen terminal piece that cycles through colour "perspectives",
//! each introduced by a short glitch transition.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use glitch_app::config::{self, Settings};
use glitch_core::prelude::*;
use glitch_core::{logging, ThemeIndex};

/// What the command line asked for once parsed
#[derive(Debug, Clone, Default)]
pub struct LaunchOptions {
    /// Theme id or name to open with (overrides the config file)
    pub theme: Option<String>,
    /// Explicit config file; must exist when given
    pub config: Option<PathBuf>,
}

/// Main application entry point
pub async fn run(options: LaunchOptions) -> Result<()> {
    // Initialize error handling
    color_eyre::install().map_err(|e| Error::terminal(e.to_string()))?;

    // Initialize logging (to file, since the TUI owns stdout)
    logging::init()?;

    let settings = load_settings(options.config.as_deref())?;
    let initial = glitch_tui::resolve_initial_theme(options.theme.as_deref(), &settings)?;
    info!(
        "Settle {}ms, noise every {}ms for {}ms",
        settings.timing.settle_ms, settings.timing.noise_tick_ms, settings.timing.noise_lifetime_ms
    );

    let result = glitch_tui::run(settings, initial).await;

    if let Err(ref e) = result {
        error!("Application error: {:?}", e);
    }

    info!("glitch-state exiting");
    result
}

/// Settings from an explicit path (strict) or the default location (lenient)
pub fn load_settings(explicit: Option<&Path>) -> Result<Settings> {
    match explicit {
        Some(path) => config::load_settings_strict(path),
        None => Ok(config::default_config_path()
            .map(|path| config::load_settings(&path))
            .unwrap_or_default()),
    }
}

/// Write the default config file, returning where it lives and whether it
/// was newly created.
pub fn write_config(explicit: Option<PathBuf>) -> Result<(PathBuf, bool)> {
    let path = explicit
        .or_else(config::default_config_path)
        .ok_or_else(|| Error::config("No config directory available on this platform"))?;
    let created = config::write_default_config(&path)?;
    Ok((path, created))
}

/// Process exit status for an error that ended the run.
///
/// Start-up problems the user can fix (bad theme, missing config, no
/// terminal) exit with 2; failures while running exit with 1.
pub fn exit_code(err: &Error) -> i32 {
    if err.is_fatal() {
        2
    } else {
        1
    }
}

/// One line per theme: `index  id  name  chapter`
pub fn theme_table() -> String {
    let mut out = String::new();
    for index in ThemeIndex::iter() {
        let theme = index.get();
        let _ = writeln!(
            out,
            "{:<3}{:<12}{:<8}{}",
            index.value(),
            theme.id,
            theme.name,
            theme.chapter_label
        );
    }
    out
}
