//! Configuration file parsing for glitch-state
//!
//! Supports an optional `config.toml` in the user config directory
//! (or a path given on the command line).

pub mod settings;
pub mod types;

pub use settings::{default_config_path, load_settings, load_settings_strict, write_default_config};
pub use types::*;
