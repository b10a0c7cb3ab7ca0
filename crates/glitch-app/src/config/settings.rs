//! Settings loader for `config.toml`

use std::path::{Path, PathBuf};

use super::types::Settings;
use glitch_core::prelude::*;

const CONFIG_FILENAME: &str = "config.toml";
const APP_DIR: &str = "glitch-state";

const DEFAULT_CONFIG: &str = r#"# glitch-state configuration

[timing]
settle_ms = 2500        # Length of a glitch transition
noise_tick_ms = 40      # One noise block per tick while glitching
noise_lifetime_ms = 80  # How long a noise block stays visible

[ui]
# initial_theme = "dark"  # Theme id or name to open with
noise_opacity = 0.15
scanlines = true
vignette = true
"#;

/// Default location of the config file (`~/.config/glitch-state/config.toml`)
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILENAME))
}

/// Load settings from `path`, falling back to defaults.
///
/// A missing file is normal. An unreadable or malformed file is logged and
/// ignored so that a typo never keeps the program from starting.
pub fn load_settings(path: &Path) -> Settings {
    if !path.exists() {
        debug!("No config file at {:?}, using defaults", path);
        return Settings::default();
    }

    match std::fs::read_to_string(path) {
        Ok(content) => match toml::from_str::<Settings>(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", path);
                settings.normalized()
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", path, e);
            Settings::default()
        }
    }
}

/// Load settings from a path the user named explicitly.
///
/// Unlike [`load_settings`], a missing file is an error here.
pub fn load_settings_strict(path: &Path) -> Result<Settings> {
    if !path.exists() {
        return Err(Error::ConfigNotFound {
            path: path.to_path_buf(),
        });
    }
    let content = std::fs::read_to_string(path)?;
    let settings: Settings = toml::from_str(&content)
        .map_err(|e| Error::config(format!("{}: {}", path.display(), e)))?;
    Ok(settings.normalized())
}

/// Write the commented default config to `path` unless a file already exists.
///
/// Returns `true` when a file was written.
pub fn write_default_config(path: &Path) -> Result<bool> {
    if path.exists() {
        info!("Config file already exists at {:?}", path);
        return Ok(false);
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| Error::config(format!("Failed to create {:?}: {}", parent, e)))?;
    }
    std::fs::write(path, DEFAULT_CONFIG)
        .with_context(|| format!("Failed to write default config to {:?}", path))?;
    info!("Wrote default config to {:?}", path);
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let settings = load_settings(&dir.path().join("config.toml"));
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_load_custom_settings() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
[timing]
settle_ms = 1200

[ui]
initial_theme = "Neon"
scanlines = false
"#,
        )
        .unwrap();

        let settings = load_settings(&path);
        assert_eq!(settings.timing.settle_ms, 1200);
        assert_eq!(settings.timing.noise_tick_ms, 40);
        assert_eq!(settings.ui.initial_theme.as_deref(), Some("Neon"));
        assert!(!settings.ui.scanlines);
        assert!(settings.ui.vignette);
    }

    #[test]
    fn test_invalid_toml_gives_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[timing\nsettle_ms = ").unwrap();

        assert_eq!(load_settings(&path), Settings::default());
    }

    #[test]
    fn test_loaded_settings_are_normalized() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[timing]\nnoise_tick_ms = 0\n").unwrap();

        assert_eq!(load_settings(&path).timing.noise_tick_ms, 10);
    }

    #[test]
    fn test_strict_load_requires_file() {
        let dir = tempdir().unwrap();
        let err = load_settings_strict(&dir.path().join("missing.toml")).unwrap_err();
        assert!(matches!(err, Error::ConfigNotFound { .. }));
    }

    #[test]
    fn test_strict_load_reports_parse_errors() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[timing]\nsettle_ms = \"slow\"\n").unwrap();

        let err = load_settings_strict(&path).unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
    }

    #[test]
    fn test_default_config_parses_to_defaults() {
        let settings: Settings = toml::from_str(DEFAULT_CONFIG).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_write_default_config_once() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        assert!(write_default_config(&path).unwrap());
        assert!(path.exists());
        assert!(!write_default_config(&path).unwrap());
        assert_eq!(load_settings(&path), Settings::default());
    }
}
