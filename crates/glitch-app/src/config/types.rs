//! Configuration types for glitch-state
//!
//! Defines:
//! - `Settings` - Global application settings (`config.toml`)
//! - `TimingSettings` - Transition and noise timing
//! - `UiSettings` - Cosmetic switches

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Lower bound for the settle timer
pub const MIN_SETTLE_MS: u64 = 100;
/// Lower bound for the noise tick and noise lifetime
pub const MIN_NOISE_MS: u64 = 10;

/// Application settings (`config.toml`)
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub timing: TimingSettings,

    #[serde(default)]
    pub ui: UiSettings,
}

impl Settings {
    /// Clamp every value into its supported range.
    pub fn normalized(mut self) -> Self {
        self.timing.settle_ms = self.timing.settle_ms.max(MIN_SETTLE_MS);
        self.timing.noise_tick_ms = self.timing.noise_tick_ms.max(MIN_NOISE_MS);
        self.timing.noise_lifetime_ms = self.timing.noise_lifetime_ms.max(MIN_NOISE_MS);
        self.ui.noise_opacity = if self.ui.noise_opacity.is_finite() {
            self.ui.noise_opacity.clamp(0.0, 1.0)
        } else {
            default_noise_opacity()
        };
        self
    }
}

/// Transition timing
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct TimingSettings {
    /// How long a glitch transition lasts before settling
    #[serde(default = "default_settle_ms")]
    pub settle_ms: u64,

    /// Interval between noise blocks while glitching
    #[serde(default = "default_noise_tick_ms")]
    pub noise_tick_ms: u64,

    /// How long each noise block stays on screen
    #[serde(default = "default_noise_lifetime_ms")]
    pub noise_lifetime_ms: u64,
}

impl Default for TimingSettings {
    fn default() -> Self {
        Self {
            settle_ms: default_settle_ms(),
            noise_tick_ms: default_noise_tick_ms(),
            noise_lifetime_ms: default_noise_lifetime_ms(),
        }
    }
}

impl TimingSettings {
    pub fn settle(&self) -> Duration {
        Duration::from_millis(self.settle_ms)
    }

    pub fn noise_tick(&self) -> Duration {
        Duration::from_millis(self.noise_tick_ms)
    }

    pub fn noise_lifetime(&self) -> Duration {
        Duration::from_millis(self.noise_lifetime_ms)
    }
}

fn default_settle_ms() -> u64 {
    2500
}

fn default_noise_tick_ms() -> u64 {
    40
}

fn default_noise_lifetime_ms() -> u64 {
    80
}

/// Cosmetic switches
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct UiSettings {
    /// Theme id or name to open with (first theme when unset)
    #[serde(default)]
    pub initial_theme: Option<String>,

    /// Opacity of noise blocks over the background
    #[serde(default = "default_noise_opacity")]
    pub noise_opacity: f32,

    /// Darken every other row
    #[serde(default = "default_true")]
    pub scanlines: bool,

    /// Darken cells towards the screen edges
    #[serde(default = "default_true")]
    pub vignette: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            initial_theme: None,
            noise_opacity: default_noise_opacity(),
            scanlines: true,
            vignette: true,
        }
    }
}

fn default_noise_opacity() -> f32 {
    0.15
}

fn default_true() -> bool {
    true
}
