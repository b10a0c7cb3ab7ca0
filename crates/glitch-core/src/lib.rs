//! # glitch-core - Core Domain Types
//!
//! Foundation crate for glitch-state. Provides the static theme registry,
//! colour values, the presentation phase, error handling and logging setup.
//!
//! This crate has **zero internal dependencies**.
//!
//! ## Public API
//!
//! ### Themes (`theme`)
//! - [`Theme`] - Immutable colour/text bundle for one chapter
//! - [`ThemeIndex`] - Bounds-checked index into the registry
//! - [`themes()`], [`find_theme()`] - Registry access
//!
//! ### Colours (`color`)
//! - [`Rgb`], [`Rgba`], [`RadialGradient`]
//!
//! ### Domain Types (`types`)
//! - [`Phase`] - Glitching or Settled
//! - [`AppPhase`] - Running or Quitting
//!
//! ### Error Handling (`error`)
//! - [`Error`], [`Result`], [`ResultExt`]
//!
//! ## Prelude
//!
//! ```rust
//! use glitch_core::prelude::*;
//! ```

pub mod color;
pub mod error;
pub mod logging;
pub mod theme;
pub mod types;

/// Prelude for common imports used throughout all glitch-state crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

pub use color::{RadialGradient, Rgb, Rgba};
pub use error::{Error, Result, ResultExt};
pub use theme::{find_theme, theme_count, themes, Theme, ThemeIndex};
pub use types::{AppPhase, Phase};
