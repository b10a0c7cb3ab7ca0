//! Terminal rendition of the theme registry.
//!
//! - `palette`: Colours shared by every theme
//! - `styles`: Style builders derived from the active theme

pub mod palette;
pub mod styles;
