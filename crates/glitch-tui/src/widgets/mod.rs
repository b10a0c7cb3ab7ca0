//! Custom widget components

mod backdrop;
mod content;
mod control_bar;
mod frame_decor;
mod glitch_title;
mod meaning_overlay;
pub mod modal_overlay;
mod noise_layer;

pub use backdrop::Backdrop;
pub use content::ThemeContent;
pub use control_bar::{ControlBar, ThemePicker};
pub use frame_decor::{FooterLabel, FrameDecor, StatusLabel};
pub use glitch_title::GlitchTitle;
pub use meaning_overlay::MeaningOverlay;
pub use noise_layer::NoiseLayer;
