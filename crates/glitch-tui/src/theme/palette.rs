//! Fixed colours that do not change with the active theme.

use ratatui::style::Color;

use glitch_core::Rgb;

// --- Backdrop ---
pub const SCREEN_BG: Rgb = Rgb::BLACK; // Behind the gradient (`#000`)
pub const SCANLINE_SHADE: f32 = 0.2; // rgba(0,0,0,0.2) on every other row
pub const VIGNETTE_SHADE: f32 = 0.5; // rgba(0,0,0,0.5) at the edges
pub const EDGE_GLOW_ALPHA: f32 = 0.1; // Accent edge border opacity
pub const SCRIM_SHADE: f32 = 0.6; // Meaning overlay backdrop (bg-black/60)

// --- Labels ---
pub const STATUS_DOT: Color = Color::Rgb(239, 68, 68); // bg-red-500

// --- Picker pills ---
pub const PILL_ACTIVE_FG: Color = Color::Black;
pub const PILL_ACTIVE_BG: Color = Color::White;
pub const PILL_INACTIVE_FG: Color = Color::Rgb(153, 153, 153); // text-white/60
pub const PILL_BORDER: Color = Color::Rgb(80, 80, 80); // border-white/20

// --- Meaning overlay ---
pub const CLOSE_HINT: Color = Color::Rgb(110, 110, 110); // opacity-40
