//! glitch-tui - Terminal UI for glitch-state
//!
//! This crate provides the ratatui-based terminal interface: the view
//! function and its widgets, terminal event polling, and the runner that
//! wires the glitch-app model to a real terminal.

pub mod animation;
pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod startup;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export main entry points
pub use runner::run;
pub use startup::resolve_initial_theme;
