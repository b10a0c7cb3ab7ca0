//! glitch-app - Presentation state and orchestration for glitch-state
//!
//! This crate implements the TEA (The Elm Architecture) pattern: a single
//! [`AppState`] model, [`Message`]s, and an `update` function that returns
//! [`UpdateAction`]s for the event loop. Timers live in [`TimerSet`] and only
//! ever talk back through messages.

pub mod config;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod noise;
pub mod process;
pub mod signals;
pub mod state;
pub mod timers;

// Re-export primary types
pub use handler::{UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use noise::{NoiseBlock, NoiseField};
pub use state::{AppState, PresentationState};
pub use timers::TimerSet;
