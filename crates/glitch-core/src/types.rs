//! Core domain types

use std::fmt;

/// Visual phase of the presentation.
///
/// The only transition is `Glitching -> Settled`; re-entering `Glitching`
/// happens by restarting the transition, never from a timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Transition in progress: glitch title and noise blocks are shown
    #[default]
    Glitching,
    /// Stable: content and overlays are reachable
    Settled,
}

impl Phase {
    pub fn is_glitching(self) -> bool {
        self == Phase::Glitching
    }

    pub fn is_settled(self) -> bool {
        self == Phase::Settled
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Glitching => write!(f, "glitching"),
            Phase::Settled => write!(f, "settled"),
        }
    }
}

/// Lifecycle of the whole application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}
