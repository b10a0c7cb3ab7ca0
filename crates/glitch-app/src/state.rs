//! Application state (Model in TEA pattern)

use std::time::Instant;

use glitch_core::{AppPhase, Phase, Theme, ThemeIndex};

use crate::config::Settings;
use crate::noise::NoiseField;

// ─────────────────────────────────────────────────────────────────────────────
// Presentation State
// ─────────────────────────────────────────────────────────────────────────────

/// Which theme is shown, whether a glitch transition is running, and which
/// overlays are open.
///
/// Fields are private so the overlay invariants always hold:
/// - the meaning overlay is only open while [`Phase::Settled`];
/// - entering [`Phase::Glitching`] closes both overlays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresentationState {
    active: ThemeIndex,
    phase: Phase,
    picker_open: bool,
    meaning_open: bool,
    /// Bumped on every transition start; a settle timer only counts when
    /// it carries the current value
    generation: u64,
}

impl PresentationState {
    pub fn new(active: ThemeIndex) -> Self {
        Self {
            active,
            phase: Phase::Glitching,
            picker_open: false,
            meaning_open: false,
            generation: 0,
        }
    }

    pub fn active(&self) -> ThemeIndex {
        self.active
    }

    pub fn theme(&self) -> &'static Theme {
        self.active.get()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_glitching(&self) -> bool {
        self.phase.is_glitching()
    }

    pub fn picker_open(&self) -> bool {
        self.picker_open
    }

    pub fn meaning_open(&self) -> bool {
        self.meaning_open
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Settled with no overlay covering the content.
    pub fn content_visible(&self) -> bool {
        self.phase.is_settled() && !self.meaning_open
    }

    /// Enter [`Phase::Glitching`] and return the generation the settle
    /// timer must carry.
    pub fn start_glitch(&mut self) -> u64 {
        self.picker_open = false;
        self.meaning_open = false;
        self.phase = Phase::Glitching;
        self.generation = self.generation.wrapping_add(1);
        self.generation
    }

    /// Settle the transition started as `generation`.
    ///
    /// Returns `false` (and changes nothing) for stale generations or when
    /// already settled.
    pub fn settle(&mut self, generation: u64) -> bool {
        if generation != self.generation || self.phase.is_settled() {
            return false;
        }
        self.phase = Phase::Settled;
        true
    }

    /// Make `index` the active theme and restart the transition.
    pub fn select(&mut self, index: ThemeIndex) -> u64 {
        self.active = index;
        self.start_glitch()
    }

    pub fn toggle_picker(&mut self) {
        self.picker_open = !self.picker_open;
    }

    /// Flip the meaning overlay. Ignored while glitching.
    pub fn toggle_meaning(&mut self) -> bool {
        if self.phase.is_glitching() {
            return false;
        }
        self.meaning_open = !self.meaning_open;
        true
    }

    pub fn close_meaning(&mut self) {
        self.meaning_open = false;
    }
}

// ─────────────────────────────────────────────────────────────────────────────
/// Complete application state (the Model in TEA)
#[derive(Debug)]
pub struct AppState {
    pub presentation: PresentationState,

    /// Highlighted entry in the theme picker
    pub picker_cursor: ThemeIndex,

    /// Live noise blocks
    pub noise: NoiseField,

    /// Application settings from config file
    pub settings: Settings,

    /// Current application phase (used for app-level quitting state)
    pub phase: AppPhase,

    /// Animation frame counter for the glitch title jitter
    pub animation_frame: u64,
}

impl AppState {
    pub fn new(settings: Settings, initial: ThemeIndex) -> Self {
        let noise = NoiseField::new(settings.timing.noise_lifetime());
        Self::with_noise(settings, initial, noise)
    }

    pub fn with_noise(settings: Settings, initial: ThemeIndex, noise: NoiseField) -> Self {
        Self {
            presentation: PresentationState::new(initial),
            picker_cursor: initial,
            noise,
            settings,
            phase: AppPhase::Running,
            animation_frame: 0,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }

    pub fn theme(&self) -> &'static Theme {
        self.presentation.theme()
    }

    /// Advance animations and drop expired noise blocks.
    pub fn tick(&mut self, now: Instant) {
        self.animation_frame = self.animation_frame.wrapping_add(1);
        self.noise.expire(now);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index(i: usize) -> ThemeIndex {
        ThemeIndex::new(i).unwrap()
    }

    #[test]
    fn test_initial_state_is_glitching() {
        let state = PresentationState::new(ThemeIndex::FIRST);
        assert!(state.is_glitching());
        assert!(!state.picker_open());
        assert!(!state.meaning_open());
        assert!(!state.content_visible());
    }

    #[test]
    fn test_start_glitch_closes_overlays() {
        let mut state = PresentationState::new(ThemeIndex::FIRST);
        let generation = state.start_glitch();
        assert!(state.settle(generation));
        state.toggle_picker();
        assert!(state.toggle_meaning());

        state.start_glitch();
        assert!(state.is_glitching());
        assert!(!state.picker_open());
        assert!(!state.meaning_open());
    }

    #[test]
    fn test_settle_happens_once() {
        let mut state = PresentationState::new(ThemeIndex::FIRST);
        let generation = state.start_glitch();
        assert!(state.settle(generation));
        assert_eq!(state.phase(), Phase::Settled);
        assert!(!state.settle(generation));
    }

    #[test]
    fn test_stale_settle_is_ignored() {
        let mut state = PresentationState::new(ThemeIndex::FIRST);
        let first = state.start_glitch();
        let second = state.select(index(3));
        assert_ne!(first, second);

        assert!(!state.settle(first));
        assert!(state.is_glitching());
        assert!(state.settle(second));
    }

    #[test]
    fn test_select_sets_index_and_glitches() {
        for i in ThemeIndex::iter() {
            let mut state = PresentationState::new(ThemeIndex::FIRST);
            let generation = state.start_glitch();
            state.settle(generation);

            state.select(i);
            assert_eq!(state.active(), i);
            assert!(state.is_glitching());
        }
    }

    #[test]
    fn test_meaning_unreachable_while_glitching() {
        let mut state = PresentationState::new(ThemeIndex::FIRST);
        state.start_glitch();
        assert!(!state.toggle_meaning());
        assert!(!state.meaning_open());
    }

    #[test]
    fn test_toggle_picker_keeps_active_theme() {
        let mut state = PresentationState::new(index(4));
        state.toggle_picker();
        assert!(state.picker_open());
        state.toggle_picker();
        assert!(!state.picker_open());
        assert_eq!(state.active(), index(4));
    }

    #[test]
    fn test_content_hidden_behind_meaning() {
        let mut state = PresentationState::new(ThemeIndex::FIRST);
        let generation = state.start_glitch();
        state.settle(generation);
        assert!(state.content_visible());
        state.toggle_meaning();
        assert!(!state.content_visible());
        state.close_meaning();
        assert!(state.content_visible());
    }

    #[test]
    fn test_app_state_tick_advances_frame() {
        let mut state = AppState::new(Settings::default(), ThemeIndex::FIRST);
        let now = Instant::now();
        state.tick(now);
        state.tick(now);
        assert_eq!(state.animation_frame, 2);
        assert!(!state.should_quit());
    }
}
