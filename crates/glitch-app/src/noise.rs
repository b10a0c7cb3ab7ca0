//! Ephemeral noise blocks shown while glitching
//!
//! One block is spawned per noise tick and dropped once its lifetime has
//! passed. Blocks carry only what is needed to draw them; nothing survives
//! a block's removal.

use std::collections::VecDeque;
use std::ops::Range;
use std::time::{Duration, Instant};

use glitch_core::Rgb;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Block width range in page pixels
pub const WIDTH_PX: Range<f32> = 100.0..250.0;
/// Block height range in page pixels
pub const HEIGHT_PX: Range<f32> = 2.0..10.0;
/// Position range, as a percentage of the screen
pub const POSITION_PCT: Range<f32> = 0.0..100.0;

/// One short-lived noise bar.
#[derive(Debug, Clone, PartialEq)]
pub struct NoiseBlock {
    pub width_px: f32,
    pub height_px: f32,
    /// Distance from the top edge, `[0, 100)` percent
    pub top_pct: f32,
    /// Distance from the left edge, `[0, 100)` percent
    pub left_pct: f32,
    pub color: Rgb,
    pub expires_at: Instant,
}

/// Set of live noise blocks plus the generator that spawns them.
#[derive(Debug)]
pub struct NoiseField {
    blocks: VecDeque<NoiseBlock>,
    lifetime: Duration,
    rng: StdRng,
}

impl NoiseField {
    pub fn new(lifetime: Duration) -> Self {
        Self::with_rng(lifetime, StdRng::from_entropy())
    }

    /// Deterministic field for tests and reproducible captures.
    pub fn seeded(lifetime: Duration, seed: u64) -> Self {
        Self::with_rng(lifetime, StdRng::seed_from_u64(seed))
    }

    fn with_rng(lifetime: Duration, rng: StdRng) -> Self {
        Self {
            blocks: VecDeque::new(),
            lifetime,
            rng,
        }
    }

    pub fn lifetime(&self) -> Duration {
        self.lifetime
    }

    /// Drop expired blocks, then spawn one new block coloured `color`.
    pub fn spawn(&mut self, color: Rgb, now: Instant) -> &NoiseBlock {
        self.expire(now);
        let block = NoiseBlock {
            width_px: self.rng.gen_range(WIDTH_PX),
            height_px: self.rng.gen_range(HEIGHT_PX),
            top_pct: self.rng.gen_range(POSITION_PCT),
            left_pct: self.rng.gen_range(POSITION_PCT),
            color,
            expires_at: now + self.lifetime,
        };
        self.blocks.push_back(block);
        &self.blocks[self.blocks.len() - 1]
    }

    /// Remove every block whose lifetime has passed at `now`.
    ///
    /// Blocks are kept in spawn order and share one lifetime, so expired
    /// blocks are always at the front.
    pub fn expire(&mut self, now: Instant) -> usize {
        let mut removed = 0;
        while self
            .blocks
            .front()
            .is_some_and(|block| block.expires_at <= now)
        {
            self.blocks.pop_front();
            removed += 1;
        }
        removed
    }

    pub fn clear(&mut self) {
        self.blocks.clear();
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn blocks(&self) -> impl Iterator<Item = &NoiseBlock> {
        self.blocks.iter()
    }
}
