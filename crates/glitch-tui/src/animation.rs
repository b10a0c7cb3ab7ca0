//! Frame-indexed animation curves.
//!
//! The render loop advances `AppState::animation_frame` once per
//! [`FRAME_INTERVAL`]; everything here is a pure function of that counter so
//! views stay deterministic under test.

use std::time::{Duration, Instant};

use glitch_app::Message;

/// Time between animation frames
pub const FRAME_INTERVAL: Duration = Duration::from_millis(50);

/// Aberration keyframes in cells, one per frame (0.25s cycle)
const JITTER: [(i16, i16); 5] = [(0, 0), (-1, 1), (-1, -1), (1, 1), (1, -1)];

/// Frames in one full title skew cycle (3s)
const SKEW_CYCLE: u64 = 60;

/// Frames in one pulse half-period (1s)
const PULSE_HALF: u64 = 20;

/// Paces `Tick` messages by wall-clock time, independent of input.
///
/// Terminal events can arrive faster than the frame interval (key
/// autorepeat), so ticks are due whenever a full interval has elapsed.
#[derive(Debug, Clone, Copy)]
pub struct FrameClock {
    interval: Duration,
    last: Instant,
}

impl FrameClock {
    pub fn new(interval: Duration, now: Instant) -> Self {
        Self {
            interval,
            last: now,
        }
    }

    /// How long the event poll may block before the next frame is due
    pub fn remaining(&self, now: Instant) -> Duration {
        self.interval
            .saturating_sub(now.saturating_duration_since(self.last))
    }

    /// A `Tick` if a frame is due at `now`
    pub fn tick(&mut self, now: Instant) -> Option<Message> {
        if now.saturating_duration_since(self.last) < self.interval {
            return None;
        }
        self.last = now;
        Some(Message::Tick { now })
    }
}

/// Offset of an aberration layer; the secondary layer runs the cycle backwards.
pub fn jitter(frame: u64, reversed: bool) -> (i16, i16) {
    let step = (frame % JITTER.len() as u64) as usize;
    let step = if reversed {
        (JITTER.len() - step) % JITTER.len()
    } else {
        step
    };
    JITTER[step]
}

/// Horizontal shear of the title in cells, mostly zero with short bursts
pub fn skew(frame: u64) -> i16 {
    match frame % SKEW_CYCLE {
        3 => 1,
        6 => -1,
        58 | 59 => 2,
        _ => 0,
    }
}

/// Whether pulsing labels are in their dim half
pub fn pulse_dimmed(frame: u64) -> bool {
    (frame / PULSE_HALF) % 2 == 1
}
