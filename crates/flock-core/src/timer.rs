//! Countdown timer gating periodic random events.

/// A countdown driven by the per-tick elapsed time.
///
/// `remaining` is allowed to go negative; callers test [`is_elapsed`]
/// (`remaining <= 0`) rather than equality, so a large `dt` never skips an
/// event.
///
/// [`is_elapsed`]: Timer::is_elapsed
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Timer {
    remaining: f32,
    duration:  f32,
}

impl Timer {
    /// A timer that resets to `duration` and currently reads `start`.
    pub const fn new(duration: f32, start: f32) -> Self {
        Self { remaining: start, duration }
    }

    /// Subtract `dt` seconds.
    #[inline]
    pub fn advance(&mut self, dt: f32) {
        self.remaining -= dt;
    }

    /// Restore the configured duration.
    #[inline]
    pub fn reset(&mut self) {
        self.remaining = self.duration;
    }

    /// Re-seed the remaining time without touching the configured duration.
    #[inline]
    pub fn set(&mut self, remaining: f32) {
        self.remaining = remaining;
    }

    #[inline]
    pub fn is_elapsed(&self) -> bool {
        self.remaining <= 0.0
    }

    #[inline]
    pub fn remaining(&self) -> f32 {
        self.remaining
    }

    #[inline]
    pub fn duration(&self) -> f32 {
        self.duration
    }
}
