//! Per-tick inputs shared by every agent update.

use flock_core::{Bounds, Tick};

/// What the world hands to every [`FlockBehavior`][crate::FlockBehavior]
/// call during one update pass.
#[derive(Copy, Clone, Debug)]
pub struct TickContext {
    /// The tick being computed.
    pub tick: Tick,

    /// Seconds elapsed since the previous tick, supplied by the driver.
    pub dt: f32,

    /// World rectangle agents wrap around.
    pub bounds: Bounds,
}

impl TickContext {
    #[inline]
    pub fn new(tick: Tick, dt: f32, bounds: Bounds) -> Self {
        Self { tick, dt, bounds }
    }
}
