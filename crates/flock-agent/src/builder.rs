//! Construction of new agents.
//!
//! # Usage
//!
//! ```rust
//! use flock_agent::{AgentBuilder, AgentRngs, AgentSize, AgentStore, SpawnParams};
//! use flock_core::Vec2;
//!
//! let params = SpawnParams::default();
//! let mut store = AgentStore::new();
//! let mut rngs = AgentRngs::new(/*seed=*/ 42);
//!
//! let id = store.spawn(
//!     &mut rngs,
//!     AgentBuilder::new(Vec2::new(5.0, 5.0)).size(AgentSize::new(0.5, 0.5)),
//!     &params,
//! );
//! assert_eq!(store.get(id).unwrap().position, Vec2::new(5.0, 5.0));
//! ```

use flock_core::{AgentId, AgentRng, Timer, Vec2};

use crate::{Agent, AgentSize};

/// Direction used when sampling never produced a non-zero vector.
const FALLBACK_DIRECTION: Vec2 = Vec2::new(1.0, 0.0);

// ── SpawnParams ───────────────────────────────────────────────────────────────

/// Initial state shared by every spawned agent.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SpawnParams {
    /// Per-axis speed multiplied component-wise by the sampled direction.
    pub base_speed: Vec2,

    /// Size used when the caller supplies none (or a non-positive dimension).
    pub default_size: AgentSize,

    /// Shake countdown.  Starting at zero makes the first perturbation fire
    /// on the first tick.
    pub shake_timer: Timer,

    /// Cohesion countdown.
    pub cohesion_timer: Timer,

    /// Draws of the initial direction before giving up on `(1, 0)`.
    pub max_direction_attempts: u32,
}

impl Default for SpawnParams {
    fn default() -> Self {
        Self {
            base_speed:             Vec2::splat(3.0),
            default_size:           AgentSize::default(),
            shake_timer:            Timer::new(1.0, 0.0),
            cohesion_timer:         Timer::new(3.0, 3.0),
            max_direction_attempts: 100,
        }
    }
}

// ── Direction sampling ────────────────────────────────────────────────────────

/// Draw a random initial direction with each axis in `{-1, 0, 1}`.
///
/// `(0, 0)` is rejected and redrawn, at most `max_attempts` times; after
/// that the fallback direction `(1, 0)` is returned.  Diagonals are
/// normalized, axis-aligned directions keep length 1.
pub fn sample_direction(rng: &mut AgentRng, max_attempts: u32) -> Vec2 {
    for _ in 0..max_attempts {
        let dir = Vec2::new(rng.axis_with_zero(), rng.axis_with_zero());
        if dir != Vec2::ZERO {
            return if dir.length() > 1.0 { dir.normalized() } else { dir };
        }
    }
    log::warn!("direction sampling failed {max_attempts} times, using {FALLBACK_DIRECTION}");
    FALLBACK_DIRECTION
}

// ── AgentBuilder ──────────────────────────────────────────────────────────────

/// Describes one agent to spawn.  Unset fields are drawn or defaulted by
/// [`build`](Self::build).
#[derive(Clone, Debug)]
pub struct AgentBuilder {
    position: Vec2,
    size:     Option<AgentSize>,
    velocity: Option<Vec2>,
    heading:  f32,
}

impl AgentBuilder {
    /// Spawn at `position` (typically the last pointer position).
    pub fn new(position: Vec2) -> Self {
        Self { position, size: None, velocity: None, heading: 0.0 }
    }

    /// Explicit bounding box.  Non-positive or non-finite dimensions fall
    /// back to the default size on that axis.
    pub fn size(mut self, size: AgentSize) -> Self {
        self.size = Some(size);
        self
    }

    /// Like [`size`](Self::size) but accepts an optional value.
    pub fn maybe_size(mut self, size: Option<AgentSize>) -> Self {
        self.size = size;
        self
    }

    /// Fixed initial velocity instead of a random direction.
    pub fn velocity(mut self, velocity: Vec2) -> Self {
        self.velocity = Some(velocity);
        self
    }

    /// Initial heading angle in radians.  Defaults to `0` (facing `+x`).
    pub fn heading(mut self, radians: f32) -> Self {
        self.heading = radians;
        self
    }

    /// Produce the agent.  Draws from `rng` only when no velocity was given.
    pub fn build(self, id: AgentId, params: &SpawnParams, rng: &mut AgentRng) -> Agent {
        let size = resolve_size(self.size, params.default_size);
        let velocity = match self.velocity {
            Some(v) => v,
            None => params
                .base_speed
                .scale(sample_direction(rng, params.max_direction_attempts)),
        };

        Agent::new(
            id,
            size,
            self.position,
            self.heading,
            velocity,
            params.shake_timer,
            params.cohesion_timer,
        )
    }
}

fn resolve_size(requested: Option<AgentSize>, default: AgentSize) -> AgentSize {
    let pick = |v: f32, d: f32| if v.is_finite() && v > 0.0 { v } else { d };
    match requested {
        None => default,
        Some(s) => AgentSize::new(pick(s.width, default.width), pick(s.height, default.height)),
    }
}
