//! The `Agent` record and its per-behavior state machines.

use flock_core::{AgentId, Timer, UnitScale, Vec2};
use flock_spatial::Located;

// ── AgentSize ─────────────────────────────────────────────────────────────────

/// Full width and height of an agent's bounding box, in world units.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentSize {
    pub width:  f32,
    pub height: f32,
}

impl AgentSize {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Convert a sprite's pixel dimensions to world units.
    pub fn from_pixels(width_px: f32, height_px: f32, scale: UnitScale) -> Self {
        Self {
            width:  scale.pixels_to_units(width_px),
            height: scale.pixels_to_units(height_px),
        }
    }

    #[inline]
    pub fn half_width(&self) -> f32 {
        self.width * 0.5
    }

    #[inline]
    pub fn half_height(&self) -> f32 {
        self.height * 0.5
    }

    #[inline]
    pub fn half_extents(&self) -> Vec2 {
        Vec2::new(self.half_width(), self.half_height())
    }
}

impl Default for AgentSize {
    /// A 64×64 px sprite at the default unit scale.
    fn default() -> Self {
        Self::from_pixels(64.0, 64.0, UnitScale::default())
    }
}

// ── State machines ────────────────────────────────────────────────────────────

/// Heading perturbation state.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ShakeState {
    /// Heading follows the velocity; the shake timer is counting down.
    #[default]
    Settled,
    /// Heading is swinging toward `velocity + target`.
    Shaking { target: Vec2 },
}

impl ShakeState {
    #[inline]
    pub fn is_settled(&self) -> bool {
        matches!(self, ShakeState::Settled)
    }
}

/// Drift toward the local flock centroid.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CohesionState {
    /// No pending displacement; the cohesion timer is counting down.
    #[default]
    Settled,
    /// `target` is the displacement chosen when cohesion triggered;
    /// `remaining` is the part of it not yet applied.
    Pending { target: Vec2, remaining: Vec2 },
}

impl CohesionState {
    #[inline]
    pub fn is_settled(&self) -> bool {
        matches!(self, CohesionState::Settled)
    }
}

// ── Agent ─────────────────────────────────────────────────────────────────────

/// One boid.
///
/// `id` and `size` are fixed at construction and only readable; the rest is
/// rewritten by the behavior every tick.  Build agents through
/// [`AgentStore::spawn`][crate::AgentStore::spawn].
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Agent {
    id:   AgentId,
    size: AgentSize,

    /// Center of the bounding box.
    pub position: Vec2,

    /// Facing angle in radians.  Smoothed toward the velocity, so it lags
    /// behind turns and wobbles while shaking.
    pub heading: f32,

    /// Drift per second.  Overwritten by alignment with a nearby agent.
    pub velocity: Vec2,

    pub shake:          ShakeState,
    pub shake_timer:    Timer,
    pub cohesion:       CohesionState,
    pub cohesion_timer: Timer,
}

impl Agent {
    pub(crate) fn new(
        id:             AgentId,
        size:           AgentSize,
        position:       Vec2,
        heading:        f32,
        velocity:       Vec2,
        shake_timer:    Timer,
        cohesion_timer: Timer,
    ) -> Self {
        Self {
            id,
            size,
            position,
            heading,
            velocity,
            shake: ShakeState::Settled,
            shake_timer,
            cohesion: CohesionState::Settled,
            cohesion_timer,
        }
    }

    #[inline]
    pub fn id(&self) -> AgentId {
        self.id
    }

    #[inline]
    pub fn size(&self) -> AgentSize {
        self.size
    }

    /// Unit vector of the current heading.
    #[inline]
    pub fn forward(&self) -> Vec2 {
        Vec2::from_angle(self.heading)
    }

    /// Point the heading along `dir`.  A zero vector yields angle `0`.
    #[inline]
    pub fn set_forward(&mut self, dir: Vec2) {
        self.heading = dir.angle();
    }
}

impl Located for Agent {
    #[inline]
    fn id(&self) -> AgentId {
        self.id
    }

    #[inline]
    fn position(&self) -> Vec2 {
        self.position
    }
}
