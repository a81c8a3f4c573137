//! Tunable constants of the flocking rules.

use flock_agent::AgentSize;
use flock_core::{AgentRng, FlockError, FlockResult};

// ── Interval ──────────────────────────────────────────────────────────────────

/// Half-open range `[min, max)` that timers are re-seeded from.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Interval {
    pub min: f32,
    pub max: f32,
}

impl Interval {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Uniform draw in `[min, max)`.
    #[inline]
    pub fn sample(&self, rng: &mut AgentRng) -> f32 {
        self.min + rng.unit_f32() * (self.max - self.min)
    }
}

// ── Rules ─────────────────────────────────────────────────────────────────────

/// Per-step switches.  Everything is on by default; tests and experiments
/// turn steps off to observe one rule in isolation.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Rules {
    pub integrate:          bool,
    pub forward_alignment:  bool,
    pub cohesion:           bool,
    pub velocity_alignment: bool,
    pub separation:         bool,
    pub wrap:               bool,
}

impl Rules {
    /// Every step disabled.
    pub const NONE: Rules = Rules {
        integrate:          false,
        forward_alignment:  false,
        cohesion:           false,
        velocity_alignment: false,
        separation:         false,
        wrap:               false,
    };

    pub const ALL: Rules = Rules {
        integrate:          true,
        forward_alignment:  true,
        cohesion:           true,
        velocity_alignment: true,
        separation:         true,
        wrap:               true,
    };

    /// Only the separation step.
    pub fn separation_only() -> Self {
        Rules { separation: true, ..Rules::NONE }
    }
}

impl Default for Rules {
    fn default() -> Self {
        Rules::ALL
    }
}

// ── BehaviorParams ────────────────────────────────────────────────────────────

/// Rates, radii, and thresholds of the flocking rules.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BehaviorParams {
    /// Heading blend rate toward the velocity while settled (per second).
    pub forward_speed: f32,

    /// Heading blend rate toward the shake target (per second).
    pub shake_speed: f32,

    /// Position blend rate toward the separation push-out (per second).
    pub separation_speed: f32,

    /// Fraction of the pending cohesion displacement applied per second.
    pub cohesion_blend: f32,

    /// Distance under which a shake or cohesion target counts as reached.
    pub convergence_threshold: f32,

    /// Added to the larger half extent to get the contact radius.
    pub contact_margin: f32,

    /// Fixed radius for centroid averaging.
    pub cohesion_radius: f32,

    /// Magnitude range of each shake axis.
    pub shake_magnitude: Interval,

    /// Range the shake timer is re-seeded from after a shake starts.
    pub shake_reseed: Interval,

    /// Range the cohesion timer is re-seeded from after a target is set.
    pub cohesion_reseed: Interval,

    /// Extra distance added to a separation push-out.
    pub separation_margin: f32,

    /// Nudge past the opposite edge when wrapping off the low edge.
    pub wrap_epsilon: f32,

    pub rules: Rules,
}

impl Default for BehaviorParams {
    fn default() -> Self {
        Self {
            forward_speed:         2.0,
            shake_speed:           3.0,
            separation_speed:      1.0,
            cohesion_blend:        0.1,
            convergence_threshold: 0.1,
            contact_margin:        1.0,
            cohesion_radius:       3.0,
            shake_magnitude:       Interval::new(1.0, 2.0),
            shake_reseed:          Interval::new(0.0, 1.0),
            cohesion_reseed:       Interval::new(2.0, 3.0),
            separation_margin:     1.0,
            wrap_epsilon:          0.1,
            rules:                 Rules::ALL,
        }
    }
}

impl BehaviorParams {
    /// Search radius for alignment and separation around an agent of `size`.
    #[inline]
    pub fn contact_radius(&self, size: AgentSize) -> f32 {
        size.half_width().max(size.half_height()) + self.contact_margin
    }

    /// Reject negative rates, non-positive radii and thresholds, and empty
    /// intervals.
    pub fn validate(&self) -> FlockResult<()> {
        let non_negative = [
            ("forward_speed", self.forward_speed),
            ("shake_speed", self.shake_speed),
            ("separation_speed", self.separation_speed),
            ("cohesion_blend", self.cohesion_blend),
            ("contact_margin", self.contact_margin),
            ("separation_margin", self.separation_margin),
            ("wrap_epsilon", self.wrap_epsilon),
        ];
        for (name, v) in non_negative {
            if !(v.is_finite() && v >= 0.0) {
                return Err(FlockError::Config(format!("{name} must be finite and >= 0, got {v}")));
            }
        }

        let positive = [
            ("convergence_threshold", self.convergence_threshold),
            ("cohesion_radius", self.cohesion_radius),
        ];
        for (name, v) in positive {
            if !(v.is_finite() && v > 0.0) {
                return Err(FlockError::Config(format!("{name} must be finite and > 0, got {v}")));
            }
        }

        let intervals = [
            ("shake_magnitude", self.shake_magnitude),
            ("shake_reseed", self.shake_reseed),
            ("cohesion_reseed", self.cohesion_reseed),
        ];
        for (name, iv) in intervals {
            if !(iv.min.is_finite() && iv.max.is_finite() && iv.min <= iv.max) {
                return Err(FlockError::Config(format!(
                    "{name} must satisfy min <= max, got [{}, {})",
                    iv.min, iv.max
                )));
            }
        }
        Ok(())
    }
}
