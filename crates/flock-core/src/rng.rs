//! Seeded random sources.
//!
//! Every agent owns an [`AgentRng`] derived from the run seed and its id,
//! so the numbers an agent draws depend only on `(seed, id)` and on how
//! many draws it has made.  Neither the update order nor the arrival of
//! new agents can change them.  [`SimRng`] serves callers that act on the
//! world as a whole: drivers scripting input, tests scattering agents.
//!
//! Both wrap `rand`'s `SmallRng`; the draws the flock actually needs are
//! exposed as named methods so call sites read as behavior, not as
//! distribution plumbing.

use rand::distributions::uniform::{SampleRange, SampleUniform};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::AgentId;

/// Odd 64-bit constant (2^64 / golden ratio).  Multiplying consecutive ids
/// by it scatters them over the whole seed space.
const SEED_SPREAD: u64 = 0x9e37_79b9_7f4a_7c15;

#[inline]
fn mix(seed: u64, salt: u64) -> u64 {
    seed ^ salt.wrapping_mul(SEED_SPREAD)
}

// ── AgentRng ──────────────────────────────────────────────────────────────────

/// The random source private to one agent.
///
/// Lives in `AgentRngs`, next to the arena rather than inside `Agent`, so
/// the arena can be copied into a tick snapshot without duplicating RNG
/// state.
pub struct AgentRng(SmallRng);

impl AgentRng {
    pub fn new(run_seed: u64, agent: AgentId) -> Self {
        AgentRng(SmallRng::seed_from_u64(mix(run_seed, agent.0 as u64)))
    }

    /// Uniform in `[0, 1)`.
    #[inline]
    pub fn unit_f32(&mut self) -> f32 {
        self.0.r#gen()
    }

    /// `-1.0` or `1.0`, each half the time.
    #[inline]
    pub fn sign(&mut self) -> f32 {
        if self.0.r#gen::<bool>() { 1.0 } else { -1.0 }
    }

    /// `0.0` half the time, otherwise `±1.0`.
    ///
    /// Used per axis when picking a spawn direction, so diagonal and
    /// axis-aligned directions both come up.
    #[inline]
    pub fn axis_with_zero(&mut self) -> f32 {
        if self.0.r#gen::<bool>() { self.sign() } else { 0.0 }
    }
}

// ── SimRng ────────────────────────────────────────────────────────────────────

/// Single-threaded random source for world-level choices such as where a
/// scripted pointer starts.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// An independent stream for one consumer, keyed by `stream`.
    ///
    /// Handing each consumer its own stream keeps their draws apart: adding
    /// a draw in one does not shift the numbers another sees.
    pub fn child(&mut self, stream: u64) -> SimRng {
        let base: u64 = self.0.r#gen();
        SimRng(SmallRng::seed_from_u64(mix(base, stream)))
    }

    /// Uniform sample from `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: SampleUniform,
        R: SampleRange<T>,
    {
        self.0.gen_range(range)
    }
}
