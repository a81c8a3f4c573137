//! A no-op behavior model: agents never change.

use flock_agent::Agent;
use flock_core::AgentRng;
use flock_spatial::SpatialQuery;

use crate::{FlockBehavior, TickContext};

/// A [`FlockBehavior`] that leaves every agent untouched.
///
/// Useful as a placeholder in tests of population management, where
/// movement would only add noise.
pub struct NoopBehavior;

impl FlockBehavior for NoopBehavior {
    fn update<Q>(&self, _agent: &mut Agent, _neighbors: &Q, _ctx: &TickContext, _rng: &mut AgentRng)
    where
        Q: SpatialQuery<Item = Agent> + ?Sized,
    {
    }
}
