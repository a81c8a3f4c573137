//! The `FlockBehavior` trait, the extension point for agent rules.

use flock_agent::Agent;
use flock_core::{AgentRng, FlockResult};
use flock_spatial::SpatialQuery;

use crate::TickContext;

/// Pluggable per-agent update.
///
/// Called once per agent per tick.  `agent` is a private copy the world
/// writes back afterwards; `neighbors` answers radius queries against the
/// rest of the population (live or snapshot, depending on the world's
/// update order).
///
/// # Thread safety
///
/// With snapshot ordering and the `parallel` feature the world calls
/// `update` from many threads at once, so implementations must be
/// `Send + Sync` and keep per-agent state on the `Agent`, not in `self`.
///
/// # Example
///
/// ```rust,ignore
/// struct DriftOnly;
///
/// impl FlockBehavior for DriftOnly {
///     fn update<Q>(&self, agent: &mut Agent, _n: &Q, ctx: &TickContext, _rng: &mut AgentRng)
///     where
///         Q: SpatialQuery<Item = Agent> + ?Sized,
///     {
///         agent.position += agent.velocity * ctx.dt;
///     }
/// }
/// ```
pub trait FlockBehavior: Send + Sync + 'static {
    fn update<Q>(&self, agent: &mut Agent, neighbors: &Q, ctx: &TickContext, rng: &mut AgentRng)
    where
        Q: SpatialQuery<Item = Agent> + ?Sized;

    /// Checked once when the world is built.
    fn validate(&self) -> FlockResult<()> {
        Ok(())
    }
}
