//! The standard rule pipeline.

use flock_agent::Agent;
use flock_core::{AgentRng, FlockResult};
use flock_spatial::SpatialQuery;

use crate::{BehaviorParams, FlockBehavior, TickContext};
use crate::{alignment, cohesion, heading, separation, wrap};

/// Runs every enabled rule of [`BehaviorParams::rules`] in the fixed order
/// integrate → heading → cohesion → alignment → separation → wrap.
#[derive(Clone, Debug, Default)]
pub struct ClassicFlocking {
    pub params: BehaviorParams,
}

impl ClassicFlocking {
    pub fn new(params: BehaviorParams) -> Self {
        Self { params }
    }
}

impl FlockBehavior for ClassicFlocking {
    fn update<Q>(&self, agent: &mut Agent, neighbors: &Q, ctx: &TickContext, rng: &mut AgentRng)
    where
        Q: SpatialQuery<Item = Agent> + ?Sized,
    {
        let p = &self.params;
        let dt = ctx.dt;

        if p.rules.integrate {
            agent.position += agent.velocity * dt;
        }
        if p.rules.forward_alignment {
            heading::forward_alignment(agent, p, dt, rng);
        }
        if p.rules.cohesion {
            cohesion::cohesion(agent, neighbors, p, dt, rng);
        }
        if p.rules.velocity_alignment {
            alignment::velocity_alignment(agent, neighbors, p);
        }
        if p.rules.separation {
            separation::separation(agent, neighbors, p, dt);
        }
        if p.rules.wrap {
            wrap::wrap(agent, ctx.bounds, p.wrap_epsilon);
        }
    }

    fn validate(&self) -> FlockResult<()> {
        self.params.validate()
    }
}
