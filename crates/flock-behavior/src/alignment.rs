//! Velocity alignment.

use flock_agent::Agent;
use flock_spatial::SpatialQuery;

use crate::BehaviorParams;

/// Copy the velocity of the first agent within the contact radius.
///
/// Deliberately not an average: one arbitrary (population-order first)
/// neighbor sets the drift, which is what makes chains of agents snap into
/// a common direction.
pub fn velocity_alignment<Q>(agent: &mut Agent, neighbors: &Q, params: &BehaviorParams)
where
    Q: SpatialQuery<Item = Agent> + ?Sized,
{
    let radius = params.contact_radius(agent.size());
    if let Some(first) = neighbors.neighbors_within(agent.id(), agent.position, radius).first() {
        agent.velocity = first.velocity;
    }
}
