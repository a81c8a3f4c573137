//! Cohesion: every few seconds an agent picks the centroid of its
//! neighborhood and slowly drifts toward it.

use flock_agent::{Agent, CohesionState};
use flock_core::{AgentRng, Vec2};
use flock_spatial::SpatialQuery;

use crate::BehaviorParams;

/// Neighbors required before cohesion does anything.
pub const MIN_COHESION_NEIGHBORS: usize = 2;

/// Advance the cohesion state machine by `dt`.
///
/// A no-op (state and timer frozen) unless at least
/// [`MIN_COHESION_NEIGHBORS`] agents are within `cohesion_radius`.
///
/// - **Settled**: tick the cohesion timer.  Once it has run out, target the
///   mean neighbor position and re-seed the timer.
/// - **Pending**: move by `cohesion_blend · dt` of the original target each
///   tick, a constant step, so any target inside `cohesion_radius` is
///   reached in a bounded number of ticks.  The last step is cut to what is
///   still owed.  Settles once the remainder is within
///   `convergence_threshold`.
pub fn cohesion<Q>(
    agent:     &mut Agent,
    neighbors: &Q,
    params:    &BehaviorParams,
    dt:        f32,
    rng:       &mut AgentRng,
) where
    Q: SpatialQuery<Item = Agent> + ?Sized,
{
    let near = neighbors.neighbors_within(agent.id(), agent.position, params.cohesion_radius);
    if near.len() < MIN_COHESION_NEIGHBORS {
        return;
    }

    if agent.cohesion.is_settled() {
        agent.cohesion_timer.advance(dt);
    }

    match agent.cohesion {
        CohesionState::Pending { target, remaining } => {
            let step = pending_step(target, remaining, params.cohesion_blend * dt);
            agent.position += step;
            let remaining = remaining - step;
            agent.cohesion = if remaining.length() <= params.convergence_threshold {
                CohesionState::Settled
            } else {
                CohesionState::Pending { target, remaining }
            };
        }
        CohesionState::Settled if agent.cohesion_timer.is_elapsed() => {
            let sum = near.iter().fold(Vec2::ZERO, |acc, n| acc + n.position);
            let centroid = sum / near.len() as f32;
            let target = centroid - agent.position;
            agent.cohesion = CohesionState::Pending { target, remaining: target };
            agent.cohesion_timer.set(params.cohesion_reseed.sample(rng));
        }
        CohesionState::Settled => {}
    }
}

/// One tick of pending cohesion: `rate` of `target`, never longer than
/// `remaining`.
pub fn pending_step(target: Vec2, remaining: Vec2, rate: f32) -> Vec2 {
    let step = target * rate.clamp(0.0, 1.0);
    if step.length_squared() >= remaining.length_squared() { remaining } else { step }
}
