//! Separation: push an agent out of the first neighbor whose box it
//! overlaps.
//!
//! "Overlap" is tested per axis and either axis is enough: two boxes whose
//! x-projections overlap count as colliding even when they are apart
//! vertically.  Only one contact is resolved per tick.

use flock_agent::Agent;
use flock_core::{AgentId, Vec2};
use flock_spatial::SpatialQuery;

use crate::BehaviorParams;

/// The neighbor being pushed away from.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Contact {
    pub collider_id: AgentId,

    /// Collider's center.
    pub collider: Vec2,

    /// Per-axis penetration `sum_of_half_extents - |Δ|`.  Positive means the
    /// projections overlap on that axis, negative is the gap.
    pub overlap: Vec2,
}

/// Per-axis penetration of two boxes.
#[inline]
pub fn overlap(a_pos: Vec2, a_half: Vec2, b_pos: Vec2, b_half: Vec2) -> Vec2 {
    let d = b_pos - a_pos;
    Vec2::new(
        (a_half.x + b_half.x) - d.x.abs(),
        (a_half.y + b_half.y) - d.y.abs(),
    )
}

/// First neighbor within the contact radius whose projection overlaps on
/// either axis.
pub fn find_contact<Q>(agent: &Agent, neighbors: &Q, params: &BehaviorParams) -> Option<Contact>
where
    Q: SpatialQuery<Item = Agent> + ?Sized,
{
    let radius = params.contact_radius(agent.size());
    let half = agent.size().half_extents();
    neighbors
        .neighbors_within(agent.id(), agent.position, radius)
        .into_iter()
        .find_map(|other| {
            let o = overlap(agent.position, half, other.position, other.size().half_extents());
            (o.x >= 0.0 || o.y >= 0.0).then_some(Contact {
                collider_id: other.id(),
                collider:    other.position,
                overlap:     o,
            })
        })
}

/// Displacement that separates agent `me` at `position` from `contact`
/// along the axis with the larger overlap, pointing away from the collider
/// and padded by `margin`.  The other axis is left alone.
///
/// Resolving along the smaller-overlap axis instead would give the minimum
/// translation; the larger one is kept so a box sliding past another along
/// one axis is pushed sideways out of its path.
///
/// When both centers sit on the same coordinate of the push axis the lower
/// id goes negative and the higher positive, so two coincident agents
/// updated from the same snapshot move apart instead of together.
pub fn push_out(me: AgentId, position: Vec2, contact: &Contact, margin: f32) -> Vec2 {
    let away = |mine: f32, theirs: f32, depth: f32| {
        let negative = if mine == theirs { me < contact.collider_id } else { mine < theirs };
        if negative { -(depth + margin) } else { depth + margin }
    };
    if contact.overlap.x >= contact.overlap.y {
        Vec2::new(away(position.x, contact.collider.x, contact.overlap.x), 0.0)
    } else {
        Vec2::new(0.0, away(position.y, contact.collider.y, contact.overlap.y))
    }
}

/// Resolve at most one contact by blending toward the push-out position at
/// `separation_speed · dt`.
pub fn separation<Q>(agent: &mut Agent, neighbors: &Q, params: &BehaviorParams, dt: f32)
where
    Q: SpatialQuery<Item = Agent> + ?Sized,
{
    if let Some(contact) = find_contact(agent, neighbors, params) {
        let delta = push_out(agent.id(), agent.position, &contact, params.separation_margin);
        agent.position = agent.position.lerp(agent.position + delta, params.separation_speed * dt);
    }
}
