//! Toroidal screen wrap.

use flock_agent::Agent;
use flock_core::Bounds;

/// Wrap one coordinate of a box with half extent `half` on `[0, extent]`.
///
/// A box entirely below 0 jumps forward by `extent + epsilon`; a box
/// entirely above `extent` jumps back by `extent`.  A box that is still
/// fully outside after that single jump (it travelled more than a screen in
/// one tick, or is smaller than `epsilon`) is folded back with
/// `rem_euclid`, so applying the wrap twice never moves an agent again.
pub fn wrap_axis(p: f32, half: f32, extent: f32, epsilon: f32) -> f32 {
    let outside = |p: f32| p + half < 0.0 || p - half > extent;

    let mut p = p;
    if p + half < 0.0 {
        p += extent + epsilon;
    } else if p - half > extent {
        p -= extent;
    }

    if outside(p) && p.is_finite() {
        p = p.rem_euclid(extent);
    }
    p
}

/// `true` if the box lies entirely outside `bounds` on either axis.
pub fn is_outside(agent: &Agent, bounds: Bounds) -> bool {
    let p = agent.position;
    let h = agent.size().half_extents();
    p.x + h.x < 0.0 || p.x - h.x > bounds.width || p.y + h.y < 0.0 || p.y - h.y > bounds.height
}

/// Wrap both axes independently.
pub fn wrap(agent: &mut Agent, bounds: Bounds, epsilon: f32) {
    let h = agent.size().half_extents();
    agent.position.x = wrap_axis(agent.position.x, h.x, bounds.width, epsilon);
    agent.position.y = wrap_axis(agent.position.y, h.y, bounds.height, epsilon);
}
