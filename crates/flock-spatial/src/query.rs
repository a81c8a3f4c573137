//! The neighbor query contract and its brute-force implementation.

use flock_core::{AgentId, Vec2};

/// Anything with an identity and a point position.
pub trait Located {
    fn id(&self) -> AgentId;
    fn position(&self) -> Vec2;
}

/// Radius search over a population.
///
/// Implementations return every item except the one identified by `of`
/// whose squared distance to `center` is `<= radius²`, in population order.
///
/// `center` is passed separately from `of` because the querying agent may
/// already have moved this tick while the population still holds its old
/// position.
pub trait SpatialQuery {
    type Item: Located;

    fn neighbors_within(&self, of: AgentId, center: Vec2, radius: f32) -> Vec<&Self::Item>;
}

/// Lazily yield the neighbors of `of` within `radius` of `center`.
///
/// O(n) per call.  Self-exclusion compares ids, not values, so two agents
/// stacked on the same point still see each other.
pub fn neighbors_within<'a, T: Located>(
    population: &'a [T],
    of:         AgentId,
    center:     Vec2,
    radius:     f32,
) -> impl Iterator<Item = &'a T> + 'a {
    let r2 = radius * radius;
    population
        .iter()
        .filter(move |item| item.id() != of && item.position().distance_squared(center) <= r2)
}

// ── BruteForce ────────────────────────────────────────────────────────────────

/// Naive scan of the whole population.  The right choice at flock sizes of a
/// few hundred, and the only one valid while positions change mid-pass.
pub struct BruteForce<'a, T> {
    population: &'a [T],
}

impl<'a, T: Located> BruteForce<'a, T> {
    pub fn new(population: &'a [T]) -> Self {
        Self { population }
    }
}

impl<T: Located> SpatialQuery for BruteForce<'_, T> {
    type Item = T;

    fn neighbors_within(&self, of: AgentId, center: Vec2, radius: f32) -> Vec<&T> {
        neighbors_within(self.population, of, center, radius).collect()
    }
}
