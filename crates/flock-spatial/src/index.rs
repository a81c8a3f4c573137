//! R-tree accelerated neighbor queries.
//!
//! The tree is bulk-loaded from a population slice and never updated, so it
//! is only correct while that slice stays frozen, in practice the
//! tick-start snapshot used by the snapshot update order.

use rstar::{PointDistance, RTree, RTreeObject, AABB};

use flock_core::{AgentId, Vec2};

use crate::{Located, SpatialQuery};

// ── R-tree entry ──────────────────────────────────────────────────────────────

/// Entry stored in the R-tree: a `[x, y]` point and the slot of the item in
/// the population slice.
#[derive(Clone)]
struct SlotEntry {
    point: [f32; 2],
    slot:  usize,
}

impl RTreeObject for SlotEntry {
    type Envelope = AABB<[f32; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for SlotEntry {
    fn distance_2(&self, point: &[f32; 2]) -> f32 {
        let dx = self.point[0] - point[0];
        let dy = self.point[1] - point[1];
        dx * dx + dy * dy
    }
}

// ── RTreeIndex ────────────────────────────────────────────────────────────────

/// Spatial index over a frozen population slice.
pub struct RTreeIndex<'a, T> {
    population: &'a [T],
    tree:       RTree<SlotEntry>,
}

impl<'a, T: Located> RTreeIndex<'a, T> {
    /// Bulk-load an index over `population`.  O(n log n).
    pub fn build(population: &'a [T]) -> Self {
        let entries: Vec<SlotEntry> = population
            .iter()
            .enumerate()
            .map(|(slot, item)| {
                let p = item.position();
                SlotEntry { point: [p.x, p.y], slot }
            })
            .collect();
        Self { population, tree: RTree::bulk_load(entries) }
    }

    pub fn len(&self) -> usize {
        self.tree.size()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.size() == 0
    }
}

impl<T: Located> SpatialQuery for RTreeIndex<'_, T> {
    type Item = T;

    fn neighbors_within(&self, of: AgentId, center: Vec2, radius: f32) -> Vec<&T> {
        let mut slots: Vec<usize> = self
            .tree
            .locate_within_distance([center.x, center.y], radius * radius)
            .map(|e| e.slot)
            .collect();
        // Tree traversal order is arbitrary; restore population order.
        slots.sort_unstable();
        slots
            .into_iter()
            .map(|slot| &self.population[slot])
            .filter(|item| item.id() != of)
            .collect()
    }
}
