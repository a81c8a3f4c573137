//! World configuration.

use flock_agent::SpawnParams;
use flock_core::Bounds;

/// How agents of one tick see each other.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum UpdateOrder {
    /// One pass in population order over the live arena.  Agents later in
    /// the order observe positions and velocities already written by
    /// earlier agents this tick, so results depend on spawn order.
    Sequential,

    /// Every agent reads a copy of the arena taken at tick start and
    /// updates are committed together.
    #[default]
    Snapshot,
}

/// Neighbor query implementation used for snapshot updates.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SpatialBackend {
    /// Linear scan of the population.
    #[default]
    BruteForce,

    /// R-tree bulk-loaded from the tick-start snapshot.  Only valid with
    /// [`UpdateOrder::Snapshot`]: the tree cannot follow agents that move
    /// mid-pass.
    RTree,
}

/// Everything a [`World`][crate::World] needs apart from its behavior.
///
/// # Example
///
/// ```rust
/// use flock_core::Bounds;
/// use flock_sim::{UpdateOrder, WorldConfig};
///
/// let config = WorldConfig {
///     bounds: Bounds::new(10.0, 10.0),
///     order:  UpdateOrder::Sequential,
///     ..WorldConfig::default()
/// };
/// assert_eq!(config.fixed_delta_secs, 1.0 / 60.0);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct WorldConfig {
    /// World extent in units.  Fixed for the session.
    pub bounds: Bounds,

    /// Global seed; every agent's RNG is derived from it and its id.
    pub seed: u64,

    pub order:   UpdateOrder,
    pub backend: SpatialBackend,

    /// Tick length used by [`World::run`][crate::World::run].
    pub fixed_delta_secs: f32,

    /// Ticks executed by [`World::run`][crate::World::run].
    pub total_ticks: u64,

    /// Call `on_snapshot` every this many ticks (0 disables snapshots).
    pub output_interval_ticks: u64,

    /// Initial state of newly added agents.
    pub spawn: SpawnParams,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            bounds:                Bounds::default(),
            seed:                  0,
            order:                 UpdateOrder::default(),
            backend:               SpatialBackend::default(),
            fixed_delta_secs:      1.0 / 60.0,
            total_ticks:           600,
            output_interval_ticks: 60,
            spawn:                 SpawnParams::default(),
        }
    }
}
