//! Fluent builder for constructing a [`World`].

use flock_behavior::FlockBehavior;
use flock_core::FlockError;

use crate::{SimError, SimResult, SpatialBackend, UpdateOrder, World, WorldConfig};

/// Fluent builder for [`World<B>`].
///
/// # Required inputs
///
/// - [`WorldConfig`]: bounds, seed, update order, tick length, …
/// - `B: FlockBehavior`: the behavior implementation
///
/// # Optional inputs (have defaults)
///
/// | Method          | Default |
/// |-----------------|---------|
/// | `.capacity(n)`  | `0`     |
///
/// # Example
///
/// ```rust
/// use flock_behavior::ClassicFlocking;
/// use flock_core::Vec2;
/// use flock_sim::{NoopObserver, WorldBuilder, WorldConfig};
///
/// let mut world = WorldBuilder::new(WorldConfig::default(), ClassicFlocking::default())
///     .capacity(100)
///     .build()?;
/// world.add_agent(Vec2::new(5.0, 5.0), None);
/// world.run_ticks(10, 1.0 / 60.0, &mut NoopObserver)?;
/// # Ok::<(), flock_sim::SimError>(())
/// ```
pub struct WorldBuilder<B: FlockBehavior> {
    config:   WorldConfig,
    behavior: B,
    capacity: usize,
}

impl<B: FlockBehavior> WorldBuilder<B> {
    pub fn new(config: WorldConfig, behavior: B) -> Self {
        Self { config, behavior, capacity: 0 }
    }

    /// Pre-allocate room for `n` agents.
    pub fn capacity(mut self, n: usize) -> Self {
        self.capacity = n;
        self
    }

    /// Validate the configuration and the behavior, and return an empty
    /// [`World`].
    pub fn build(self) -> SimResult<World<B>> {
        let c = &self.config;

        if !c.bounds.is_valid() {
            return Err(FlockError::InvalidBounds {
                width:  c.bounds.width,
                height: c.bounds.height,
            }
            .into());
        }
        if !(c.fixed_delta_secs.is_finite() && c.fixed_delta_secs >= 0.0) {
            return Err(SimError::Config(format!(
                "fixed_delta_secs must be finite and >= 0, got {}",
                c.fixed_delta_secs
            )));
        }
        if c.order == UpdateOrder::Sequential && c.backend == SpatialBackend::RTree {
            return Err(SimError::Config(
                "the rtree backend needs the snapshot update order".into(),
            ));
        }
        if c.spawn.max_direction_attempts == 0 {
            return Err(SimError::Config("spawn.max_direction_attempts must be > 0".into()));
        }
        self.behavior.validate()?;

        log::debug!(
            "world {} x {} ({:?}, {:?}, seed {})",
            c.bounds.width, c.bounds.height, c.order, c.backend, c.seed
        );
        Ok(World::from_parts(self.config, self.behavior, self.capacity))
    }
}
