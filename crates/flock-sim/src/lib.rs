//! `flock-sim`: the world and its tick loop for the flock boids simulation.
//!
//! # Tick loop
//!
//! ```text
//! for tick in 0..config.total_ticks:
//!   ① Snapshot  copy the arena (snapshot order only) and, with the
//!               rtree backend, bulk-load an index over the copy.
//!   ② Update    FlockBehavior::update for every agent in population
//!               order (parallel with the `parallel` feature).
//!   ③ Clock     advance the tick counter and simulated time.
//! ```
//!
//! The population changes only between ticks, through `add_agent`,
//! `clear_all`, or a [`SpawnPolicy`].
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                     |
//! |------------|------------------------------------------------------------|
//! | `parallel` | Runs snapshot-order updates on Rayon's thread pool.        |
//! | `serde`    | Derives `Serialize`/`Deserialize` on `WorldConfig`.        |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use flock_behavior::ClassicFlocking;
//! use flock_sim::{NoopObserver, WorldBuilder, WorldConfig};
//!
//! let mut world = WorldBuilder::new(config, ClassicFlocking::default()).build()?;
//! world.add_agent(Vec2::new(5.0, 5.0), None);
//! world.run(&mut NoopObserver)?;
//! ```

pub mod builder;
pub mod config;
pub mod error;
pub mod observer;
pub mod spawn;
pub mod world;


pub use builder::WorldBuilder;
pub use config::{SpatialBackend, UpdateOrder, WorldConfig};
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, WorldObserver};
pub use spawn::{SpawnPolicy, SpawnRejection};
pub use world::{AgentView, World};
