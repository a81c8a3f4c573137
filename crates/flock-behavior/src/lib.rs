//! `flock-behavior`: the per-agent flocking update.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                   |
//! |-----------------|------------------------------------------------------------|
//! | [`model`]       | `FlockBehavior` trait                                      |
//! | [`context`]     | `TickContext`: elapsed time and world bounds for one tick  |
//! | [`params`]      | `BehaviorParams`, `Rules`, `Interval`                      |
//! | [`heading`]     | Forward alignment with randomized shake                    |
//! | [`cohesion`]    | Drift toward the re-sampled local centroid                 |
//! | [`alignment`]   | Velocity copy from the first nearby agent                  |
//! | [`separation`]  | AABB push-out from the first overlapping agent             |
//! | [`wrap`]        | Toroidal screen wrap                                       |
//! | [`classic`]     | `ClassicFlocking`: all rules in their fixed order          |
//! | [`noop`]        | `NoopBehavior`: agents never change                        |
//!
//! # Rule order
//!
//! ```text
//! ① integrate       position += velocity · dt
//! ② heading         smooth toward velocity, occasionally shake
//! ③ cohesion        nudge toward the centroid of agents within 3 units
//! ④ alignment       velocity := first contact neighbor's velocity
//! ⑤ separation      push out of the first overlapping contact neighbor
//! ⑥ wrap            re-enter on the opposite edge
//! ```
//!
//! Later rules see the position and velocity written by earlier ones, and
//! every neighbor query is centered on the agent's *current* position.

pub mod alignment;
pub mod classic;
pub mod cohesion;
pub mod context;
pub mod heading;
pub mod model;
pub mod noop;
pub mod params;
pub mod separation;
pub mod wrap;


pub use classic::ClassicFlocking;
pub use context::TickContext;
pub use model::FlockBehavior;
pub use noop::NoopBehavior;
pub use params::{BehaviorParams, Interval, Rules};
pub use separation::Contact;
