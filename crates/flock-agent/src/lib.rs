//! `flock-agent`: boid records and their arena storage.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                      |
//! |---------------|---------------------------------------------------------------|
//! | [`agent`]     | `Agent`, `AgentSize`, `ShakeState`, `CohesionState`           |
//! | [`store`]     | `AgentStore` (dense arena), `AgentRngs` (per-agent RNG)       |
//! | [`builder`]   | `AgentBuilder`, `SpawnParams`, `sample_direction`             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.         |

pub mod agent;
pub mod builder;
pub mod store;

#[cfg(test)]
mod tests;

pub use agent::{Agent, AgentSize, CohesionState, ShakeState};
pub use builder::{AgentBuilder, SpawnParams, sample_direction};
pub use store::{AgentRngs, AgentStore};
