//! `flock-spatial`: "who is near me" queries over an agent population.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                     |
//! |------------|--------------------------------------------------------------|
//! | [`query`]  | `Located`, `SpatialQuery`, `neighbors_within`, `BruteForce`  |
//! | [`index`]  | `RTreeIndex` (R-tree over a frozen snapshot)                 |
//!
//! # Result order
//!
//! Every query returns neighbors in population order, never distance order.
//! Behavior rules pick "the first neighbor", so both backends must agree on
//! which one that is.

pub mod index;
pub mod query;


pub use index::RTreeIndex;
pub use query::{BruteForce, Located, SpatialQuery, neighbors_within};
