//! Framework error type.
//!
//! The simulation core is total over finite floats and never fails; errors
//! only arise at the edges where callers hand in configuration.

use thiserror::Error;

/// The top-level error type for `flock-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum FlockError {
    #[error("world bounds must be positive and finite, got {width} x {height}")]
    InvalidBounds { width: f32, height: f32 },

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for all `flock-*` crates.
pub type FlockResult<T> = Result<T, FlockError>;
