use flock_core::FlockError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("world configuration error: {0}")]
    Config(String),

    #[error("delta time must be finite and >= 0, got {0}")]
    InvalidDeltaTime(f32),

    #[error(transparent)]
    Core(#[from] FlockError),
}

pub type SimResult<T> = Result<T, SimError>;
