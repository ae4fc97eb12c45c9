//! Framework error type.
//!
//! Sub-crates define their own error enums and wrap `SwarmError` as one
//! variant via `#[from]`.

use thiserror::Error;

/// The top-level error type for `swarm-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum SwarmError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("cell size must be finite and positive, got {0}")]
    InvalidCellSize(f32),

    #[error("delta time must be finite and non-negative, got {0}")]
    InvalidDeltaTime(f32),
}

/// Shorthand result type for all `swarm-*` crates.
pub type SwarmResult<T> = Result<T, SwarmError>;
