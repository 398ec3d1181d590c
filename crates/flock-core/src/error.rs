//! Core error type.
//!
//! Sub-crates define their own error enums and wrap `FlockError` as one
//! variant via `#[from]`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FlockError {
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `flock-core`.
pub type FlockResult<T> = Result<T, FlockError>;
