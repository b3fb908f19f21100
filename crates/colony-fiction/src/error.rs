//! Error types for the fiction engine.

use colony_core::CoreError;
use thiserror::Error;

/// Result type for fiction operations.
pub type FictionResult<T> = Result<T, FictionError>;

/// Errors that can occur while running a session.
#[derive(Debug, Error)]
pub enum FictionError {
    /// A location the story depends on is missing from the world.
    #[error("location not found: {0}")]
    LocationMissing(String),

    /// Failure in the core model.
    #[error(transparent)]
    Core(#[from] CoreError),
}
