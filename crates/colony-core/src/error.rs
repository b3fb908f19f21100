//! Error types for the core model.

use thiserror::Error;

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors raised by the core model.
#[derive(Debug, Error)]
pub enum CoreError {
    /// An argument was out of range or malformed.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// An item with this name is already registered.
    #[error("duplicate item: {0}")]
    DuplicateItem(String),

    /// No item with this name exists in the catalog.
    #[error("unknown item: {0}")]
    UnknownItem(String),

    /// A location with this name was already allocated.
    #[error("duplicate location: {0}")]
    DuplicateLocation(String),

    /// No location matches the given name or id.
    #[error("unknown location: {0}")]
    UnknownLocation(String),

    /// An interaction state id is not defined on a location.
    #[error("unknown interaction state '{state}' in {location}")]
    UnknownState {
        /// Location name.
        location: String,
        /// The missing state id.
        state: String,
    },

    /// A state names a parent that does not exist.
    #[error("state '{state}' in {location} has missing parent '{parent}'")]
    OrphanParent {
        /// Location name.
        location: String,
        /// The state with the dangling parent.
        state: String,
        /// The parent id that was not found.
        parent: String,
    },

    /// Following parent links from a state never terminates.
    #[error("parent chain of state '{state}' in {location} does not terminate")]
    StateCycle {
        /// Location name.
        location: String,
        /// The state whose chain loops.
        state: String,
    },

    /// Configuration could not be loaded or is inconsistent.
    #[error("configuration error: {0}")]
    Config(String),

    /// I/O failure while reading configuration.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
