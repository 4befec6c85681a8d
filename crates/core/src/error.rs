//! Error types for roomlay.

use thiserror::Error;

/// Result type alias for roomlay operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised for malformed input before any solving begins.
///
/// A search that exhausts every candidate pose is not an error: it is
/// recorded per item in the [`crate::result::ResultSet`] and the solve
/// continues with the remaining items.
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid room boundary provided.
    #[error("Invalid room boundary: {0}")]
    InvalidBoundary(String),

    /// Invalid door provided.
    #[error("Invalid door: {0}")]
    InvalidDoor(String),

    /// Invalid item dimensions provided.
    #[error("Invalid item: {0}")]
    InvalidItem(String),
}
