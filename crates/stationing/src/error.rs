//! Error types for station/offset computation.

use thiserror::Error;

/// Result type alias for station/offset operations.
pub type StationResult<T> = Result<T, StationError>;

/// Errors surfaced by the library.
///
/// Cancellation is not an error: a cancelled run returns its partial rows
/// with `RunOutcome::cancelled` set.
#[derive(Debug, Error)]
pub enum StationError {
    /// Polyline has fewer than two vertices and carries no stations.
    #[error("invalid alignment: {vertices} vertices, need at least 2")]
    InvalidAlignment {
        /// Number of vertices found.
        vertices: usize,
    },

    /// Output destination could not be opened or written.
    #[error("output sink unavailable: {0}")]
    SinkUnavailable(#[source] std::io::Error),

    /// Run configuration is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl StationError {
    /// Create an invalid alignment error.
    #[must_use]
    pub const fn invalid_alignment(vertices: usize) -> Self {
        Self::InvalidAlignment { vertices }
    }

    /// Create an invalid configuration error.
    #[must_use]
    pub fn invalid_config(details: impl Into<String>) -> Self {
        Self::InvalidConfig(details.into())
    }
}
