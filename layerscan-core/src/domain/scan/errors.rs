//! Capability error types

use std::time::Duration;

use super::value_objects::OsInfo;

/// Identity resolution error
#[derive(Debug, Clone, thiserror::Error)]
pub enum ResolveError {
    #[error("identity resolution cancelled")]
    Cancelled,

    #[error("identity resolution timed out after {0:?}")]
    TimedOut(Duration),

    #[error("image not found: {0}")]
    ImageNotFound(String),

    #[error("{0}")]
    Other(String),
}

/// Detection error
///
/// A detector that fails has already discarded any partial results.
#[derive(Debug, Clone, thiserror::Error)]
pub enum DetectError {
    #[error("failed to apply layers: unknown OS")]
    UnknownOs,

    #[error("detection cancelled")]
    Cancelled,

    #[error("vulnerability database error: {0}")]
    Database(String),

    /// Failure after the OS was already identified
    #[error("{message}")]
    Failed {
        message: String,
        os: Option<OsInfo>,
    },

    #[error("{0}")]
    Other(String),
}
