//! Error types for disk-sched.

use thiserror::Error;

use crate::core::geometry::Track;

/// Result type alias for disk-sched operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for disk-sched.
#[derive(Error, Debug)]
pub enum Error {
    /// A request or head position lies outside `[0, disk_size)`.
    #[error("track {value} is out of bounds (0-{})", .disk_size.saturating_sub(1))]
    OutOfBounds { value: Track, disk_size: Track },

    /// Policy name did not match any supported algorithm.
    #[error("unknown algorithm: {0}")]
    UnknownAlgorithm(String),

    /// Direction string was neither "right" nor "left".
    #[error("invalid direction: {0} (expected \"right\" or \"left\")")]
    InvalidDirection(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
