//! Error types for the fitness_core library.

use std::io;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for fitness_core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The workout code in a package is not one of the known codes
    #[error("Unknown workout type: {0}")]
    UnknownWorkoutType(String),

    /// The package carried the wrong number of values for its workout code
    #[error("Package {code}: expected {expected} values, got {got}")]
    PackageArity {
        code: String,
        expected: usize,
        got: usize,
    },
}
