//! Error types for configuration, generation and export

use std::path::PathBuf;

use crate::spatial::grid::Position;

/// Main error type for all generation operations
#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    /// Generator parameter validation failed
    #[error("Invalid parameter '{parameter}' = '{value}': {reason}")]
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// A segment walk ran past its step budget
    ///
    /// Each step visits a new on-path cell, so this indicates a broken
    /// visited-set rather than a legitimately long segment.
    #[error("Segment walk from ({}, {}) exceeded its budget of {budget} steps", .start[0], .start[1])]
    SegmentBudgetExceeded {
        /// Boundary endpoint the walk started from
        start: Position,
        /// Maximum number of steps the walk was allowed
        budget: usize,
    },

    /// Failed to read a configuration file
    #[error("Failed to read configuration '{}': {source}", .path.display())]
    ConfigLoad {
        /// Path to the configuration file
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Configuration file is not valid JSON for the generator
    #[error("Failed to parse configuration '{}': {source}", .path.display())]
    ConfigParse {
        /// Path to the configuration file
        path: PathBuf,
        /// Underlying JSON error
        source: serde_json::Error,
    },

    /// Failed to save a generated image to disk
    #[error("Failed to export image to '{}': {source}", .path.display())]
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    #[error("File system error during {operation} on '{}': {source}", .path.display())]
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

/// Convenience type alias for generation results
pub type Result<T> = std::result::Result<T, GenerationError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> GenerationError {
    GenerationError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
