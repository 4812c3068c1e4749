//! Error types for in-place resampling operations.

use thiserror::Error;

/// Main error type for in-place resampling operations.
#[derive(Error, Debug)]
pub enum FilterError {
    /// The input image cannot be processed (e.g. it contains no voxels).
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The supplied transform is not a proper rigid motion.
    #[error("Unsupported transform: {0}")]
    UnsupportedTransform(String),

    /// The voxel buffer rank does not match the compile-time dimension.
    #[error("Dimension mismatch: {0}")]
    DimensionMismatch(String),
}

/// Result type for in-place resampling operations.
pub type Result<T> = std::result::Result<T, FilterError>;

impl FilterError {
    /// Create an invalid input error.
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Create an unsupported transform error.
    pub fn unsupported_transform(msg: impl Into<String>) -> Self {
        Self::UnsupportedTransform(msg.into())
    }

    /// Create a dimension mismatch error.
    pub fn dimension_mismatch(msg: impl Into<String>) -> Self {
        Self::DimensionMismatch(msg.into())
    }
}
