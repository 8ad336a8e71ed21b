//! Core Error Types
//!
//! Defines the foundational error types used across the Content Remixer
//! workspace. These error types are dependency-free (only thiserror + std)
//! to keep the core crate lightweight.
//!
//! The main application crate extends these with additional error variants
//! (e.g., Database, OAuth, Generation) that require heavier dependencies.

use thiserror::Error;

/// Core error type for the Content Remixer workspace.
///
/// This is the minimal error set that the core crate needs. The application
/// crate defines additional variants for storage, network, etc.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Asset id not present in the static catalog
    #[error("Unknown asset: {0}")]
    UnknownAsset(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Not found errors
    #[error("Not found: {0}")]
    NotFound(String),

    /// Generic internal errors
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias for core errors
pub type CoreResult<T> = Result<T, CoreError>;

impl CoreError {
    /// Create an unknown-asset error
    pub fn unknown_asset(id: impl Into<String>) -> Self {
        Self::UnknownAsset(id.into())
    }

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a not found error
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}

/// Convert CoreError to a string
impl From<CoreError> for String {
    fn from(err: CoreError) -> String {
        err.to_string()
    }
}
