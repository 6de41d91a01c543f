//! Custom error types for FinTrack
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for FinTrack operations
#[derive(Error, Debug)]
pub enum FinTrackError {
    /// A caller-supplied argument was unusable (e.g. a blank path)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Validation errors for data models and parsed input
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// The requested file does not exist
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// An import file could not be read
    #[error("Import error: {0}")]
    Import(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),
}

impl FinTrackError {
    /// Create a "not found" error for accounts
    pub fn account_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Account",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for categories
    pub fn category_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Category",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for operations
    pub fn operation_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Operation",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Whether an import should skip the offending row rather than abort
    pub fn is_row_level(&self) -> bool {
        self.is_validation() || self.is_not_found()
    }
}

impl From<std::io::Error> for FinTrackError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

/// Result type alias for FinTrack operations
pub type FinTrackResult<T> = Result<T, FinTrackError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = FinTrackError::InvalidArgument("Path is required".into());
        assert_eq!(err.to_string(), "Invalid argument: Path is required");
    }

    #[test]
    fn test_not_found_error() {
        let err = FinTrackError::account_not_found("Main");
        assert_eq!(err.to_string(), "Account not found: Main");
        assert!(err.is_not_found());
        assert!(err.is_row_level());
    }

    #[test]
    fn test_row_level_classification() {
        assert!(FinTrackError::Validation("bad".into()).is_row_level());
        assert!(!FinTrackError::Storage("poisoned".into()).is_row_level());
        assert!(!FinTrackError::Io("disk full".into()).is_row_level());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: FinTrackError = io_err.into();
        assert!(matches!(err, FinTrackError::Io(_)));
    }
}
