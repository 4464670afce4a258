//! Custom error types for Shelf
//!
//! Business-rule rejections (unknown member, no copies left, ...) are not errors;
//! they come back as outcome values from the catalog. This enum covers faults only.

use thiserror::Error;

/// The main error type for Shelf operations
#[derive(Error, Debug)]
pub enum ShelfError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Delimited record encoding errors
    #[error("CSV error: {0}")]
    Csv(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Validation errors for front-end input
    #[error("Validation error: {0}")]
    Validation(String),

    /// A model invariant would be broken (e.g. negative copy count)
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },
}

impl ShelfError {
    /// Create a "not found" error for books
    pub fn book_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Book",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for members
    pub fn member_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Member",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is an invariant violation
    pub fn is_invalid_operation(&self) -> bool {
        matches!(self, Self::InvalidOperation(_))
    }
}

impl From<std::io::Error> for ShelfError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ShelfError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<csv::Error> for ShelfError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err.to_string())
    }
}

/// Result type alias for Shelf operations
pub type ShelfResult<T> = Result<T, ShelfError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ShelfError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_not_found_error() {
        let err = ShelfError::member_not_found("M1");
        assert_eq!(err.to_string(), "Member not found: M1");
        assert!(err.is_not_found());
        assert!(!err.is_invalid_operation());
    }

    #[test]
    fn test_invalid_operation_error() {
        let err = ShelfError::InvalidOperation("copies would go negative".into());
        assert_eq!(err.to_string(), "Invalid operation: copies would go negative");
        assert!(err.is_invalid_operation());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let shelf_err: ShelfError = io_err.into();
        assert!(matches!(shelf_err, ShelfError::Io(_)));
    }
}
