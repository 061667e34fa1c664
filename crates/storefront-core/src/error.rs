//! Error types for the SportZone storefront

use thiserror::Error;

/// Main error type for storefront operations.
///
/// Form validation failures are not errors in this sense: they are reported
/// as [`crate::validation::ValidationError`] values inside a
/// [`crate::form::SubmitOutcome`], since they are ordinary user feedback.
#[derive(Error, Debug)]
pub enum StorefrontError {
    /// A catalog record is missing a required field
    #[error("Invalid product {id}: {reason}")]
    InvalidProduct { id: u32, reason: String },

    /// Configuration could not be parsed or holds out-of-range values
    #[error("Configuration error: {0}")]
    Config(String),

    /// Configuration JSON was malformed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A global tracing subscriber was already installed
    #[error("Logging error: {0}")]
    Logging(String),
}

/// Result type alias using StorefrontError
pub type StorefrontResult<T> = Result<T, StorefrontError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = StorefrontError::InvalidProduct {
            id: 7,
            reason: "name is empty".to_string(),
        };
        assert_eq!(format!("{}", err), "Invalid product 7: name is empty");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: StorefrontError = io_err.into();
        assert!(matches!(err, StorefrontError::Io(_)));
    }

    #[test]
    fn test_error_from_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: StorefrontError = json_err.into();
        assert!(matches!(err, StorefrontError::Serialization(_)));
    }
}
