//! Unified error types for the store crates.

use thiserror::Error;

/// Unified error type for the store item catalog.
///
/// Mapping itself is infallible; these variants cover the ambient layers
/// around it (identifier parsing, configuration, logging setup).
#[derive(Error, Debug)]
pub enum StoreError {
    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),

    /// Generic error wrapper
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl StoreError {
    /// Returns a machine-readable error code.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Configuration(_) => "CONFIGURATION_ERROR",
            Self::Internal(_) | Self::Other(_) => "INTERNAL_ERROR",
        }
    }

    /// Creates a validation error.
    #[must_use]
    pub fn validation<T: Into<String>>(message: T) -> Self {
        Self::Validation(message.into())
    }

    /// Creates a configuration error.
    #[must_use]
    pub fn configuration<T: Into<String>>(message: T) -> Self {
        Self::Configuration(message.into())
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal<T: Into<String>>(message: T) -> Self {
        Self::Internal(message.into())
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        Self::Internal(format!("JSON serialization error: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(StoreError::validation("bad id").error_code(), "VALIDATION_ERROR");
        assert_eq!(StoreError::configuration("missing").error_code(), "CONFIGURATION_ERROR");
        assert_eq!(StoreError::internal("oops").error_code(), "INTERNAL_ERROR");
    }

    #[test]
    fn test_other_error_code() {
        let err: StoreError = anyhow::anyhow!("wrapped").into();
        assert_eq!(err.error_code(), "INTERNAL_ERROR");
        assert_eq!(err.to_string(), "wrapped");
    }

    #[test]
    fn test_error_constructors() {
        let validation = StoreError::validation("invalid field");
        assert!(validation.to_string().contains("invalid field"));

        let configuration = StoreError::configuration("no such file");
        assert!(configuration.to_string().contains("no such file"));

        let internal = StoreError::internal("panic");
        assert!(internal.to_string().contains("panic"));
    }

    #[test]
    fn test_from_serde_json_error() {
        let err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let store_err: StoreError = err.into();
        assert!(matches!(store_err, StoreError::Internal(_)));
        assert!(store_err.to_string().contains("JSON serialization error"));
    }
}
