//! Error types for the CodeState webview client.

use thiserror::Error;

/// A shared error type for the client layer.
///
/// This provides typed, structured error variants with automatic conversion
/// from common error types via the `From` trait. The host reports its own
/// failures as plain strings inside response payloads; those are wrapped in
/// [`CodeStateError::Host`] so callers can tell them apart from local
/// validation or decoding problems.
#[derive(Error, Debug, Clone)]
pub enum CodeStateError {
    /// Client-side validation rejected a user intent before any message
    /// was sent to the host.
    #[error("Validation error: {0}")]
    Validation(String),

    /// The host reported a failure for an operation it owns.
    #[error("Host error ({operation}): {message}")]
    Host { operation: String, message: String },

    /// Entity not found in a store
    #[error("Entity not found: {entity_type} '{id}'")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },

    /// Serialization/deserialization error
    #[error("Serialization error: {message}")]
    Serialization { message: String },

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl CodeStateError {
    /// Creates a Validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Creates a Host error for the given operation
    pub fn host(operation: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Host {
            operation: operation.into(),
            message: message.into(),
        }
    }

    /// Creates a NotFound error
    pub fn not_found(entity_type: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type,
            id: id.into(),
        }
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Check if this is a Validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is a host-reported error
    pub fn is_host(&self) -> bool {
        matches!(self, Self::Host { .. })
    }

    /// Check if this is a NotFound error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

impl From<serde_json::Error> for CodeStateError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            message: err.to_string(),
        }
    }
}

/// A type alias for `Result<T, CodeStateError>`.
pub type Result<T> = std::result::Result<T, CodeStateError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_constructor() {
        let err = CodeStateError::validation("name is required");
        assert!(err.is_validation());
        assert_eq!(err.to_string(), "Validation error: name is required");
    }

    #[test]
    fn test_host_constructor() {
        let err = CodeStateError::host("session.create", "disk full");
        assert!(err.is_host());
        assert_eq!(err.to_string(), "Host error (session.create): disk full");
    }

    #[test]
    fn test_from_serde_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: CodeStateError = json_err.into();
        assert!(matches!(err, CodeStateError::Serialization { .. }));
    }
}
