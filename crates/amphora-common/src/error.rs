//! Error types for amphora

use thiserror::Error;

/// Result type alias for amphora operations
pub type Result<T> = std::result::Result<T, AmphoraError>;

/// Unified error type for all amphora operations
#[derive(Error, Debug, Clone)]
pub enum AmphoraError {
    /// A required argument was missing or empty at an API boundary.
    ///
    /// Raised before any state change; the message names the offending
    /// parameter. Callers must fix the call site rather than retry.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A structure declaration or lookup violated the schema contract.
    ///
    /// Covers incomplete structure definitions (missing relation name or
    /// empty field set), lookups of undefined fields, and the unsupported
    /// field-removal operation.
    #[error("Structure error: {0}")]
    Structure(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl AmphoraError {
    /// Returns true if this error is a caller-side argument defect
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, AmphoraError::InvalidArgument(_))
    }

    /// Returns true if this error is a structure contract violation
    pub fn is_structure(&self) -> bool {
        matches!(self, AmphoraError::Structure(_))
    }
}

impl From<serde_json::Error> for AmphoraError {
    fn from(err: serde_json::Error) -> Self {
        AmphoraError::Serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_invalid_argument() {
        let err = AmphoraError::InvalidArgument("'name' cannot be empty".to_string());
        assert_eq!(err.to_string(), "Invalid argument: 'name' cannot be empty");
    }

    #[test]
    fn test_error_display_structure() {
        let err = AmphoraError::Structure("no field definition".to_string());
        assert_eq!(err.to_string(), "Structure error: no field definition");
    }

    #[test]
    fn test_error_display_serialization() {
        let err = AmphoraError::Serialization("invalid JSON".to_string());
        assert_eq!(err.to_string(), "Serialization error: invalid JSON");
    }

    #[test]
    fn test_from_serde_json_error() {
        let json_err = serde_json::from_str::<String>("invalid").unwrap_err();
        let err: AmphoraError = json_err.into();
        assert!(matches!(err, AmphoraError::Serialization(_)));
    }

    #[test]
    #[allow(clippy::unnecessary_literal_unwrap)] // Testing Result type alias
    fn test_result_type_ok() {
        let result: Result<i32> = Ok(42);
        assert_eq!(result.unwrap(), 42);
    }

    #[test]
    fn test_result_type_err() {
        let result: Result<i32> = Err(AmphoraError::Structure("failed".to_string()));
        assert!(result.is_err());
    }

    #[test]
    fn test_is_invalid_argument() {
        assert!(AmphoraError::InvalidArgument("test".to_string()).is_invalid_argument());
        assert!(!AmphoraError::Structure("test".to_string()).is_invalid_argument());
        assert!(!AmphoraError::Serialization("test".to_string()).is_invalid_argument());
    }

    #[test]
    fn test_is_structure() {
        assert!(AmphoraError::Structure("test".to_string()).is_structure());
        assert!(!AmphoraError::InvalidArgument("test".to_string()).is_structure());
        assert!(!AmphoraError::Serialization("test".to_string()).is_structure());
    }
}
