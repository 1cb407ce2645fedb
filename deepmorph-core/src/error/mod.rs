//! Core error types for DeepMorph

use thiserror::Error;

/// Main error type for DeepMorph operations
#[derive(Error, Debug)]
pub enum DeepmorphError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Parsing error: {0}")]
    Parse(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Catalog exhausted: {0}")]
    CatalogExhausted(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Other error: {0}")]
    Other(String),
}

/// Result type alias for DeepMorph operations
pub type DeepmorphResult<T> = Result<T, DeepmorphError>;

impl From<serde_json::Error> for DeepmorphError {
    fn from(err: serde_json::Error) -> Self {
        DeepmorphError::Serialization(err.to_string())
    }
}

impl From<anyhow::Error> for DeepmorphError {
    fn from(err: anyhow::Error) -> Self {
        DeepmorphError::Other(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_error_display() {
        let io_error = DeepmorphError::Io(io::Error::new(io::ErrorKind::NotFound, "file not found"));
        assert!(format!("{}", io_error).contains("IO error"));

        let config_error = DeepmorphError::Configuration("missing field".to_string());
        assert_eq!(format!("{}", config_error), "Configuration error: missing field");

        let parse_error = DeepmorphError::Parse("bad header".to_string());
        assert_eq!(format!("{}", parse_error), "Parsing error: bad header");

        let input_error = DeepmorphError::InvalidInput("empty sequence".to_string());
        assert_eq!(format!("{}", input_error), "Invalid input: empty sequence");

        let exhausted = DeepmorphError::CatalogExhausted("no profiles".to_string());
        assert_eq!(format!("{}", exhausted), "Catalog exhausted: no profiles");

        let not_found = DeepmorphError::NotFound("catalog.json".to_string());
        assert_eq!(format!("{}", not_found), "Not found: catalog.json");

        let other = DeepmorphError::Other("unknown".to_string());
        assert_eq!(format!("{}", other), "Other error: unknown");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "access denied");
        let err: DeepmorphError = io_err.into();

        match err {
            DeepmorphError::Io(e) => assert_eq!(e.kind(), io::ErrorKind::PermissionDenied),
            _ => panic!("Expected Io error variant"),
        }
    }

    #[test]
    fn test_serde_json_error_conversion() {
        let parse_result: Result<serde_json::Value, serde_json::Error> =
            serde_json::from_str("{invalid json}");

        let err: DeepmorphError = parse_result.unwrap_err().into();
        match err {
            DeepmorphError::Serialization(msg) => assert!(msg.contains("key must be a string")),
            _ => panic!("Expected Serialization error variant"),
        }
    }

    #[test]
    fn test_anyhow_error_conversion() {
        let err: DeepmorphError = anyhow::anyhow!("custom error message").into();

        match err {
            DeepmorphError::Other(msg) => assert_eq!(msg, "custom error message"),
            _ => panic!("Expected Other error variant"),
        }
    }
}
