//! Error types for the netguard pipeline

use thiserror::Error;

/// Result type alias for netguard operations
pub type Result<T> = std::result::Result<T, NetguardError>;

/// Main error type for the netguard pipeline
#[derive(Error, Debug)]
pub enum NetguardError {
    #[error("Data error: {0}")]
    DataError(String),

    #[error("Schema mismatch: expected {expected} columns, got {actual}")]
    SchemaMismatch { expected: usize, actual: usize },

    #[error("Preprocessing error: {0}")]
    PreprocessingError(String),

    #[error("Training error: {0}")]
    TrainingError(String),

    #[error("Invalid shape: expected {expected}, got {actual}")]
    ShapeError { expected: String, actual: String },

    #[error("Column not found: {0}")]
    ColumnNotFound(String),

    #[error("Model not fitted")]
    ModelNotFitted,

    #[error("Invalid parameter: {name} = {value}, {reason}")]
    InvalidParameter {
        name: String,
        value: String,
        reason: String,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl From<polars::error::PolarsError> for NetguardError {
    fn from(err: polars::error::PolarsError) -> Self {
        NetguardError::DataError(err.to_string())
    }
}

impl From<ndarray::ShapeError> for NetguardError {
    fn from(err: ndarray::ShapeError) -> Self {
        NetguardError::ShapeError {
            expected: "valid shape".to_string(),
            actual: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = NetguardError::DataError("test error".to_string());
        assert_eq!(err.to_string(), "Data error: test error");
    }

    #[test]
    fn test_schema_mismatch_display() {
        let err = NetguardError::SchemaMismatch {
            expected: 43,
            actual: 40,
        };
        assert_eq!(err.to_string(), "Schema mismatch: expected 43 columns, got 40");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: NetguardError = io_err.into();
        assert!(matches!(err, NetguardError::IoError(_)));
    }
}
