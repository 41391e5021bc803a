//! Error types for the profiling engine.
//!
//! Only two kinds of input are rejected: malformed shapes (mismatched column
//! lengths, unknown column names) and misconfigured thresholds. Degenerate but
//! valid data (zero rows, all-null columns, no numeric columns) never produces
//! an error; the affected results are simply empty or absent.
//!
//! Errors serialize as `{ "code": ..., "message": ... }` so a caller can hand
//! them to a UI or a JSON consumer unchanged.

use serde::Serialize;
use serde::ser::SerializeStruct;
use thiserror::Error;

use crate::config::ConfigValidationError;

/// The main error type for profiling operations.
#[derive(Error, Debug)]
pub enum ProfilingError {
    /// Column was not found in the dataset.
    #[error("Column '{0}' not found in dataset")]
    ColumnNotFound(String),

    /// Columns handed to the dataset builder have different lengths.
    #[error("Column '{column}' has {found} rows, expected {expected}")]
    ShapeMismatch {
        column: String,
        expected: usize,
        found: usize,
    },

    /// Two columns share the same name.
    #[error("Duplicate column name '{0}'")]
    DuplicateColumn(String),

    /// Invalid threshold or parameter supplied by the caller.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Polars error wrapper.
    #[error("Polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error with context.
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<ProfilingError>,
    },
}

impl ProfilingError {
    /// Add context to an error.
    pub fn with_context(self, context: impl Into<String>) -> Self {
        ProfilingError::WithContext {
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// Stable error code, independent of the message text.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::ColumnNotFound(_) => "COLUMN_NOT_FOUND",
            Self::ShapeMismatch { .. } => "SHAPE_MISMATCH",
            Self::DuplicateColumn(_) => "DUPLICATE_COLUMN",
            Self::InvalidConfig(_) => "INVALID_CONFIG",
            Self::Polars(_) => "POLARS_ERROR",
            Self::Json(_) => "JSON_ERROR",
            Self::WithContext { source, .. } => source.error_code(),
        }
    }

    /// Whether the error stems from the shape of the input data rather than
    /// from configuration or an internal failure.
    pub fn is_input_shape_error(&self) -> bool {
        match self {
            Self::ColumnNotFound(_) | Self::ShapeMismatch { .. } | Self::DuplicateColumn(_) => {
                true
            }
            Self::WithContext { source, .. } => source.is_input_shape_error(),
            _ => false,
        }
    }
}

impl From<ConfigValidationError> for ProfilingError {
    fn from(err: ConfigValidationError) -> Self {
        ProfilingError::InvalidConfig(err.to_string())
    }
}

impl Serialize for ProfilingError {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut state = serializer.serialize_struct("ProfilingError", 2)?;
        state.serialize_field("code", &self.error_code())?;
        state.serialize_field("message", &self.to_string())?;
        state.end()
    }
}

/// Result type alias for profiling operations.
pub type Result<T> = std::result::Result<T, ProfilingError>;

/// Extension trait for adding context to Results.
pub trait ResultExt<T> {
    /// Add context to an error result.
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T> ResultExt<T> for Result<T> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.with_context(context))
    }
}

impl<T> ResultExt<T> for std::result::Result<T, polars::error::PolarsError> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| ProfilingError::Polars(e).with_context(context))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code() {
        assert_eq!(
            ProfilingError::ColumnNotFound("age".to_string()).error_code(),
            "COLUMN_NOT_FOUND"
        );
        assert_eq!(
            ProfilingError::ShapeMismatch {
                column: "b".to_string(),
                expected: 3,
                found: 2,
            }
            .error_code(),
            "SHAPE_MISMATCH"
        );
        assert_eq!(
            ProfilingError::InvalidConfig("top_k".to_string()).error_code(),
            "INVALID_CONFIG"
        );
    }

    #[test]
    fn test_is_input_shape_error() {
        assert!(ProfilingError::ColumnNotFound("x".to_string()).is_input_shape_error());
        assert!(ProfilingError::DuplicateColumn("x".to_string()).is_input_shape_error());
        assert!(!ProfilingError::InvalidConfig("x".to_string()).is_input_shape_error());
    }

    #[test]
    fn test_error_serialization() {
        let error = ProfilingError::ColumnNotFound("user_id".to_string());
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("COLUMN_NOT_FOUND"));
        assert!(json.contains("user_id"));
    }

    #[test]
    fn test_shape_mismatch_message() {
        let error = ProfilingError::ShapeMismatch {
            column: "height".to_string(),
            expected: 4,
            found: 3,
        };
        assert_eq!(error.to_string(), "Column 'height' has 3 rows, expected 4");
    }

    #[test]
    fn test_with_context() {
        let error =
            ProfilingError::ColumnNotFound("id".to_string()).with_context("Computing quality flags");
        assert!(error.to_string().contains("Computing quality flags"));
        assert_eq!(error.error_code(), "COLUMN_NOT_FOUND");
        assert!(error.is_input_shape_error());
    }

    #[test]
    fn test_config_error_conversion() {
        let error: ProfilingError = ConfigValidationError::InvalidMaxCategories(0).into();
        assert_eq!(error.error_code(), "INVALID_CONFIG");
    }
}
