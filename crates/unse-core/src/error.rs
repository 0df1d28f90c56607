//! Error types for the destiny scoring engine.

use thiserror::Error;

/// Top-level error type for the scoring engine.
///
/// Most of the pipeline degrades to neutral results instead of erroring
/// (absent classifications, empty day-master inputs, classifier failures
/// collapsed at the multi-layer boundary). Errors surface only where the
/// caller violated an input contract that cannot be absorbed, such as a
/// month outside 1-12.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Invalid month: {month} (expected 1-12)")]
    InvalidMonth { month: u32 },

    #[error("Invalid range: {field} - {message}")]
    InvalidRange { field: String, message: String },

    #[error("Empty required input: {field}")]
    EmptyInput { field: String },

    #[error("Classifier failure: {0}")]
    ClassifierFailure(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for EngineError {
    fn from(err: serde_json::Error) -> Self {
        EngineError::SerializationError(err.to_string())
    }
}

/// Result type alias for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;
