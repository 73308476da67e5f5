//! Error types for wordgraph
//!
//! Only conditions that stop the pipeline are errors. Missing linguistic
//! resources and PageRank non-convergence are recovered locally and reported
//! as advisories or diagnostics instead.

use thiserror::Error;

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, WordGraphError>;

/// Main error type for wordgraph
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WordGraphError {
    /// The uploaded document could not be read or decoded
    #[error("Extraction failure: {message}")]
    ExtractionFailure { message: String },

    /// Configuration validation failed
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl WordGraphError {
    /// Create an extraction failure error
    pub fn extraction_failure(message: impl Into<String>) -> Self {
        Self::ExtractionFailure {
            message: message.into(),
        }
    }

    /// Create an invalid config error
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create a serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization {
            message: message.into(),
        }
    }

    /// Check if this error came from the document extractor
    pub fn is_extraction_failure(&self) -> bool {
        matches!(self, Self::ExtractionFailure { .. })
    }
}

impl From<serde_json::Error> for WordGraphError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization(err.to_string())
    }
}
