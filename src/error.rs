//! Error types for adomain-eval.

use thiserror::Error;

/// Result type for adomain-eval operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for adomain-eval operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Ground truth and prediction sequences have different lengths.
    ///
    /// Always an alignment bug upstream; nothing is truncated.
    #[error("Length mismatch: {ground_truth} ground-truth entries vs {prediction} predictions")]
    LengthMismatch {
        /// Number of ground-truth entries
        ground_truth: usize,
        /// Number of prediction entries
        prediction: usize,
    },

    /// A micro-averaged ratio has a zero denominator.
    #[error("Degenerate metric: {0}")]
    DegenerateMetric(String),

    /// A composite record key could not be parsed.
    #[error("Malformed key: {0}")]
    MalformedKey(String),

    /// Parse error.
    #[error("Parse error: {0}")]
    Parse(String),

    /// Dataset loading/joining error.
    #[error("Dataset error: {0}")]
    Dataset(String),

    /// Invalid configuration.
    #[error("Config error: {0}")]
    Config(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create a length mismatch error.
    pub fn length_mismatch(ground_truth: usize, prediction: usize) -> Self {
        Error::LengthMismatch {
            ground_truth,
            prediction,
        }
    }

    /// Create a degenerate metric error.
    pub fn degenerate(msg: impl Into<String>) -> Self {
        Error::DegenerateMetric(msg.into())
    }

    /// Create a malformed key error.
    pub fn malformed_key(msg: impl Into<String>) -> Self {
        Error::MalformedKey(msg.into())
    }

    /// Create a parse error.
    pub fn parse(msg: impl Into<String>) -> Self {
        Error::Parse(msg.into())
    }

    /// Create a dataset error.
    pub fn dataset(msg: impl Into<String>) -> Self {
        Error::Dataset(msg.into())
    }

    /// Create a config error.
    pub fn config(msg: impl Into<String>) -> Self {
        Error::Config(msg.into())
    }
}
