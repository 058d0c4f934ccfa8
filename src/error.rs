//! Error types for resonance.

use thiserror::Error;

/// Errors raised while building patterns, training, or restoring a model.
#[derive(Error, Debug)]
pub enum ArtError {
    /// JSON parsing error
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// A pattern element was neither 0 nor 1
    #[error("Non-binary attribute at index {index}: {value}")]
    NonBinary { index: usize, value: String },

    /// Training patterns of differing length
    #[error("Dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    /// Empty input where non-empty was required
    #[error("Empty input: {0}")]
    EmptyInput(String),

    /// All-zero training pattern; the vigilance ratio is undefined for it
    #[error("Training pattern {index} has no set attributes")]
    ZeroPattern { index: usize },

    /// Vigilance outside (0, 1]
    #[error("Vigilance must be in (0, 1], got {0}")]
    InvalidVigilance(f64),

    /// Other invalid training configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Epoch cap reached before the weights stopped changing
    #[error("Training did not converge within {epochs} epochs")]
    NotConverged { epochs: usize },

    /// Snapshot matrices with inconsistent shape
    #[error("Malformed model: {0}")]
    MalformedModel(String),
}

/// Result type alias for resonance operations.
pub type Result<T> = std::result::Result<T, ArtError>;
