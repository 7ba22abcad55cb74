//! Error types for embedding operations.

use thiserror::Error;

/// Embedding-specific errors.
#[derive(Debug, Error)]
pub enum EmbeddingError {
    /// Input validation failed.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Embedding generation failed.
    #[error("Failed to generate embedding: {0}")]
    GenerationError(String),

    /// Provider returned a vector of the wrong length.
    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
}

/// Result type for embedding operations.
pub type EmbeddingResult<T> = Result<T, EmbeddingError>;
