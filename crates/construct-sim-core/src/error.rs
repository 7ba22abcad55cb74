//! Error types for construct-sim-core.

use thiserror::Error;

/// Top-level error type for the construct comparison pipeline.
///
/// Every variant names the offending entity (label, pair, or series).
/// All errors are fatal to the current run: a violated precondition aborts
/// before a result is produced rather than emitting a partial value.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("embedding for construct '{label}' has dimension {actual}, expected {expected}")]
    DimensionMismatch {
        label: String,
        expected: usize,
        actual: usize,
    },

    #[error("construct '{label}' has a zero-norm vector, cosine similarity is undefined")]
    DegenerateVector { label: String },

    #[error(
        "reference pair ({first}, {second}) appears twice with conflicting values: {existing} vs {conflicting}"
    )]
    DuplicatePair {
        first: String,
        second: String,
        existing: f32,
        conflicting: f32,
    },

    #[error("reference value missing for aligned pair ({first}, {second})")]
    MissingPair { first: String, second: String },

    #[error("matrix shape mismatch: [{expected}] vs [{actual}]")]
    ShapeMismatch { expected: String, actual: String },

    #[error("insufficient data for correlation: need at least 2 pairs, got {len}")]
    InsufficientData { len: usize },

    #[error("zero variance in {series} series, correlation is undefined")]
    ZeroVariance { series: String },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for CoreError {
    fn from(err: serde_json::Error) -> Self {
        CoreError::SerializationError(err.to_string())
    }
}

impl From<config::ConfigError> for CoreError {
    fn from(err: config::ConfigError) -> Self {
        CoreError::ConfigError(err.to_string())
    }
}

/// Result type alias for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimension_mismatch_names_label() {
        let err = CoreError::DimensionMismatch {
            label: "Extraversion".to_string(),
            expected: 384,
            actual: 768,
        };
        let msg = err.to_string();
        assert!(msg.contains("Extraversion"));
        assert!(msg.contains("384"));
        assert!(msg.contains("768"));
    }

    #[test]
    fn test_duplicate_pair_names_both_labels() {
        let err = CoreError::DuplicatePair {
            first: "Anxiety".to_string(),
            second: "Neuroticism".to_string(),
            existing: 0.7,
            conflicting: 0.2,
        };
        let msg = err.to_string();
        assert!(msg.contains("Anxiety"));
        assert!(msg.contains("Neuroticism"));
    }

    #[test]
    fn test_zero_variance_names_series() {
        let err = CoreError::ZeroVariance {
            series: "reference".to_string(),
        };
        assert!(err.to_string().contains("reference"));
    }
}
