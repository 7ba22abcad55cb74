//! The embedding provider abstraction.

use async_trait::async_trait;

use crate::error::{EmbeddingError, EmbeddingResult};

/// Text-to-vector conversion backend.
///
/// Providers are opaque to the pipeline: any implementation that returns
/// fixed-dimension finite vectors can back a comparison run. All methods
/// must be deterministic per input for a given provider instance so that
/// repeated runs over the same items reproduce the same report.
#[async_trait]
pub trait EmbeddingProvider: Send + Sync {
    /// Generate the embedding for a single text.
    async fn embed(&self, text: &str) -> EmbeddingResult<Vec<f32>>;

    /// Generate embeddings for multiple texts.
    ///
    /// Default implementation calls `embed` per text; implementations may
    /// override for batch optimization.
    async fn embed_batch(&self, texts: &[&str]) -> EmbeddingResult<Vec<Vec<f32>>> {
        let mut results = Vec::with_capacity(texts.len());
        for text in texts {
            results.push(self.embed(text).await?);
        }
        Ok(results)
    }

    /// Output dimension of every embedding this provider returns.
    fn dimension(&self) -> usize;

    /// Model name/identifier.
    fn model_name(&self) -> &str;

    /// Maximum input length in characters; longer inputs are truncated.
    fn max_input_length(&self) -> usize;
}

/// Embed a batch and verify every returned vector against the provider's
/// declared dimension.
///
/// Providers are external collaborators, so their output is checked at
/// this boundary rather than trusted.
pub async fn embed_checked(
    provider: &dyn EmbeddingProvider,
    texts: &[&str],
) -> EmbeddingResult<Vec<Vec<f32>>> {
    let embeddings = provider.embed_batch(texts).await?;

    for embedding in &embeddings {
        if embedding.len() != provider.dimension() {
            return Err(EmbeddingError::DimensionMismatch {
                expected: provider.dimension(),
                actual: embedding.len(),
            });
        }
        if embedding.iter().any(|v| !v.is_finite()) {
            return Err(EmbeddingError::GenerationError(format!(
                "provider {} returned a non-finite value",
                provider.model_name()
            )));
        }
    }

    Ok(embeddings)
}
