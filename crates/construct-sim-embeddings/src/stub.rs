//! Deterministic stub provider for development and tests.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use async_trait::async_trait;
use tracing::trace;

use crate::error::{EmbeddingError, EmbeddingResult};
use crate::provider::EmbeddingProvider;

/// Stub embedder backed by input hashing.
///
/// The text is hashed once to a 64-bit seed, then the seed is expanded
/// into one pseudo-random value per dimension and the result unit-
/// normalized. Same input, same vector, across instances and processes.
#[derive(Debug, Clone)]
pub struct StubEmbedder {
    dimension: usize,
    max_input_length: usize,
}

impl StubEmbedder {
    pub fn new(dimension: usize, max_input_length: usize) -> Self {
        Self {
            dimension,
            max_input_length,
        }
    }

    /// Stub with the crate default dimension and a 512-character cap.
    pub fn default_dimension() -> Self {
        Self::new(crate::DEFAULT_DIMENSION, 512)
    }

    fn generate(&self, text: &str) -> Vec<f32> {
        let truncated = truncate_chars(text, self.max_input_length);
        trace!(len = truncated.len(), "generating stub embedding");

        let mut hasher = DefaultHasher::new();
        truncated.hash(&mut hasher);
        let mut state = hasher.finish();

        let mut embedding: Vec<f32> = (0..self.dimension)
            .map(|_| {
                state = split_mix(state);
                // Top 24 bits, mapped to [-1, 1].
                ((state >> 40) as f32 / (1u64 << 23) as f32) - 1.0
            })
            .collect();

        let norm: f32 = embedding.iter().map(|x| x * x).sum::<f32>().sqrt();
        if norm > 0.0 {
            for v in &mut embedding {
                *v /= norm;
            }
        }

        embedding
    }
}

impl Default for StubEmbedder {
    fn default() -> Self {
        Self::default_dimension()
    }
}

#[async_trait]
impl EmbeddingProvider for StubEmbedder {
    async fn embed(&self, text: &str) -> EmbeddingResult<Vec<f32>> {
        if text.trim().is_empty() {
            return Err(EmbeddingError::InvalidInput(
                "cannot embed empty text".to_string(),
            ));
        }
        Ok(self.generate(text))
    }

    fn dimension(&self) -> usize {
        self.dimension
    }

    fn model_name(&self) -> &str {
        "stub"
    }

    fn max_input_length(&self) -> usize {
        self.max_input_length
    }
}

/// SplitMix64 step; full-period over u64, so successive states never repeat
/// within one embedding.
fn split_mix(state: u64) -> u64 {
    let mut z = state.wrapping_add(0x9e37_79b9_7f4a_7c15);
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    z ^ (z >> 31)
}

/// Truncate to at most `max_chars` characters, respecting char boundaries.
fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_index, _)) => &text[..byte_index],
        None => text,
    }
}
