//! Embedding providers for the construct comparison pipeline.
//!
//! The pipeline treats embedding generation as an opaque collaborator:
//! anything implementing [`EmbeddingProvider`] can back a run. The crate
//! ships [`StubEmbedder`], a deterministic hash-based provider used for
//! development and reproducible tests.

pub mod error;
pub mod provider;
pub mod stub;

pub use error::{EmbeddingError, EmbeddingResult};
pub use provider::{embed_checked, EmbeddingProvider};
pub use stub::StubEmbedder;

/// Default embedding dimension (MiniLM-class sentence encoders).
pub const DEFAULT_DIMENSION: usize = 384;
