//! Core pipeline for comparing model-derived construct similarity against
//! an empirical reference table.
//!
//! The crate is pure and synchronous: callers supply already-embedded items
//! and a parsed reference table, and get back a [`PipelineReport`] or a
//! [`CoreError`] naming the offending entity. Embedding providers and I/O
//! live in sibling crates.

pub mod config;
pub mod error;
pub mod pipeline;
pub mod types;

pub use config::{Config, EmbeddingConfig, LoggingConfig, PipelineConfig};
pub use error::{CoreError, CoreResult};
pub use pipeline::run;
pub use types::{
    Alignment, CorrelationScore, FlatPair, Item, LabeledMatrix, PipelineReport, ReferenceTriple,
};
