//! The construct comparison pipeline.
//!
//! Five stages, each a pure function over the previous stage's output:
//! [`aggregate`] item embeddings into construct vectors, [`similarity`]
//! builds the cosine matrix, [`align`] reshapes the reference table and
//! reorders both matrices to a shared label sequence, [`flatten`] extracts
//! the strictly-upper-triangular values, and [`correlate`] scores the two
//! flattened sequences. [`run`] chains them.

pub mod aggregate;
pub mod align;
pub mod correlate;
pub mod flatten;
pub mod similarity;

use tracing::info;

use crate::config::PipelineConfig;
use crate::error::CoreResult;
use crate::types::{PipelineReport, ReferenceTriple};

/// Run the full pipeline over embedded items and a reference table.
///
/// Any stage failure aborts the run; there are no partial results. The
/// report carries both correlations, the shared label sequence, the labels
/// dropped during alignment, and the number of off-diagonal pairs scored.
pub fn run(
    items: &[(String, Vec<f32>)],
    triples: &[ReferenceTriple],
    config: &PipelineConfig,
) -> CoreResult<PipelineReport> {
    let vectors = aggregate::aggregate(items)?;
    info!(
        items = items.len(),
        constructs = vectors.len(),
        "aggregated item embeddings"
    );

    let similarity = similarity::build(&vectors)?;

    let aligned = align::align(&similarity, triples, config.duplicate_tolerance)?;
    if !aligned.dropped.is_empty() {
        info!(dropped = ?aligned.dropped, "labels present on only one side");
    }

    let flat = flatten::flatten(&aligned.predicted, &aligned.reference)?;
    let pairs = flat.predicted.len();

    let score = correlate::score(&flat)?;
    info!(
        raw = score.raw,
        absolute = score.absolute,
        pairs,
        "scored matrix pair"
    );

    Ok(PipelineReport {
        score,
        labels: aligned.predicted.labels().to_vec(),
        dropped: aligned.dropped,
        pairs,
    })
}
