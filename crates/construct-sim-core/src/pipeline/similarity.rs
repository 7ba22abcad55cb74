//! Pairwise cosine similarity across construct vectors.

use std::collections::BTreeMap;

use crate::error::{CoreError, CoreResult};
use crate::types::LabeledMatrix;

/// Build the label-indexed cosine similarity matrix over construct vectors.
///
/// The value for each unordered pair is computed once and written to both
/// cells, so the output is exactly symmetric (bit-exact, not merely within
/// tolerance). Diagonal entries are computed like any other pair and come
/// out as 1.0 within floating-point tolerance for non-degenerate vectors.
///
/// A zero-norm vector makes cosine similarity undefined; that fails with
/// [`CoreError::DegenerateVector`] naming the offending label rather than
/// silently producing NaN or zero.
pub fn build(vectors: &BTreeMap<String, Vec<f32>>) -> CoreResult<LabeledMatrix> {
    let labels: Vec<String> = vectors.keys().cloned().collect();
    let rows: Vec<&Vec<f32>> = vectors.values().collect();

    let mut norms = Vec::with_capacity(rows.len());
    for (label, vector) in labels.iter().zip(rows.iter()) {
        let norm = l2_norm(vector);
        if norm < f32::EPSILON {
            return Err(CoreError::DegenerateVector {
                label: label.clone(),
            });
        }
        norms.push(norm);
    }

    let mut matrix = LabeledMatrix::zeroed(labels);
    for i in 0..rows.len() {
        for j in i..rows.len() {
            let cosine = dot(rows[i], rows[j]) / (norms[i] * norms[j]);
            matrix.set_symmetric(i, j, cosine);
        }
    }

    Ok(matrix)
}

/// Cosine similarity between two equal-length vectors.
///
/// Returns an error naming `label` when either vector has zero norm.
pub fn cosine_similarity(a: &[f32], b: &[f32], label: &str) -> CoreResult<f32> {
    let denom = l2_norm(a) * l2_norm(b);
    if denom < f32::EPSILON {
        return Err(CoreError::DegenerateVector {
            label: label.to_string(),
        });
    }
    Ok(dot(a, b) / denom)
}

#[inline]
fn dot(a: &[f32], b: &[f32]) -> f32 {
    a.iter().zip(b.iter()).map(|(x, y)| x * y).sum()
}

#[inline]
fn l2_norm(v: &[f32]) -> f32 {
    v.iter().map(|x| x * x).sum::<f32>().sqrt()
}
