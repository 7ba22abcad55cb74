//! Strictly-upper-triangular extraction of aligned matrix pairs.

use crate::error::{CoreError, CoreResult};
use crate::types::{FlatPair, LabeledMatrix};

/// Extract the strictly-upper-triangular entries of both aligned matrices
/// as two parallel sequences.
///
/// Traversal is row-major over `(i, j)` with `i < j` and identical for both
/// inputs, so `predicted[k]` and `reference[k]` always refer to the same
/// label pair. Output length is `n * (n - 1) / 2`; a 0x0 or 1x1 matrix
/// yields empty sequences.
///
/// Fails with [`CoreError::ShapeMismatch`] if the two matrices differ in
/// size or label ordering.
pub fn flatten(predicted: &LabeledMatrix, reference: &LabeledMatrix) -> CoreResult<FlatPair> {
    if predicted.labels() != reference.labels() {
        return Err(CoreError::ShapeMismatch {
            expected: predicted.labels().join(", "),
            actual: reference.labels().join(", "),
        });
    }

    Ok(FlatPair {
        predicted: upper_triangle(predicted),
        reference: upper_triangle(reference),
    })
}

/// Strictly-upper-triangular values of one matrix, row-major with `i < j`.
pub fn upper_triangle(matrix: &LabeledMatrix) -> Vec<f32> {
    let n = matrix.len();
    let mut values = Vec::with_capacity(n.saturating_sub(1) * n / 2);
    for i in 0..n {
        for j in (i + 1)..n {
            values.push(matrix.get(i, j));
        }
    }
    values
}
