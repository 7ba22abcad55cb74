//! Alignment of the predicted similarity matrix with the reference table.

use std::collections::{BTreeMap, BTreeSet};

use tracing::debug;

use crate::error::{CoreError, CoreResult};
use crate::types::{Alignment, LabeledMatrix, ReferenceTriple};

/// Diagonal value assumed for the reference matrix.
///
/// The source tables carry no self-correlation rows; 1.0 matches the
/// self-correlation semantics of the domain. The off-diagonal extractor
/// never reads the diagonal, so the convention is observable only through
/// the matrix accessor.
pub const REFERENCE_DIAGONAL: f32 = 1.0;

/// Reshape the long-format reference table into a square matrix and reorder
/// both matrices to a shared label sequence.
///
/// The shared sequence is the lexicographically sorted intersection of the
/// labels present on both sides, so repeated runs produce identical
/// ordering. Labels present on only one side are dropped from both matrices
/// and surfaced in [`Alignment::dropped`]; dropping is intentional, not an
/// error.
///
/// A reference pair restated with the same value (within `tolerance`) is
/// accepted; a conflicting restatement fails with
/// [`CoreError::DuplicatePair`]. A pair of aligned labels with no reference
/// value at all fails with [`CoreError::MissingPair`], since an absent pair
/// is absent, never implicitly zero.
pub fn align(
    similarity: &LabeledMatrix,
    triples: &[ReferenceTriple],
    tolerance: f32,
) -> CoreResult<Alignment> {
    let pairs = collect_pairs(triples, tolerance)?;

    let reference_labels: BTreeSet<&str> = triples
        .iter()
        .flat_map(|t| [t.construct_1.as_str(), t.construct_2.as_str()])
        .collect();
    let predicted_labels: BTreeSet<&str> =
        similarity.labels().iter().map(String::as_str).collect();

    let shared: Vec<String> = predicted_labels
        .intersection(&reference_labels)
        .map(|l| l.to_string())
        .collect();
    let dropped: Vec<String> = predicted_labels
        .symmetric_difference(&reference_labels)
        .map(|l| l.to_string())
        .collect();

    debug!(
        shared = shared.len(),
        dropped = dropped.len(),
        "aligned label sets"
    );

    let mut reference = LabeledMatrix::zeroed(shared.clone());
    for i in 0..shared.len() {
        reference.set(i, i, REFERENCE_DIAGONAL);
        for j in (i + 1)..shared.len() {
            // BTreeSet iteration is sorted, so (shared[i], shared[j]) is
            // already the ordered key.
            let key = (shared[i].clone(), shared[j].clone());
            match pairs.get(&key) {
                Some(&value) => reference.set_symmetric(i, j, value),
                None => {
                    return Err(CoreError::MissingPair {
                        first: key.0,
                        second: key.1,
                    })
                }
            }
        }
    }

    let mut predicted = LabeledMatrix::zeroed(shared.clone());
    for (i, row_label) in shared.iter().enumerate() {
        let source_row = similarity
            .index_of(row_label)
            .expect("shared labels are a subset of similarity labels");
        for (j, col_label) in shared.iter().enumerate() {
            let source_col = similarity
                .index_of(col_label)
                .expect("shared labels are a subset of similarity labels");
            predicted.set(i, j, similarity.get(source_row, source_col));
        }
    }

    Ok(Alignment {
        predicted,
        reference,
        dropped,
    })
}

/// Index triples by unordered pair, rejecting conflicting duplicates.
fn collect_pairs(
    triples: &[ReferenceTriple],
    tolerance: f32,
) -> CoreResult<BTreeMap<(String, String), f32>> {
    let mut pairs: BTreeMap<(String, String), f32> = BTreeMap::new();

    for triple in triples {
        if triple.construct_1 == triple.construct_2 {
            // Self pairs restate the diagonal convention.
            if (triple.correlation - REFERENCE_DIAGONAL).abs() > tolerance {
                return Err(CoreError::DuplicatePair {
                    first: triple.construct_1.clone(),
                    second: triple.construct_2.clone(),
                    existing: REFERENCE_DIAGONAL,
                    conflicting: triple.correlation,
                });
            }
            continue;
        }

        let (first, second) = if triple.construct_1 < triple.construct_2 {
            (triple.construct_1.clone(), triple.construct_2.clone())
        } else {
            (triple.construct_2.clone(), triple.construct_1.clone())
        };

        match pairs.get(&(first.clone(), second.clone())) {
            Some(&existing) if (existing - triple.correlation).abs() > tolerance => {
                return Err(CoreError::DuplicatePair {
                    first,
                    second,
                    existing,
                    conflicting: triple.correlation,
                });
            }
            Some(_) => {}
            None => {
                pairs.insert((first, second), triple.correlation);
            }
        }
    }

    Ok(pairs)
}
