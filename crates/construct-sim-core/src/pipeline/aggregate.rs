//! Construct aggregation: one mean vector per construct label.

use std::collections::BTreeMap;

use crate::error::{CoreError, CoreResult};

/// Group item embeddings by construct label and compute the per-dimension
/// arithmetic mean of each group.
///
/// Every embedding must share the same dimensionality; the first item seen
/// fixes the expected dimension and any later disagreement fails with
/// [`CoreError::DimensionMismatch`] naming the offending label.
///
/// The mean is order-independent, so the output is deterministic regardless
/// of input order. A label with zero items never appears, since labels are
/// derived from the items themselves.
pub fn aggregate(items: &[(String, Vec<f32>)]) -> CoreResult<BTreeMap<String, Vec<f32>>> {
    let mut sums: BTreeMap<String, (Vec<f32>, usize)> = BTreeMap::new();
    let mut expected: Option<usize> = None;

    for (label, embedding) in items {
        let dim = *expected.get_or_insert(embedding.len());
        if embedding.len() != dim {
            return Err(CoreError::DimensionMismatch {
                label: label.clone(),
                expected: dim,
                actual: embedding.len(),
            });
        }

        let (sum, count) = sums
            .entry(label.clone())
            .or_insert_with(|| (vec![0.0; dim], 0));
        for (acc, value) in sum.iter_mut().zip(embedding.iter()) {
            *acc += value;
        }
        *count += 1;
    }

    Ok(sums
        .into_iter()
        .map(|(label, (sum, count))| {
            let mean = sum.into_iter().map(|v| v / count as f32).collect();
            (label, mean)
        })
        .collect())
}
