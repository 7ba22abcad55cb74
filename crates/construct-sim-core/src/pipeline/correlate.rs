//! Pearson correlation scoring of the flattened matrix pair.

use crate::error::{CoreError, CoreResult};
use crate::types::{CorrelationScore, FlatPair};

/// Score a flattened pair: Pearson correlation of the raw sequences and,
/// independently, of their element-wise absolute values.
///
/// Both results are required outputs. Either pass can fail on its own: a
/// sequence of values `{-c, +c}` has variance in the raw pass but none in
/// the absolute pass.
pub fn score(pair: &FlatPair) -> CoreResult<CorrelationScore> {
    let raw = pearson(&pair.predicted, &pair.reference, "predicted", "reference")?;

    let abs_predicted: Vec<f32> = pair.predicted.iter().map(|v| v.abs()).collect();
    let abs_reference: Vec<f32> = pair.reference.iter().map(|v| v.abs()).collect();
    let absolute = pearson(
        &abs_predicted,
        &abs_reference,
        "absolute predicted",
        "absolute reference",
    )?;

    Ok(CorrelationScore { raw, absolute })
}

/// Pearson correlation coefficient between two equal-length sequences.
///
/// Fails with [`CoreError::InsufficientData`] for fewer than two pairs and
/// with [`CoreError::ZeroVariance`] naming the degenerate series.
pub fn pearson(a: &[f32], b: &[f32], a_name: &str, b_name: &str) -> CoreResult<f32> {
    if a.len() != b.len() {
        return Err(CoreError::ShapeMismatch {
            expected: format!("{} values", a.len()),
            actual: format!("{} values", b.len()),
        });
    }
    if a.len() < 2 {
        return Err(CoreError::InsufficientData { len: a.len() });
    }

    let n = a.len() as f32;
    let mean_a = a.iter().sum::<f32>() / n;
    let mean_b = b.iter().sum::<f32>() / n;

    let mut cov = 0.0f32;
    let mut var_a = 0.0f32;
    let mut var_b = 0.0f32;
    for (x, y) in a.iter().zip(b.iter()) {
        let dx = x - mean_a;
        let dy = y - mean_b;
        cov += dx * dy;
        var_a += dx * dx;
        var_b += dy * dy;
    }

    if var_a < f32::EPSILON {
        return Err(CoreError::ZeroVariance {
            series: a_name.to_string(),
        });
    }
    if var_b < f32::EPSILON {
        return Err(CoreError::ZeroVariance {
            series: b_name.to_string(),
        });
    }

    Ok(cov / (var_a.sqrt() * var_b.sqrt()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_perfect_positive_correlation() {
        let r = pearson(&[1.0, 2.0, 3.0], &[2.0, 4.0, 6.0], "a", "b").unwrap();
        assert!((r - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_perfect_negative_correlation() {
        let r = pearson(&[1.0, 2.0, 3.0], &[3.0, 2.0, 1.0], "a", "b").unwrap();
        assert!((r + 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_known_value() {
        // cov = 4, both variances 5, so r = 4/5 exactly.
        let a = [1.0, 2.0, 3.0, 4.0];
        let b = [1.0, 3.0, 2.0, 4.0];
        let r = pearson(&a, &b, "a", "b").unwrap();
        assert!((r - 0.8).abs() < 1e-6);
    }

    #[test]
    fn test_single_element_is_insufficient() {
        let pair = FlatPair {
            predicted: vec![0.0],
            reference: vec![0.5],
        };
        match score(&pair) {
            Err(CoreError::InsufficientData { len }) => assert_eq!(len, 1),
            other => panic!("expected InsufficientData, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_is_insufficient() {
        assert!(matches!(
            pearson(&[], &[], "a", "b"),
            Err(CoreError::InsufficientData { len: 0 })
        ));
    }

    #[test]
    fn test_zero_variance_names_series() {
        match pearson(&[1.0, 1.0, 1.0], &[1.0, 2.0, 3.0], "predicted", "reference") {
            Err(CoreError::ZeroVariance { series }) => assert_eq!(series, "predicted"),
            other => panic!("expected ZeroVariance, got {:?}", other),
        }

        match pearson(&[1.0, 2.0, 3.0], &[4.0, 4.0, 4.0], "predicted", "reference") {
            Err(CoreError::ZeroVariance { series }) => assert_eq!(series, "reference"),
            other => panic!("expected ZeroVariance, got {:?}", other),
        }
    }

    #[test]
    fn test_absolute_score_is_independent() {
        // Raw correlation is defined; the absolute pass collapses the
        // predicted series to a constant and must fail on its own.
        let pair = FlatPair {
            predicted: vec![-0.5, 0.5, -0.5],
            reference: vec![0.1, 0.2, 0.3],
        };
        match score(&pair) {
            Err(CoreError::ZeroVariance { series }) => {
                assert_eq!(series, "absolute predicted");
            }
            other => panic!("expected ZeroVariance, got {:?}", other),
        }
    }

    #[test]
    fn test_score_returns_both_correlations() {
        let pair = FlatPair {
            predicted: vec![0.1, -0.4, 0.8, -0.2],
            reference: vec![0.2, -0.3, 0.9, -0.1],
        };
        let result = score(&pair).unwrap();
        assert!(result.raw > 0.9);
        assert!(result.absolute > 0.9);
        // Raw and absolute are separate statistics.
        assert_ne!(result.raw.to_bits(), result.absolute.to_bits());
    }
}
