//! Error taxonomy for rank graduation statistics.
//!
//! Three failure classes, all detected at the computation that encounters
//! them. No partial results are returned and no retries are attempted: every
//! statistic here is a pure function of its inputs, so retrying without
//! different input cannot change the outcome.

use thiserror::Error;

/// Errors from rank graduation computations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StatError {
    /// Paired vectors differ in length, or fewer than two rows were supplied.
    #[error("bad input shape: {left} rows vs {right} (vectors must be equal length, at least 2 rows)")]
    ShapeMismatch { left: usize, right: usize },

    /// A normalization denominator evaluated to zero — degenerate input,
    /// e.g. a constant reference vector or identical jackknife estimates.
    #[error("degenerate statistic: {context} denominator is zero")]
    DivisionUndefined { context: &'static str },

    /// A prediction vector contains a non-finite value (NaN or infinity).
    #[error("invalid value at row {index}: {value} is not finite")]
    InvalidInput { index: usize, value: f64 },
}

/// Validate a single prediction vector: every entry must be finite.
pub(crate) fn check_finite(values: &[f64]) -> Result<(), StatError> {
    for (index, &value) in values.iter().enumerate() {
        if !value.is_finite() {
            return Err(StatError::InvalidInput { index, value });
        }
    }
    Ok(())
}

/// Validate a pair of row-aligned vectors: equal lengths, at least two rows,
/// all values finite.
pub(crate) fn check_pair(left: &[f64], right: &[f64]) -> Result<(), StatError> {
    if left.len() != right.len() || left.len() < 2 {
        return Err(StatError::ShapeMismatch {
            left: left.len(),
            right: right.len(),
        });
    }
    check_finite(left)?;
    check_finite(right)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_pair_unequal_lengths() {
        let err = check_pair(&[1.0, 2.0], &[1.0, 2.0, 3.0]).unwrap_err();
        assert_eq!(err, StatError::ShapeMismatch { left: 2, right: 3 });
    }

    #[test]
    fn check_pair_too_few_rows() {
        let err = check_pair(&[1.0], &[1.0]).unwrap_err();
        assert_eq!(err, StatError::ShapeMismatch { left: 1, right: 1 });
    }

    #[test]
    fn check_pair_rejects_nan() {
        let err = check_pair(&[1.0, f64::NAN], &[1.0, 2.0]).unwrap_err();
        assert!(matches!(err, StatError::InvalidInput { index: 1, .. }));
    }

    #[test]
    fn check_pair_rejects_infinity() {
        let err = check_pair(&[1.0, 2.0], &[f64::INFINITY, 2.0]).unwrap_err();
        assert!(matches!(err, StatError::InvalidInput { index: 0, .. }));
    }

    #[test]
    fn check_pair_accepts_valid_input() {
        assert!(check_pair(&[1.0, 2.0], &[3.0, 4.0]).is_ok());
    }

    #[test]
    fn error_messages_distinguish_shape_from_degenerate() {
        let shape = StatError::ShapeMismatch { left: 3, right: 4 }.to_string();
        let degen = StatError::DivisionUndefined {
            context: "concordance",
        }
        .to_string();
        assert!(shape.contains("bad input shape"));
        assert!(degen.contains("degenerate statistic"));
    }
}
