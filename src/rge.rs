//! Rank Graduation Explainability building blocks — the unnormalized
//! numerator and denominator statistics.
//!
//! Both follow the same rank/support/ordering procedure as the RGA engine but
//! are scaled by 2 and left unnormalized. They exist as scoring primitives
//! for concordance deltas; the denominator is a fixed property of a single
//! vector's own sorted extremes rather than a pairwise comparison, and
//! nothing in this crate calls it.

use crate::concordance::extremal_weighted_sums;
use crate::error::{check_finite, check_pair, StatError};
use crate::rank::{ascending_order, min_ranks, support_values};

/// RGE numerator: twice the gap between the concordance of (`yhat`,
/// `yhat_xk`) and the index-weighted descending arrangement of `yhat`.
///
/// `yhat_xk` plays the ranking role (predictions with variable k removed or
/// perturbed); `yhat` is smoothed within its tie groups.
pub fn rge_numerator(yhat: &[f64], yhat_xk: &[f64]) -> Result<f64, StatError> {
    check_pair(yhat, yhat_xk)?;

    let ranks = min_ranks(yhat_xk);
    let support = support_values(yhat, &ranks);
    let order = ascending_order(yhat_xk);

    let conc: f64 = order
        .iter()
        .enumerate()
        .map(|(i, &row)| i as f64 * support[row])
        .sum();
    let (dec, _inc) = extremal_weighted_sums(yhat);

    Ok(2.0 * conc - 2.0 * dec)
}

/// RGE denominator: twice the spread between `yhat`'s two extremal
/// index-weighted arrangements — a self-concordance baseline.
///
/// Zero for a constant vector; callers dividing by this value own that check.
pub fn rge_denominator(yhat: &[f64]) -> Result<f64, StatError> {
    if yhat.len() < 2 {
        return Err(StatError::ShapeMismatch {
            left: yhat.len(),
            right: yhat.len(),
        });
    }
    check_finite(yhat)?;

    let (dec, inc) = extremal_weighted_sums(yhat);
    Ok(2.0 * inc - 2.0 * dec)
}
