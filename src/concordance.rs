//! Rank Graduation Accuracy (RGA) — the core concordance statistic.
//!
//! RGA measures how well a prediction's induced ranking reproduces the
//! ascending order of a reference vector. Observations are ranked by the
//! prediction (minimum tie rule), the reference is smoothed within tie groups,
//! and the smoothed values are gathered in ascending-prediction order. The
//! index-weighted sum of that sequence is then normalized between the two
//! extremal arrangements of the reference itself.

use crate::error::{check_pair, StatError};
use crate::rank::{ascending_order, min_ranks, support_values};

/// Tolerance used to detect a zero normalization denominator.
const DENOMINATOR_EPSILON: f64 = 1e-12;

/// Rank Graduation Accuracy of prediction `yhat` against reference `y`.
///
/// Equals 1.0 when `yhat`'s ranking perfectly reproduces `y`'s ascending
/// order, and trends toward 0 (it can go negative) the more discordant the
/// ranking. Invariant to the relative order of tied predictions: ties are
/// collapsed to one rank group sharing one smoothed reference value.
///
/// # Errors
///
/// - [`StatError::ShapeMismatch`] if the vectors differ in length or have
///   fewer than two rows.
/// - [`StatError::InvalidInput`] if either vector contains a non-finite value.
/// - [`StatError::DivisionUndefined`] if the reference vector is constant
///   (both extremal arrangements coincide).
pub fn rga(y: &[f64], yhat: &[f64]) -> Result<f64, StatError> {
    check_pair(y, yhat)?;

    let ranks = min_ranks(yhat);
    let support = support_values(y, &ranks);

    // ystar: support values gathered in ascending-prediction order
    let order = ascending_order(yhat);
    let conc: f64 = order
        .iter()
        .enumerate()
        .map(|(i, &row)| i as f64 * support[row])
        .sum();

    let (dec, inc) = extremal_weighted_sums(y);
    let denominator = inc - dec;
    if denominator.abs() < DENOMINATOR_EPSILON {
        return Err(StatError::DivisionUndefined {
            context: "concordance",
        });
    }
    Ok((conc - dec) / denominator)
}

/// Index-weighted sums of `values` under its two extremal arrangements:
/// `dec` pairs positions with the descending sort, `inc` with the ascending
/// sort. The names follow the literal formula, not the intuition they
/// suggest.
pub(crate) fn extremal_weighted_sums(values: &[f64]) -> (f64, f64) {
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let n = sorted.len();
    let mut dec = 0.0;
    let mut inc = 0.0;
    for (i, &value) in sorted.iter().enumerate() {
        inc += i as f64 * value;
        dec += (n - 1 - i) as f64 * value; // descending order weight for this value
    }
    (dec, inc)
}
