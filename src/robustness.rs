//! Rank Graduation Robustness (RGR) and the jackknife significance test.
//!
//! RGR scores how much perturbing one input variable changes a model's own
//! output ranking: RGA between the baseline and perturbed predictions. A
//! value near 1 means the ranking is robust to the perturbation; lower means
//! sensitive.
//!
//! The significance test compares the robustness of two models via
//! leave-one-out jackknife resampling: the standard error of the concordance
//! delta is estimated from n leave-one-out replicates, and a two-sided
//! p-value comes from the normal approximation. The resampling loop is
//! O(n) RGA evaluations of size n-1 each — O(n² log n) total — so it targets
//! evaluation-time use on held-out sets, not streaming scale. The replicates
//! are independent and run in parallel.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::concordance::rga;
use crate::error::{check_finite, StatError};
use crate::normal::standard_normal_cdf;

/// Tolerance used to detect a zero jackknife standard error.
const SE_EPSILON: f64 = 1e-12;

// ─── Prediction table ────────────────────────────────────────────────

/// Four row-aligned prediction columns: two models, each with baseline and
/// perturbed predictions. Row i refers to the same observation in all four
/// columns.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionTable {
    model_one: Vec<f64>,
    model_two: Vec<f64>,
    model_one_perturbed: Vec<f64>,
    model_two_perturbed: Vec<f64>,
}

impl PredictionTable {
    /// Build a table from four row-aligned columns.
    ///
    /// # Errors
    ///
    /// [`StatError::ShapeMismatch`] if any column's length disagrees with the
    /// first or there are fewer than two rows; [`StatError::InvalidInput`] if
    /// any value is non-finite.
    pub fn new(
        model_one: Vec<f64>,
        model_two: Vec<f64>,
        model_one_perturbed: Vec<f64>,
        model_two_perturbed: Vec<f64>,
    ) -> Result<Self, StatError> {
        let n = model_one.len();
        for column in [&model_two, &model_one_perturbed, &model_two_perturbed] {
            if column.len() != n {
                return Err(StatError::ShapeMismatch {
                    left: n,
                    right: column.len(),
                });
            }
        }
        if n < 2 {
            return Err(StatError::ShapeMismatch { left: n, right: n });
        }
        for column in [
            &model_one,
            &model_two,
            &model_one_perturbed,
            &model_two_perturbed,
        ] {
            check_finite(column)?;
        }
        Ok(Self {
            model_one,
            model_two,
            model_one_perturbed,
            model_two_perturbed,
        })
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.model_one.len()
    }

    /// Whether the table has no rows. Unreachable through [`Self::new`],
    /// which requires at least two.
    pub fn is_empty(&self) -> bool {
        self.model_one.is_empty()
    }

    /// Order-preserving copy of the table with row `excluded` removed.
    fn leave_one_out(&self, excluded: usize) -> Self {
        let drop_row = |column: &[f64]| -> Vec<f64> {
            column
                .iter()
                .enumerate()
                .filter(|&(i, _)| i != excluded)
                .map(|(_, &v)| v)
                .collect()
        };
        Self {
            model_one: drop_row(&self.model_one),
            model_two: drop_row(&self.model_two),
            model_one_perturbed: drop_row(&self.model_one_perturbed),
            model_two_perturbed: drop_row(&self.model_two_perturbed),
        }
    }
}

// ─── Delta function ──────────────────────────────────────────────────

/// Change in concordance between the baseline pairing and the perturbed
/// pairing: `func(col0, col2) - func(col0, col1)` over the fixed column
/// layout (model-1 baseline, model-2 baseline, model-1 perturbed, model-2
/// perturbed).
pub fn concordance_delta<F>(table: &PredictionTable, func: F) -> Result<f64, StatError>
where
    F: Fn(&[f64], &[f64]) -> Result<f64, StatError>,
{
    let perturbed = func(&table.model_one, &table.model_one_perturbed)?;
    let baseline = func(&table.model_one, &table.model_two)?;
    Ok(perturbed - baseline)
}

// ─── RGR measure ─────────────────────────────────────────────────────

/// RGR measure for the perturbation of a single variable: RGA between the
/// full model's predictions and the predictions with the selected variable
/// perturbed.
pub fn rgr(yhat: &[f64], yhat_pert: &[f64]) -> Result<f64, StatError> {
    rga(yhat, yhat_pert)
}

// ─── Jackknife significance test ─────────────────────────────────────

/// Outcome of the jackknife robustness comparison between two models.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RgrTestResult {
    /// Observed statistic: RGR of model 1 minus RGR of model 2.
    pub observed_delta: f64,
    /// Jackknife standard error of the concordance delta.
    pub standard_error: f64,
    /// Normal-approximation z-statistic: observed_delta / standard_error.
    pub z_statistic: f64,
    /// Two-sided p-value: 2 * Φ(-|z|).
    pub p_value: f64,
    /// Number of rows, which is also the number of jackknife replicates.
    pub sample_size: usize,
}

/// Jackknife test comparing the robustness of two models under the same
/// single-variable perturbation.
///
/// Columns: model-1 baseline, model-2 baseline, model-1 perturbed, model-2
/// perturbed. Each of the n leave-one-out replicates recomputes the
/// concordance delta; their spread gives the standard error behind the
/// z-statistic.
///
/// # Errors
///
/// [`StatError::ShapeMismatch`] / [`StatError::InvalidInput`] for malformed
/// columns, and [`StatError::DivisionUndefined`] when every jackknife
/// replicate produces the identical delta (zero standard error — sample too
/// small or degenerate predictions). Degeneracies inside a replicate (a
/// column going constant once a row is removed) propagate as
/// [`StatError::DivisionUndefined`] from the inner RGA.
pub fn rgr_test(
    yhat: &[f64],
    yhat_mod2: &[f64],
    yhat_pert: &[f64],
    yhat_mod2_pert: &[f64],
) -> Result<RgrTestResult, StatError> {
    let table = PredictionTable::new(
        yhat.to_vec(),
        yhat_mod2.to_vec(),
        yhat_pert.to_vec(),
        yhat_mod2_pert.to_vec(),
    )?;
    let n = table.len();

    let replicates: Vec<f64> = (0..n)
        .into_par_iter()
        .map(|i| concordance_delta(&table.leave_one_out(i), rga))
        .collect::<Result<_, _>>()?;

    let mean = replicates.iter().sum::<f64>() / n as f64;
    let squared_spread: f64 = replicates.iter().map(|jk| (jk - mean).powi(2)).sum();
    let standard_error = (((n - 1) as f64 / n as f64) * squared_spread).sqrt();

    if standard_error < SE_EPSILON {
        return Err(StatError::DivisionUndefined {
            context: "jackknife standard error",
        });
    }

    let observed_delta = rga(yhat, yhat_pert)? - rga(yhat_mod2, yhat_mod2_pert)?;
    let z_statistic = observed_delta / standard_error;
    // The erf approximation can land a hair above 0.5 at zero; keep the
    // two-sided p-value inside [0, 1]
    let p_value = (2.0 * standard_normal_cdf(-z_statistic.abs())).min(1.0);

    Ok(RgrTestResult {
        observed_delta,
        standard_error,
        z_statistic,
        p_value,
        sample_size: n,
    })
}

/// p-value of the jackknife robustness comparison — the scalar surface over
/// [`rgr_test`].
pub fn rgr_statistic_test(
    yhat: &[f64],
    yhat_mod2: &[f64],
    yhat_pert: &[f64],
    yhat_mod2_pert: &[f64],
) -> Result<f64, StatError> {
    Ok(rgr_test(yhat, yhat_mod2, yhat_pert, yhat_mod2_pert)?.p_value)
}
