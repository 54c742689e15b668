//! End-to-end tests for the public robustness surface.
//!
//! Exercises the crate the way a model-evaluation pipeline would: compute RGA
//! against held-out references, score single-variable perturbations with RGR,
//! and compare two models with the jackknife significance test.

use rankgrad::{rga, rgr, rgr_statistic_test, rgr_test, RgrTestResult, StatError};

// ── Pinned regression fixtures ──────────────────────────────────────

#[test]
fn rga_regression_fixture() {
    // Hand-derived: no ties, support table is the identity onto y,
    // conc = 38, dec = 20, inc = 40 → (38 - 20) / (40 - 20) = 0.9
    let y = [1.0, 2.0, 3.0, 4.0, 5.0];
    let yhat = [2.0, 1.0, 3.0, 5.0, 4.0];
    assert!((rga(&y, &yhat).unwrap() - 0.9).abs() < 1e-12);
}

#[test]
fn rga_constant_reference_is_degenerate() {
    assert!(matches!(
        rga(&[0.0, 0.0, 0.0, 0.0], &[1.0, 2.0, 3.0, 4.0]),
        Err(StatError::DivisionUndefined { .. })
    ));
}

// ── Robustness comparison scenarios ─────────────────────────────────

/// Deterministic synthetic predictions: a smooth score curve for model 1, a
/// monotone rescaling of it for model 2.
fn synthetic_models(n: usize) -> (Vec<f64>, Vec<f64>) {
    let model_one: Vec<f64> = (0..n).map(|i| (i as f64 * 0.37).sin() + i as f64 * 0.01).collect();
    let model_two: Vec<f64> = model_one.iter().map(|&x| 2.0 * x + 1.0).collect();
    (model_one, model_two)
}

/// Shift a small fraction of the ranking: swap each pair of adjacent rows at
/// the given stride.
fn mild_perturbation(values: &[f64], stride: usize) -> Vec<f64> {
    let mut perturbed = values.to_vec();
    let mut i = 0;
    while i + 1 < perturbed.len() {
        perturbed.swap(i, i + 1);
        i += stride;
    }
    perturbed
}

#[test]
fn clearly_unequal_robustness_rejects_null() {
    // Model 1's perturbed ranking is nearly intact; model 2's is reversed.
    let (model_one, model_two) = synthetic_models(30);
    let model_one_pert = mild_perturbation(&model_one, 10);
    let model_two_pert: Vec<f64> = model_two.iter().rev().copied().collect();

    let result = rgr_test(&model_one, &model_two, &model_one_pert, &model_two_pert).unwrap();
    assert!(result.observed_delta > 0.0);
    assert!(
        result.p_value < 0.05,
        "expected rejection, got p = {}",
        result.p_value
    );

    // The two RGR measures tell the same story as the test
    let robust = rgr(&model_one, &model_one_pert).unwrap();
    let fragile = rgr(&model_two, &model_two_pert).unwrap();
    assert!(robust > fragile);
}

#[test]
fn matched_robustness_gives_p_of_one() {
    // Model 2 is a positive affine rescaling of model 1 with the same
    // perturbation, so both RGR values coincide exactly and the observed
    // delta is zero while the jackknife spread stays positive.
    let model_one = vec![0.05, 0.95, 0.35, 0.65, 0.15, 0.85, 0.25, 0.75, 0.45, 0.55];
    let model_one_pert = vec![0.05, 0.95, 0.45, 0.65, 0.15, 0.85, 0.25, 0.75, 0.35, 0.55];
    let model_two: Vec<f64> = model_one.iter().map(|&x| 2.0 * x).collect();
    let model_two_pert: Vec<f64> = model_one_pert.iter().map(|&x| 2.0 * x).collect();

    let result = rgr_test(&model_one, &model_two, &model_one_pert, &model_two_pert).unwrap();
    assert!(result.observed_delta.abs() < 1e-12);
    assert!(result.standard_error > 0.0);
    assert!((result.p_value - 1.0).abs() < 1e-9);
}

#[test]
fn scalar_surface_agrees_with_rich_result() {
    let (model_one, model_two) = synthetic_models(20);
    let model_one_pert = mild_perturbation(&model_one, 6);
    let model_two_pert = mild_perturbation(&model_two, 2);

    let p = rgr_statistic_test(&model_one, &model_two, &model_one_pert, &model_two_pert).unwrap();
    let rich = rgr_test(&model_one, &model_two, &model_one_pert, &model_two_pert).unwrap();
    assert_eq!(p.to_bits(), rich.p_value.to_bits());
    assert!((0.0..=1.0).contains(&p));
}

#[test]
fn swapping_models_negates_the_observed_statistic() {
    let (model_one, model_two) = synthetic_models(16);
    let model_one_pert = mild_perturbation(&model_one, 8);
    let model_two_pert = mild_perturbation(&model_two, 2);

    let forward = rgr_test(&model_one, &model_two, &model_one_pert, &model_two_pert).unwrap();
    let swapped = rgr_test(&model_two, &model_one, &model_two_pert, &model_one_pert).unwrap();
    assert!((forward.observed_delta + swapped.observed_delta).abs() < 1e-12);
}

// ── Error surface ───────────────────────────────────────────────────

#[test]
fn shape_mismatch_reported_before_any_computation() {
    let err = rgr_statistic_test(&[1.0, 2.0, 3.0], &[1.0, 2.0, 3.0], &[1.0, 2.0], &[1.0, 2.0, 3.0])
        .unwrap_err();
    assert_eq!(err, StatError::ShapeMismatch { left: 3, right: 2 });
}

#[test]
fn degenerate_replicates_reported_as_division_undefined() {
    let same = vec![0.3, 0.6, 0.1, 0.9, 0.4];
    let err = rgr_test(&same, &same, &same, &same).unwrap_err();
    assert_eq!(
        err,
        StatError::DivisionUndefined {
            context: "jackknife standard error"
        }
    );
}

// ── Serialization ───────────────────────────────────────────────────

#[test]
fn test_result_serializes_for_reporting() {
    let (model_one, model_two) = synthetic_models(20);
    let model_one_pert = mild_perturbation(&model_one, 6);
    let model_two_pert = mild_perturbation(&model_two, 2);
    let result = rgr_test(&model_one, &model_two, &model_one_pert, &model_two_pert).unwrap();

    let json = serde_json::to_string(&result).unwrap();
    let restored: RgrTestResult = serde_json::from_str(&json).unwrap();
    assert_eq!(restored.p_value.to_bits(), result.p_value.to_bits());
    assert_eq!(restored.sample_size, result.sample_size);
}
