//! Rank graduation statistics — concordance accuracy, perturbation
//! robustness, and jackknife significance testing.
//!
//! This crate evaluates how much a predictive model's output *ranking*
//! changes when an input variable is perturbed or removed:
//! - [`rga`] — Rank Graduation Accuracy, a concordance statistic between a
//!   reference vector and a prediction's induced ranking
//! - [`rgr`] — Rank Graduation Robustness, RGA between baseline and
//!   perturbed predictions
//! - [`rgr_test`] / [`rgr_statistic_test`] — leave-one-out jackknife test
//!   comparing the robustness of two models
//! - [`rge_numerator`] / [`rge_denominator`] — unnormalized explainability
//!   building blocks sharing the same rank/support/ordering core
//!
//! Everything is a pure, synchronous function of in-process numeric vectors:
//! no I/O, no shared state, no model fitting. Callers supply row-aligned
//! prediction vectors; all errors are typed ([`StatError`]) and returned
//! immediately.

pub mod concordance;
pub mod error;
pub mod normal;
pub mod rank;
pub mod rge;
pub mod robustness;

pub use concordance::rga;
pub use error::StatError;
pub use normal::standard_normal_cdf;
pub use rank::{ascending_order, min_ranks, support_values};
pub use rge::{rge_denominator, rge_numerator};
pub use robustness::{
    concordance_delta, rgr, rgr_statistic_test, rgr_test, PredictionTable, RgrTestResult,
};
