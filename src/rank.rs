//! Rank aggregation — minimum-rank ranking, per-rank support values, and
//! stable ascending ordering.
//!
//! These are the building blocks every concordance statistic in this crate
//! shares: rank a prediction vector with the minimum tie-breaking rule, smooth
//! a paired reference vector by averaging it within each tie group, and order
//! observations by ascending predicted value.

use std::collections::HashMap;

/// Rank-by-minimum: 1-based ranks where all tied values receive the lowest
/// rank of their tie group (e.g. [5, 5, 7] → [1, 1, 3]).
pub fn min_ranks(values: &[f64]) -> Vec<usize> {
    let order = ascending_order(values);
    let mut ranks = vec![0usize; values.len()];

    let mut position = 0;
    while position < order.len() {
        let group_value = values[order[position]];
        let rank = position + 1; // lowest 1-based rank in this tie group
        let mut end = position;
        while end < order.len() && values[order[end]] == group_value {
            ranks[order[end]] = rank;
            end += 1;
        }
        position = end;
    }
    ranks
}

/// Per-observation support values: the mean of `reference` within each rank
/// group, broadcast back to every row carrying that rank.
///
/// A single hash map from rank to (sum, count) replaces the quadratic
/// row-by-row lookup; tied predictions share one smoothed reference value.
pub fn support_values(reference: &[f64], ranks: &[usize]) -> Vec<f64> {
    debug_assert_eq!(reference.len(), ranks.len());

    let mut groups: HashMap<usize, (f64, usize)> = HashMap::with_capacity(ranks.len());
    for (&rank, &value) in ranks.iter().zip(reference.iter()) {
        let entry = groups.entry(rank).or_insert((0.0, 0));
        entry.0 += value;
        entry.1 += 1;
    }

    ranks
        .iter()
        .map(|rank| {
            let (sum, count) = groups[rank];
            sum / count as f64
        })
        .collect()
}

/// Indices that sort `values` ascending. Stable on ties: equal values keep
/// their first-occurrence order.
pub fn ascending_order(values: &[f64]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..values.len()).collect();
    order.sort_by(|&a, &b| {
        values[a]
            .partial_cmp(&values[b])
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    order
}
