//! Ranking and flattening of chain results for top-N views.

use std::cmp::Ordering;

use pawsense_core::models::{ForecastEntry, PredictionNode};

/// The `n` most probable nodes, highest first.
///
/// The sort is stable, so equal probabilities keep chain order.
pub fn top_n(nodes: &[PredictionNode], n: usize) -> Vec<PredictionNode> {
    let mut ranked = nodes.to_vec();
    ranked.sort_by(|a, b| {
        b.path_probability
            .partial_cmp(&a.path_probability)
            .unwrap_or(Ordering::Equal)
    });
    ranked.truncate(n);
    ranked
}

/// Boundary triples for a sequence of nodes, order preserved.
pub fn to_forecast(nodes: &[PredictionNode]) -> Vec<ForecastEntry> {
    nodes.iter().map(ForecastEntry::from).collect()
}
