//! Single-step prediction: the most probable successor.

use std::cmp::Ordering;

use pawsense_core::models::{NextActivity, TransitionEdge};
use pawsense_transitions::TransitionTable;

/// Most probable successor of `activity`.
///
/// `None` when the activity is unknown or has no observed successor.
/// Equal probabilities resolve to the lexicographically smallest label.
pub fn predict_next(table: &TransitionTable, activity: &str) -> Option<NextActivity> {
    table
        .outgoing(activity)
        .iter()
        .min_by(|a, b| rank(a, b))
        .map(|edge| NextActivity {
            activity: edge.to.clone(),
            mean_minutes: edge.mean_minutes,
            probability: edge.probability,
        })
}

/// Higher probability first, then smaller label.
fn rank(a: &TransitionEdge, b: &TransitionEdge) -> Ordering {
    b.probability
        .partial_cmp(&a.probability)
        .unwrap_or(Ordering::Equal)
        .then_with(|| a.to.cmp(&b.to))
}
