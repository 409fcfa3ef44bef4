use serde::{Deserialize, Serialize};

use super::ActivityLabel;

/// An observed `from → to` transition with its timing and probability.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransitionEdge {
    pub from: ActivityLabel,
    pub to: ActivityLabel,
    /// Mean start-to-start gap in minutes.
    pub mean_minutes: f64,
    /// Times `from` was immediately followed by `to`. Always ≥ 1.
    pub observed_count: u64,
    /// `observed_count` over all observations leaving `from`.
    pub probability: f64,
}
