use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ActivityLabel;

/// Single best guess for the next activity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NextActivity {
    pub activity: ActivityLabel,
    pub mean_minutes: f64,
    pub probability: f64,
}

/// One node of a chain prediction tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionNode {
    pub activity: ActivityLabel,
    pub predicted_time: DateTime<Utc>,
    pub minutes_from_start: f64,
    /// Product of edge probabilities from the query's activity to here.
    pub path_probability: f64,
    /// 1 for direct successors of the query's activity.
    pub depth: usize,
}

/// Boundary-facing prediction triple.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastEntry {
    pub next_activity: String,
    pub time_to_next_minutes: f64,
    pub probability: f64,
    /// Absolute time, when the query carried a start time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub predicted_time: Option<DateTime<Utc>>,
}

impl From<&PredictionNode> for ForecastEntry {
    fn from(node: &PredictionNode) -> Self {
        Self {
            next_activity: node.activity.to_string(),
            time_to_next_minutes: node.minutes_from_start,
            probability: node.path_probability,
            predicted_time: Some(node.predicted_time),
        }
    }
}

impl From<&NextActivity> for ForecastEntry {
    fn from(next: &NextActivity) -> Self {
        Self {
            next_activity: next.activity.to_string(),
            time_to_next_minutes: next.mean_minutes,
            probability: next.probability,
            predicted_time: None,
        }
    }
}
