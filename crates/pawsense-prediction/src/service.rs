//! The in-process boundary contract.
//!
//! Validates raw requests before touching the table, runs the query, and
//! turns "nothing to predict" into [`QueryError::UnknownActivity`] unless the
//! source is known and pruning emptied its chain. The
//! transport in front of it only serializes.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use pawsense_core::errors::{PawsenseResult, QueryError};
use pawsense_core::models::ForecastEntry;
use pawsense_core::time::{offset_by_minutes, parse_instant};
use pawsense_transitions::ActivityState;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::engine::PredictionEngine;
use crate::ranking::{to_forecast, top_n};

/// A forecasting request as it arrives from outside.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ForecastRequest {
    pub current_activity: Option<String>,
    /// ISO-8601 start of the current activity.
    pub last_activity_time: Option<String>,
    pub max_depth: Option<i64>,
    pub top_n: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastResponse {
    pub predictions: Vec<ForecastEntry>,
}

pub struct ForecastService {
    engine: Arc<PredictionEngine>,
}

impl ForecastService {
    pub fn new(engine: Arc<PredictionEngine>) -> Self {
        Self { engine }
    }

    pub fn engine(&self) -> &Arc<PredictionEngine> {
        &self.engine
    }

    /// Single best next activity. A start time is optional; when given,
    /// the entry carries an absolute predicted time.
    pub fn next(&self, request: &ForecastRequest) -> PawsenseResult<ForecastResponse> {
        let activity = required_activity(request)?;
        let start = request
            .last_activity_time
            .as_deref()
            .map(parse_start)
            .transpose()?;

        let next = self
            .engine
            .predict_next(activity)?
            .ok_or_else(|| unknown(activity))?;

        let mut entry = ForecastEntry::from(&next);
        entry.predicted_time = start.map(|t| offset_by_minutes(t, next.mean_minutes));
        Ok(ForecastResponse {
            predictions: vec![entry],
        })
    }

    /// Chain forecast, optionally ranked and truncated to `top_n`.
    pub fn chain(&self, request: &ForecastRequest) -> PawsenseResult<ForecastResponse> {
        let activity = required_activity(request)?;
        let raw_time = request
            .last_activity_time
            .as_deref()
            .ok_or(QueryError::MissingField {
                field: "last_activity_time",
            })?;
        let start = parse_start(raw_time)?;
        let depth = self.engine.resolve_depth(request.max_depth)?;
        let limit = match request.top_n {
            None => None,
            Some(n) if n >= 1 => Some(n as usize),
            Some(n) => return Err(QueryError::InvalidTopN { top_n: n }.into()),
        };

        let nodes = self.engine.predict_chain(activity, start, Some(depth))?;
        // Empty for a known source only when pruning removed every branch.
        if nodes.is_empty() && self.engine.activity_state(activity)? != ActivityState::Transient {
            return Err(unknown(activity).into());
        }

        let predictions = match limit {
            Some(n) => to_forecast(&top_n(&nodes, n)),
            None => to_forecast(&nodes),
        };
        debug!(activity, depth, returned = predictions.len(), "chain forecast");
        Ok(ForecastResponse { predictions })
    }
}

fn required_activity(request: &ForecastRequest) -> Result<&str, QueryError> {
    request
        .current_activity
        .as_deref()
        .map(str::trim)
        .filter(|a| !a.is_empty())
        .ok_or(QueryError::MissingField {
            field: "current_activity",
        })
}

fn parse_start(raw: &str) -> Result<DateTime<Utc>, QueryError> {
    parse_instant(raw).map_err(|e| QueryError::InvalidTimestamp {
        value: raw.to_string(),
        reason: e.to_string(),
    })
}

fn unknown(activity: &str) -> QueryError {
    QueryError::UnknownActivity {
        activity: activity.to_string(),
    }
}
