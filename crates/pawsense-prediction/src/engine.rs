//! Prediction engine: owns the current table snapshot and answers queries.
//!
//! The table itself is never mutated. A rebuild constructs a new table
//! outside the lock and swaps the `Arc`; queries already running keep the
//! snapshot they started with.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

use chrono::{DateTime, Utc};
use pawsense_core::config::PredictionConfig;
use pawsense_core::errors::{PawsenseError, PawsenseResult, QueryError};
use pawsense_core::models::{ActivityRecord, NextActivity, PredictionNode};
use pawsense_transitions::{ActivityState, TransitionTable, TransitionTableBuilder};
use tracing::{debug, info, warn};

use crate::chain::{chain_size, predict_chain_with, ChainConfig};
use crate::next::predict_next;

/// Prediction engine over a swappable transition table.
pub struct PredictionEngine {
    table: RwLock<Arc<TransitionTable>>,
    version: AtomicU64,
    config: PredictionConfig,
}

impl PredictionEngine {
    /// Create an engine serving `table`.
    pub fn new(table: TransitionTable, config: PredictionConfig) -> Self {
        Self {
            table: RwLock::new(Arc::new(table)),
            version: AtomicU64::new(1),
            config,
        }
    }

    /// Build a table from `log` and serve it.
    pub fn from_log(log: &[ActivityRecord], config: PredictionConfig) -> PawsenseResult<Self> {
        let table = TransitionTableBuilder::build(log)?;
        Ok(Self::new(table, config))
    }

    pub fn config(&self) -> &PredictionConfig {
        &self.config
    }

    /// Bumped on every successful swap. Starts at 1.
    pub fn version(&self) -> u64 {
        self.version.load(Ordering::Acquire)
    }

    /// The table queries currently run against.
    pub fn snapshot(&self) -> PawsenseResult<Arc<TransitionTable>> {
        let guard = self
            .table
            .read()
            .map_err(|e| PawsenseError::ConcurrencyError(e.to_string()))?;
        Ok(Arc::clone(&guard))
    }

    /// Rebuild from a fresh log and swap it in. On failure the current
    /// table stays in service.
    pub fn rebuild(&self, log: &[ActivityRecord]) -> PawsenseResult<u64> {
        let table = TransitionTableBuilder::build(log)?;
        self.replace(table)
    }

    /// Swap in an already-built table. Returns the new version.
    pub fn replace(&self, table: TransitionTable) -> PawsenseResult<u64> {
        let edges = table.edge_count();
        let mut guard = self
            .table
            .write()
            .map_err(|e| PawsenseError::ConcurrencyError(e.to_string()))?;
        *guard = Arc::new(table);
        let version = self.version.fetch_add(1, Ordering::AcqRel) + 1;
        drop(guard);
        info!(version, edges, "transition table swapped");
        Ok(version)
    }

    /// Most probable successor of `activity`, `None` if there is none.
    pub fn predict_next(&self, activity: &str) -> PawsenseResult<Option<NextActivity>> {
        let table = self.snapshot()?;
        let next = predict_next(&table, activity);
        debug!(activity, found = next.is_some(), "next-activity query");
        Ok(next)
    }

    /// Chain prediction. `max_depth` defaults to the configured depth and
    /// must lie in `1..=max_depth_cap`. Queries whose unpruned tree exceeds
    /// `max_chain_nodes` are rejected before expansion.
    pub fn predict_chain(
        &self,
        activity: &str,
        start_time: DateTime<Utc>,
        max_depth: Option<usize>,
    ) -> PawsenseResult<Vec<PredictionNode>> {
        let depth =
            self.resolve_depth(max_depth.map(|d| i64::try_from(d).unwrap_or(i64::MAX)))?;
        let table = self.snapshot()?;
        let size = chain_size(&table, activity, depth);
        let limit = self.config.max_chain_nodes;
        if size > u64::try_from(limit).unwrap_or(u64::MAX) {
            warn!(activity, depth, size, limit, "chain query over node budget");
            return Err(QueryError::ChainTooLarge {
                activity: activity.to_string(),
                depth,
                nodes: size,
                limit,
            }
            .into());
        }
        let config = ChainConfig {
            max_depth: depth,
            min_path_probability: self.config.min_path_probability,
        };
        let nodes = predict_chain_with(&table, activity, start_time, &config);
        debug!(activity, depth, nodes = nodes.len(), "chain query");
        Ok(nodes)
    }

    /// How the current table knows `activity`.
    pub fn activity_state(&self, activity: &str) -> PawsenseResult<ActivityState> {
        Ok(self.snapshot()?.state_of(activity))
    }

    /// Validate a requested depth against the configured cap.
    pub fn resolve_depth(&self, requested: Option<i64>) -> Result<usize, QueryError> {
        let cap = self.config.max_depth_cap;
        match requested {
            None => Ok(self.config.default_max_depth),
            Some(depth) if depth >= 1 && depth as u64 <= cap as u64 => Ok(depth as usize),
            Some(depth) => Err(QueryError::InvalidDepth { depth, max: cap }),
        }
    }
}
