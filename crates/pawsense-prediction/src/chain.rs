//! Depth-bounded chain prediction.
//!
//! Expands every outgoing edge of every reachable activity, not just the
//! best one, so callers can rank the whole tree afterwards. Revisiting an
//! activity already on the path is allowed; only depth ends a branch.
//!
//! Nodes come out in pre-order: an edge's node, then its whole subtree,
//! then the next sibling, with siblings in table order. An explicit stack
//! replaces recursion.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use pawsense_core::config::defaults::DEFAULT_MAX_DEPTH;
use pawsense_core::models::{PredictionNode, TransitionEdge};
use pawsense_core::time::offset_by_minutes;
use pawsense_transitions::TransitionTable;

/// Limits for a chain expansion.
#[derive(Debug, Clone)]
pub struct ChainConfig {
    /// Deepest level emitted. Depth 1 is the direct successors.
    pub max_depth: usize,
    /// Edges that would take the path probability below this are skipped
    /// along with their subtree. 0.0 expands everything.
    pub min_path_probability: f64,
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            min_path_probability: 0.0,
        }
    }
}

/// An edge waiting to be emitted, with the state of the path leading to it.
struct Pending<'t> {
    edge: &'t TransitionEdge,
    elapsed_minutes: f64,
    depth: usize,
    path_probability: f64,
}

/// Every predicted path from `activity` up to `max_depth` steps.
///
/// Empty when `activity` has no outgoing edges or `max_depth` is 0.
pub fn predict_chain(
    table: &TransitionTable,
    activity: &str,
    start_time: DateTime<Utc>,
    max_depth: usize,
) -> Vec<PredictionNode> {
    let config = ChainConfig {
        max_depth,
        ..ChainConfig::default()
    };
    predict_chain_with(table, activity, start_time, &config)
}

/// [`predict_chain`] with an explicit [`ChainConfig`].
pub fn predict_chain_with(
    table: &TransitionTable,
    activity: &str,
    start_time: DateTime<Utc>,
    config: &ChainConfig,
) -> Vec<PredictionNode> {
    let mut nodes = Vec::new();
    let mut stack: Vec<Pending<'_>> = Vec::new();
    push_successors(&mut stack, table, activity, 0.0, 1, 1.0, config);

    while let Some(pending) = stack.pop() {
        let minutes_from_start = pending.elapsed_minutes + pending.edge.mean_minutes;
        let path_probability = pending.path_probability * pending.edge.probability;
        nodes.push(PredictionNode {
            activity: pending.edge.to.clone(),
            predicted_time: offset_by_minutes(start_time, minutes_from_start),
            minutes_from_start,
            path_probability,
            depth: pending.depth,
        });
        push_successors(
            &mut stack,
            table,
            pending.edge.to.as_str(),
            minutes_from_start,
            pending.depth + 1,
            path_probability,
            config,
        );
    }

    nodes
}

/// Number of nodes [`predict_chain`] emits for `activity` at `max_depth`
/// with no pruning, computed level by level without expanding the tree.
/// Saturates at `u64::MAX`.
pub fn chain_size(table: &TransitionTable, activity: &str, max_depth: usize) -> u64 {
    // below[a]: nodes under `a` with the current number of levels left.
    let mut below: BTreeMap<&str, u64> = BTreeMap::new();
    for _ in 0..max_depth {
        let mut next = BTreeMap::new();
        for source in table.sources() {
            let size = table.outgoing(source.as_str()).iter().fold(0u64, |acc, edge| {
                let subtree = below.get(edge.to.as_str()).copied().unwrap_or(0);
                acc.saturating_add(1).saturating_add(subtree)
            });
            next.insert(source.as_str(), size);
        }
        below = next;
    }
    below.get(activity).copied().unwrap_or(0)
}

/// Queue the outgoing edges of `activity` so the first edge pops first.
fn push_successors<'t>(
    stack: &mut Vec<Pending<'t>>,
    table: &'t TransitionTable,
    activity: &str,
    elapsed_minutes: f64,
    depth: usize,
    path_probability: f64,
    config: &ChainConfig,
) {
    if depth > config.max_depth {
        return;
    }
    for edge in table.outgoing(activity).iter().rev() {
        if path_probability * edge.probability < config.min_path_probability {
            continue;
        }
        stack.push(Pending {
            edge,
            elapsed_minutes,
            depth,
            path_probability,
        });
    }
}
