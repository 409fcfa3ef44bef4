//! TransitionTable: read-only `activity → outgoing edges` mapping.

use std::collections::{BTreeMap, BTreeSet};

use pawsense_core::constants::PROBABILITY_SUM_TOLERANCE;
use pawsense_core::models::{ActivityLabel, TransitionEdge};
use serde::{Deserialize, Serialize};

/// Counters describing the log a table was built from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildSummary {
    /// Records in the input log.
    pub records: usize,
    /// Consecutive pairs examined (`records - 1`).
    pub transitions: usize,
    /// Distinct activity labels in the log.
    pub activities: usize,
    /// Distinct `(from, to)` edges.
    pub edges: usize,
    /// Neighbouring records, in the order the log was given, where the
    /// later one starts first. The builder sorts before pairing, so these
    /// never produce negative gaps; the count flags a disordered log.
    pub negative_intervals: usize,
}

/// How the table knows an activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityState {
    /// Never appeared in the log.
    Unknown,
    /// Appeared, but never with a successor.
    Absorbing,
    /// Has at least one outgoing edge.
    Transient,
}

/// Empirical first-order transition table.
///
/// Edges are grouped by `from`; within a group they are ordered by `to`.
/// That order is the order chain prediction expands them in.
#[derive(Debug, Clone, Serialize)]
pub struct TransitionTable {
    edges: BTreeMap<ActivityLabel, Vec<TransitionEdge>>,
    absorbing: BTreeSet<ActivityLabel>,
    summary: BuildSummary,
}

impl TransitionTable {
    pub(crate) fn from_parts(
        edges: BTreeMap<ActivityLabel, Vec<TransitionEdge>>,
        absorbing: BTreeSet<ActivityLabel>,
        summary: BuildSummary,
    ) -> Self {
        Self {
            edges,
            absorbing,
            summary,
        }
    }

    /// Outgoing edges of `activity`, empty when it has none or is unknown.
    pub fn outgoing(&self, activity: &str) -> &[TransitionEdge] {
        self.edges.get(activity).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether `activity` has at least one outgoing edge.
    pub fn contains(&self, activity: &str) -> bool {
        self.edges.contains_key(activity)
    }

    /// Distinguishes never-seen activities from dead ends.
    pub fn state_of(&self, activity: &str) -> ActivityState {
        if self.edges.contains_key(activity) {
            ActivityState::Transient
        } else if self.absorbing.contains(activity) {
            ActivityState::Absorbing
        } else {
            ActivityState::Unknown
        }
    }

    pub fn out_degree(&self, activity: &str) -> usize {
        self.outgoing(activity).len()
    }

    /// Largest out-degree over all activities; bounds chain fan-out.
    pub fn max_out_degree(&self) -> usize {
        self.edges.values().map(Vec::len).max().unwrap_or(0)
    }

    /// Activities with outgoing edges, in label order.
    pub fn sources(&self) -> impl Iterator<Item = &ActivityLabel> {
        self.edges.keys()
    }

    /// Every activity in the source log, in label order.
    pub fn activities(&self) -> impl Iterator<Item = &ActivityLabel> {
        let mut all: Vec<&ActivityLabel> = self.edges.keys().chain(self.absorbing.iter()).collect();
        all.sort();
        all.into_iter()
    }

    /// All edges, grouped by `from` in label order.
    pub fn edges(&self) -> impl Iterator<Item = &TransitionEdge> {
        self.edges.values().flatten()
    }

    pub fn edge_count(&self) -> usize {
        self.summary.edges
    }

    pub fn summary(&self) -> &BuildSummary {
        &self.summary
    }

    /// Activities whose outgoing probabilities do not sum to one.
    /// Empty for every table the builder produces.
    pub fn unnormalized_sources(&self) -> Vec<&ActivityLabel> {
        self.edges
            .iter()
            .filter(|(_, group)| {
                let total: f64 = group.iter().map(|e| e.probability).sum();
                (total - 1.0).abs() > PROBABILITY_SUM_TOLERANCE
            })
            .map(|(label, _)| label)
            .collect()
    }
}
