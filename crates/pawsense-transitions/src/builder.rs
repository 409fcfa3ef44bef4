//! TransitionTableBuilder: activity log → [`TransitionTable`].
//!
//! 1. Count out-of-order neighbours in the input, then stable sort by
//!    `start_time`.
//! 2. Pair each record with its successor; the last record has none.
//! 3. Elapsed time is the start-to-start gap in minutes.
//! 4. Group by `(from, to)`: mean elapsed time and count.
//! 5. Normalize counts per `from` into probabilities.

use std::collections::{BTreeMap, BTreeSet};

use pawsense_core::constants::MIN_RECORDS_FOR_TRANSITIONS;
use pawsense_core::errors::ModelError;
use pawsense_core::models::{ActivityLabel, ActivityRecord, TransitionEdge};
use pawsense_core::time::duration_minutes;
use tracing::{debug, info, warn};

use crate::table::{BuildSummary, TransitionTable};

#[derive(Default)]
struct PairStats {
    total_minutes: f64,
    count: u64,
}

/// Builds transition tables. Pure: the output depends only on the log.
pub struct TransitionTableBuilder;

impl TransitionTableBuilder {
    /// Build one table from the whole log, treating it as one subject.
    pub fn build(log: &[ActivityRecord]) -> Result<TransitionTable, ModelError> {
        if log.len() < MIN_RECORDS_FOR_TRANSITIONS {
            return Err(ModelError::InsufficientData {
                records: log.len(),
                required: MIN_RECORDS_FOR_TRANSITIONS,
            });
        }

        let negative_intervals = log
            .windows(2)
            .filter(|w| w[1].start_time < w[0].start_time)
            .count();
        if negative_intervals > 0 {
            warn!(
                negative_intervals,
                records = log.len(),
                "activity log is out of chronological order; sorting before pairing"
            );
        }

        let mut ordered: Vec<&ActivityRecord> = log.iter().collect();
        ordered.sort_by_key(|r| r.start_time);

        let mut pairs: BTreeMap<(&ActivityLabel, &ActivityLabel), PairStats> = BTreeMap::new();
        for window in ordered.windows(2) {
            let (current, next) = (window[0], window[1]);
            let elapsed = duration_minutes(next.start_time - current.start_time);
            let stats = pairs.entry((&current.activity, &next.activity)).or_default();
            stats.total_minutes += elapsed;
            stats.count += 1;
        }

        let mut departures: BTreeMap<&ActivityLabel, u64> = BTreeMap::new();
        for ((from, _), stats) in &pairs {
            *departures.entry(*from).or_default() += stats.count;
        }

        let mut edges: BTreeMap<ActivityLabel, Vec<TransitionEdge>> = BTreeMap::new();
        for ((from, to), stats) in &pairs {
            let total = departures[from];
            edges.entry((*from).clone()).or_default().push(TransitionEdge {
                from: (*from).clone(),
                to: (*to).clone(),
                mean_minutes: stats.total_minutes / stats.count as f64,
                observed_count: stats.count,
                probability: stats.count as f64 / total as f64,
            });
        }

        let seen: BTreeSet<&ActivityLabel> = ordered.iter().map(|r| &r.activity).collect();
        let absorbing: BTreeSet<ActivityLabel> = seen
            .iter()
            .filter(|label| !edges.contains_key(label.as_str()))
            .map(|label| (*label).clone())
            .collect();

        let summary = BuildSummary {
            records: log.len(),
            transitions: log.len() - 1,
            activities: seen.len(),
            edges: pairs.len(),
            negative_intervals,
        };
        info!(
            records = summary.records,
            activities = summary.activities,
            edges = summary.edges,
            "transition table built"
        );
        if !absorbing.is_empty() {
            debug!(absorbing = ?absorbing, "activities without successors");
        }

        Ok(TransitionTable::from_parts(edges, absorbing, summary))
    }

    /// Build one table per `subject_id`.
    ///
    /// Subjects with fewer than two records are skipped. Fails with
    /// `InsufficientData` only when no subject yields a table.
    pub fn build_per_subject(
        log: &[ActivityRecord],
    ) -> Result<BTreeMap<String, TransitionTable>, ModelError> {
        let mut by_subject: BTreeMap<&str, Vec<ActivityRecord>> = BTreeMap::new();
        for record in log {
            by_subject
                .entry(record.subject_id.as_str())
                .or_default()
                .push(record.clone());
        }

        let mut tables = BTreeMap::new();
        for (subject, records) in by_subject {
            match Self::build(&records) {
                Ok(table) => {
                    tables.insert(subject.to_string(), table);
                }
                Err(ModelError::InsufficientData { records, .. }) => {
                    warn!(subject, records, "skipping subject with too few records");
                }
            }
        }

        if tables.is_empty() {
            return Err(ModelError::InsufficientData {
                records: log.len(),
                required: MIN_RECORDS_FOR_TRANSITIONS,
            });
        }
        Ok(tables)
    }
}
