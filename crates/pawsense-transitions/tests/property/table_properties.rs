use chrono::{Duration, TimeZone, Utc};
use pawsense_core::constants::PROBABILITY_SUM_TOLERANCE;
use pawsense_core::models::ActivityRecord;
use pawsense_transitions::TransitionTableBuilder;
use proptest::prelude::*;

const LABELS: [&str; 5] = ["Sleep", "Walk", "Play", "Potty", "Relax"];

fn arb_log() -> impl Strategy<Value = Vec<ActivityRecord>> {
    prop::collection::vec((0usize..LABELS.len(), 0i64..600), 2..60).prop_map(|steps| {
        let base = Utc.with_ymd_and_hms(2025, 5, 1, 0, 0, 0).unwrap();
        steps
            .into_iter()
            .map(|(label, offset_minutes)| {
                ActivityRecord::new(
                    "Buddy",
                    LABELS[label],
                    base + Duration::minutes(offset_minutes),
                    Duration::minutes(5),
                )
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn outgoing_probabilities_sum_to_one(log in arb_log()) {
        let table = TransitionTableBuilder::build(&log).unwrap();
        for source in table.sources() {
            let total: f64 = table.outgoing(source.as_str()).iter().map(|e| e.probability).sum();
            prop_assert!((total - 1.0).abs() <= PROBABILITY_SUM_TOLERANCE, "{source}: {total}");
        }
    }

    #[test]
    fn counts_cover_every_pair(log in arb_log()) {
        let table = TransitionTableBuilder::build(&log).unwrap();
        let counted: u64 = table.edges().map(|e| e.observed_count).sum();
        prop_assert_eq!(counted as usize, log.len() - 1);
        prop_assert!(table.edges().all(|e| e.observed_count >= 1));
    }

    #[test]
    fn sorted_log_has_no_negative_gaps(log in arb_log()) {
        let table = TransitionTableBuilder::build(&log).unwrap();
        prop_assert_eq!(table.summary().negative_intervals, 0);
        prop_assert!(table.edges().all(|e| e.mean_minutes >= 0.0));
    }

    #[test]
    fn build_is_deterministic(log in arb_log()) {
        let a = TransitionTableBuilder::build(&log).unwrap();
        let b = TransitionTableBuilder::build(&log).unwrap();
        let ea: Vec<_> = a.edges().cloned().collect();
        let eb: Vec<_> = b.edges().cloned().collect();
        prop_assert_eq!(ea, eb);
    }
}
