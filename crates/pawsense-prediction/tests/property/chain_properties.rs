use chrono::{Duration, TimeZone, Utc};
use pawsense_core::models::ActivityRecord;
use pawsense_prediction::{chain_size, predict_chain, predict_next};
use pawsense_transitions::TransitionTableBuilder;
use proptest::prelude::*;

const LABELS: [&str; 4] = ["Sleep", "Walk", "Play", "Potty"];

fn arb_log() -> impl Strategy<Value = Vec<ActivityRecord>> {
    prop::collection::vec((0usize..LABELS.len(), 1i64..240), 2..40).prop_map(|steps| {
        let mut t = Utc.with_ymd_and_hms(2025, 5, 1, 0, 0, 0).unwrap();
        steps
            .into_iter()
            .map(|(label, gap)| {
                let record = ActivityRecord::new("Buddy", LABELS[label], t, Duration::minutes(5));
                t += Duration::minutes(gap);
                record
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn chain_size_is_bounded_by_branching(
        log in arb_log(),
        start in 0usize..LABELS.len(),
        max_depth in 1usize..5,
    ) {
        let table = TransitionTableBuilder::build(&log).unwrap();
        let t0 = Utc.with_ymd_and_hms(2025, 8, 9, 15, 0, 0).unwrap();
        let nodes = predict_chain(&table, LABELS[start], t0, max_depth);

        let b = table.max_out_degree();
        let bound: usize = (1..=max_depth as u32).map(|d| b.pow(d)).sum();
        prop_assert!(nodes.len() <= bound);
        prop_assert!(nodes.iter().all(|n| n.depth >= 1 && n.depth <= max_depth));
        prop_assert!(nodes.iter().all(|n| n.path_probability > 0.0 && n.path_probability <= 1.0));
    }

    #[test]
    fn counted_size_equals_expanded_size(
        log in arb_log(),
        start in 0usize..LABELS.len(),
        max_depth in 0usize..5,
    ) {
        let table = TransitionTableBuilder::build(&log).unwrap();
        let t0 = Utc.with_ymd_and_hms(2025, 8, 9, 15, 0, 0).unwrap();
        let expanded = predict_chain(&table, LABELS[start], t0, max_depth).len() as u64;
        prop_assert_eq!(chain_size(&table, LABELS[start], max_depth), expanded);
    }

    #[test]
    fn chain_is_deterministic(log in arb_log(), max_depth in 1usize..4) {
        let table = TransitionTableBuilder::build(&log).unwrap();
        let t0 = Utc.with_ymd_and_hms(2025, 8, 9, 15, 0, 0).unwrap();
        let a = serde_json::to_string(&predict_chain(&table, "Sleep", t0, max_depth)).unwrap();
        let b = serde_json::to_string(&predict_chain(&table, "Sleep", t0, max_depth)).unwrap();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn next_matches_most_probable_depth_one_node(log in arb_log(), start in 0usize..LABELS.len()) {
        let table = TransitionTableBuilder::build(&log).unwrap();
        let t0 = Utc.with_ymd_and_hms(2025, 8, 9, 15, 0, 0).unwrap();
        let first_level = predict_chain(&table, LABELS[start], t0, 1);
        match predict_next(&table, LABELS[start]) {
            None => prop_assert!(first_level.is_empty()),
            Some(next) => {
                let best = first_level
                    .iter()
                    .map(|n| n.path_probability)
                    .fold(0.0_f64, f64::max);
                prop_assert_eq!(next.probability, best);
            }
        }
    }

    #[test]
    fn path_probability_never_increases_along_a_branch(log in arb_log()) {
        let table = TransitionTableBuilder::build(&log).unwrap();
        let t0 = Utc.with_ymd_and_hms(2025, 8, 9, 15, 0, 0).unwrap();
        let nodes = predict_chain(&table, "Walk", t0, 4);
        for pair in nodes.windows(2) {
            if pair[1].depth == pair[0].depth + 1 {
                prop_assert!(pair[1].path_probability <= pair[0].path_probability);
                prop_assert!(pair[1].minutes_from_start >= pair[0].minutes_from_start);
            }
        }
    }
}
