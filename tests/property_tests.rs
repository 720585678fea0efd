//! Property tests for the distance engine and fuzzy matcher.
//!
//! Weights are drawn from small multiples of 0.5 so every cost is exactly
//! representable and equalities can be checked without tolerances.

use edit_solver::core::{apply_edits, source_of};
use edit_solver::matching::run;
use edit_solver::{DistanceEngine, WeightConfig};
use proptest::prelude::*;

fn text() -> impl Strategy<Value = Vec<char>> {
    prop::collection::vec(prop::sample::select(vec!['a', 'b', 'c', ' ']), 0..12)
}

fn weight() -> impl Strategy<Value = f64> {
    (0u8..6).prop_map(|w| f64::from(w) * 0.5)
}

fn weights() -> impl Strategy<Value = WeightConfig> {
    (weight(), weight(), weight(), prop::option::of(weight())).prop_map(
        |(substitution, deletion, insertion, transposition)| WeightConfig {
            substitution,
            deletion,
            insertion,
            transposition,
        },
    )
}

fn engine(weights: WeightConfig) -> DistanceEngine {
    DistanceEngine::new(weights).unwrap()
}

proptest! {
    #[test]
    fn identity_has_zero_distance(a in text(), w in weights()) {
        prop_assert_eq!(engine(w).distance(&a, &a), 0.0);
    }

    #[test]
    fn symmetric_weights_give_symmetric_distance(
        a in text(),
        b in text(),
        sub in weight(),
        indel in weight(),
        trans in prop::option::of(weight()),
    ) {
        let w = WeightConfig {
            substitution: sub,
            deletion: indel,
            insertion: indel,
            transposition: trans,
        };
        let e = engine(w);
        prop_assert_eq!(e.distance(&a, &b), e.distance(&b, &a));
    }

    #[test]
    fn swapping_inputs_swaps_insert_and_delete(a in text(), b in text(), w in weights()) {
        let swapped = WeightConfig { deletion: w.insertion, insertion: w.deletion, ..w };
        prop_assert_eq!(engine(w).distance(&a, &b), engine(swapped).distance(&b, &a));
    }

    #[test]
    fn distance_bounded_by_path_through_empty(a in text(), b in text(), w in weights()) {
        let e = engine(w);
        let empty: Vec<char> = Vec::new();
        let bound = e.distance(&a, &empty) + e.distance(&empty, &b);
        prop_assert!(e.distance(&a, &b) <= bound);
    }

    #[test]
    fn trace_rebuilds_target(a in text(), b in text(), w in weights()) {
        let trace = engine(w).align(&a, &b);
        prop_assert_eq!(apply_edits(&trace.ops), b);
        prop_assert_eq!(source_of(&trace.ops), a);
    }

    #[test]
    fn trace_distance_matches_rolling_rows(a in text(), b in text(), w in weights()) {
        let e = engine(w);
        prop_assert_eq!(e.align(&a, &b).distance(), e.distance(&a, &b));
    }

    #[test]
    fn tally_counts_every_step(a in text(), b in text(), w in weights()) {
        let trace = engine(w).align(&a, &b);
        prop_assert_eq!(trace.tally.operation_count(), trace.ops.len());
    }

    #[test]
    fn cheap_transposition_never_increases_distance(a in text(), b in text()) {
        let plain = engine(WeightConfig::default()).distance(&a, &b);
        let damerau = engine(WeightConfig::default().with_transposition(1.0)).distance(&a, &b);
        prop_assert!(damerau <= plain);
    }

    #[test]
    fn query_matches_itself_best(
        words in prop::collection::vec("[a-c]{1,5}", 1..4),
        others in prop::collection::vec("[a-c]{1,5}", 0..4),
    ) {
        let query = words.join(" ");
        let mut candidates = others.clone();
        candidates.push(query.clone());

        let results = run(&query, &candidates, &WeightConfig::default(), None).unwrap();
        let own = results.iter().find(|m| m.candidate == query).unwrap();

        #[allow(clippy::cast_precision_loss)]
        let maximum = words.len() as f64;
        prop_assert!((own.score - maximum).abs() < 1e-9);
        prop_assert!(results.iter().all(|m| m.score <= maximum + 1e-9));
    }
}
