//! Randomized Predictor Invariants.
//!
//! Drives every predictor with arbitrary branch streams and checks that
//! counters, histories and weights stay inside their ranges, and that two
//! identically configured predictors never diverge.

use bpsim_core::{BranchPredictor, Predictor, PredictorConfig};
use proptest::prelude::*;

use crate::common::{gshare, perceptron, tournament};

fn branches() -> impl Strategy<Value = Vec<(u32, bool)>> {
    prop::collection::vec((any::<u32>(), any::<bool>()), 1..300)
}

fn any_config() -> impl Strategy<Value = PredictorConfig> {
    prop_oneof![
        Just(PredictorConfig::static_taken()),
        (0u32..12).prop_map(PredictorConfig::gshare),
        (0u32..10, 0u32..10, 0u32..8)
            .prop_map(|(g, l, p)| PredictorConfig::tournament(g, l, p)),
        (0u32..16, 0u32..6, 1u32..=12)
            .prop_map(|(g, p, w)| PredictorConfig::perceptron(g, p, w)),
    ]
}

proptest! {
    #[test]
    fn gshare_counters_and_history_bounded(g in 0u32..12, stream in branches()) {
        let mut bp = gshare(g);
        for (pc, taken) in stream {
            prop_assert!(bp.index(pc) < bp.table().len());
            bp.train(pc, taken);
            prop_assert!(bp.history().value() <= bp.history().mask());
        }
        prop_assert!(bp.table().counters().iter().all(|c| c.value() <= 3));
    }

    #[test]
    fn tournament_counters_and_histories_bounded(
        g in 0u32..8,
        l in 0u32..8,
        p in 0u32..6,
        stream in branches(),
    ) {
        let mut bp = tournament(g, l, p);
        for (pc, taken) in stream {
            bp.train(pc, taken);
            prop_assert!(bp.history().value() < (1 << g));
            prop_assert!(bp.local_history(pc).value() < (1 << l));
        }
        for table in [bp.global_table(), bp.local_table(), bp.choice_table()] {
            prop_assert!(table.counters().iter().all(|c| c.value() <= 3));
        }
    }

    #[test]
    fn perceptron_weights_bounded(
        g in 0u32..16,
        p in 0u32..4,
        w in 1u32..=8,
        stream in branches(),
    ) {
        let mut bp = perceptron(g, p, w);
        let (min, max) = bp.weight_bounds();
        for (pc, taken) in stream {
            bp.train(pc, taken);
            prop_assert!(bp.all_weights().iter().all(|&x| (min..=max).contains(&x)));
        }
    }

    #[test]
    fn identical_predictors_agree(config in any_config(), stream in branches()) {
        let mut a = Predictor::configure(&config).unwrap();
        let mut b = Predictor::configure(&config).unwrap();
        for (pc, taken) in stream {
            prop_assert_eq!(a.predict(pc), b.predict(pc));
            a.train(pc, taken);
            b.train(pc, taken);
        }
    }

    #[test]
    fn predict_does_not_mutate(config in any_config(), stream in branches()) {
        let mut a = Predictor::configure(&config).unwrap();
        let mut b = Predictor::configure(&config).unwrap();
        for (pc, taken) in stream {
            for _ in 0..3 {
                let _ = a.predict(pc);
            }
            prop_assert_eq!(a.predict(pc), b.predict(pc));
            a.train(pc, taken);
            b.train(pc, taken);
        }
    }
}
