//! Predictor Facade Tests.
//!
//! Verifies configuration-driven construction, per-kind validation, and that
//! the facade dispatches exactly like the predictor it wraps.

use bpsim_core::bru::gshare::GsharePredictor;
use bpsim_core::sim;
use bpsim_core::{
    BranchPredictor, ConfigError, Outcome, Predictor, PredictorConfig, PredictorKind, TraceRecord,
};
use rstest::rstest;

use crate::common::train_n;

fn mixed_trace() -> Vec<TraceRecord> {
    (0u32..500)
        .map(|i| TraceRecord::new(0x40_0000 + (i % 7) * 4, i % 3 != 0))
        .collect()
}

#[rstest]
#[case(PredictorConfig::static_taken(), PredictorKind::Static, "Static")]
#[case(PredictorConfig::gshare(12), PredictorKind::Gshare, "Gshare")]
#[case(PredictorConfig::tournament(9, 10, 10), PredictorKind::Tournament, "Tournament")]
#[case(PredictorConfig::perceptron(12, 8, 8), PredictorKind::Perceptron, "Perceptron")]
fn test_configure_selects_variant(
    #[case] config: PredictorConfig,
    #[case] kind: PredictorKind,
    #[case] name: &str,
) {
    let bp = Predictor::configure(&config).unwrap();
    assert_eq!(bp.kind(), kind);
    assert_eq!(bp.name(), name);
    assert_eq!(kind.name(), name);
}

#[test]
fn test_static_always_taken() {
    let bp = Predictor::configure(&PredictorConfig::static_taken()).unwrap();
    for pc in [0, 0x1000, 0xFFFF_FFFF] {
        assert_eq!(bp.predict(pc), Outcome::Taken);
    }
}

#[test]
fn test_static_ignores_training() {
    let mut bp = Predictor::configure(&PredictorConfig::static_taken()).unwrap();
    train_n(&mut bp, 0x1000, false, 100);
    assert_eq!(bp.predict(0x1000), Outcome::Taken);
}

#[rstest]
#[case(PredictorConfig::gshare(31), "ghistory_bits")]
#[case(PredictorConfig::tournament(31, 10, 10), "ghistory_bits")]
#[case(PredictorConfig::tournament(10, 31, 10), "lhistory_bits")]
#[case(PredictorConfig::tournament(10, 10, 31), "pc_index_bits")]
#[case(PredictorConfig::perceptron(31, 10, 8), "ghistory_bits")]
#[case(PredictorConfig::perceptron(10, 31, 8), "pc_index_bits")]
fn test_configure_rejects_oversized_tables(
    #[case] config: PredictorConfig,
    #[case] expected: &str,
) {
    match Predictor::configure(&config) {
        Err(ConfigError::TableTooLarge { field, bits, max }) => {
            assert_eq!(field, expected);
            assert_eq!(bits, 31);
            assert_eq!(max, 30);
        }
        other => panic!("expected TableTooLarge for {expected}, got {other:?}"),
    }
}

/// Widths a variant does not use are never checked or allocated.
#[test]
fn test_configure_ignores_unused_fields() {
    let config = PredictorConfig {
        ghistory_bits: 64,
        lhistory_bits: 64,
        pc_index_bits: 64,
        weight_bits: Some(0),
        ..PredictorConfig::static_taken()
    };
    assert!(Predictor::configure(&config).is_ok());

    let config = PredictorConfig {
        lhistory_bits: 64,
        pc_index_bits: 64,
        ..PredictorConfig::gshare(8)
    };
    assert!(Predictor::configure(&config).is_ok());

    let config = PredictorConfig {
        lhistory_bits: 64,
        ..PredictorConfig::perceptron(8, 4, 8)
    };
    assert!(Predictor::configure(&config).is_ok());
}

#[test]
fn test_configure_requires_weight_bits_for_perceptron() {
    let config = PredictorConfig {
        predictor: PredictorKind::Perceptron,
        ..PredictorConfig::default()
    };
    assert!(matches!(
        Predictor::configure(&config),
        Err(ConfigError::MissingWeightBits)
    ));
}

#[test]
fn test_facade_matches_wrapped_predictor() {
    let config = PredictorConfig::gshare(6);
    let mut facade = Predictor::configure(&config).unwrap();
    let mut direct = GsharePredictor::new(&config).unwrap();

    for record in mixed_trace() {
        assert_eq!(facade.predict(record.pc), direct.predict(record.pc));
        facade.train(record.pc, record.outcome);
        direct.train(record.pc, record.outcome);
    }
}

#[test]
fn test_boxed_predictor_replays_identically() {
    let config = PredictorConfig::tournament(6, 6, 4);
    let trace = mixed_trace();

    let mut enum_bp = Predictor::configure(&config).unwrap();
    let mut boxed_bp = Predictor::configure(&config).unwrap().boxed();

    let a = sim::replay_records(&mut enum_bp, &trace);
    let b = sim::replay_records(&mut boxed_bp, &trace);
    assert_eq!(a, b);
    assert_eq!(a.branches, 500);
}

#[test]
fn test_independent_instances() {
    let config = PredictorConfig::perceptron(8, 4, 8);
    let mut trained = Predictor::configure(&config).unwrap();
    let fresh = Predictor::configure(&config).unwrap();

    train_n(&mut trained, 0x20, false, 50);
    assert_eq!(trained.predict(0x20), Outcome::NotTaken);
    assert_eq!(fresh.predict(0x20), Outcome::Taken);
}
