//! Saturating Counter Tests.
//!
//! Verifies the 2-bit counter state machine: prediction threshold, saturation
//! at both ends, and single-step training.

use bpsim_core::Outcome;
use bpsim_core::bru::counter::SaturatingCounter;
use rstest::rstest;

#[test]
fn test_counter_starts_strongly_not_taken() {
    let c = SaturatingCounter::new();
    assert_eq!(c.value(), 0);
    assert_eq!(c.predict(), Outcome::NotTaken);
    assert_eq!(SaturatingCounter::default(), c);
}

#[rstest]
#[case(0, Outcome::NotTaken)]
#[case(1, Outcome::NotTaken)]
#[case(2, Outcome::Taken)]
#[case(3, Outcome::Taken)]
fn test_counter_prediction_threshold(#[case] value: u8, #[case] expected: Outcome) {
    let c = SaturatingCounter::from_value(value);
    assert_eq!(c.predict(), expected);
    assert_eq!(c.is_taken(), expected.is_taken());
}

#[rstest]
#[case(0, true, 1)]
#[case(1, true, 2)]
#[case(2, true, 3)]
#[case(3, true, 3)]
#[case(3, false, 2)]
#[case(2, false, 1)]
#[case(1, false, 0)]
#[case(0, false, 0)]
fn test_counter_update(#[case] start: u8, #[case] taken: bool, #[case] end: u8) {
    let mut c = SaturatingCounter::from_value(start);
    c.update(taken);
    assert_eq!(c.value(), end);
}

#[test]
fn test_counter_from_value_clamps() {
    assert_eq!(SaturatingCounter::from_value(200).value(), SaturatingCounter::MAX);
}

/// Two misses are needed to flip a strongly biased counter.
#[test]
fn test_counter_hysteresis() {
    let mut c = SaturatingCounter::from_value(3);
    c.decrement();
    assert_eq!(c.predict(), Outcome::Taken);
    c.decrement();
    assert_eq!(c.predict(), Outcome::NotTaken);
}

#[test]
fn test_counter_saturates_under_long_runs() {
    let mut c = SaturatingCounter::new();
    for _ in 0..100 {
        c.increment();
    }
    assert_eq!(c.value(), 3);
    for _ in 0..100 {
        c.decrement();
    }
    assert_eq!(c.value(), 0);
}
