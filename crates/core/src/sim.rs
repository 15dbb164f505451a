//! Trace replay.
//!
//! Drives a predictor with resolved branches in program order: for every
//! record the predictor is asked for a prediction, the prediction is scored,
//! and only then is the predictor trained with the real outcome.

use tracing::trace;

use crate::bru::BranchPredictor;
use crate::common::error::TraceError;
use crate::stats::PredictionStats;
use crate::trace::TraceRecord;

/// Predicts, scores and trains a single record.
#[inline]
pub fn step<P>(predictor: &mut P, record: TraceRecord, stats: &mut PredictionStats)
where
    P: BranchPredictor + ?Sized,
{
    let prediction = predictor.predict(record.pc);
    let hit = stats.record(prediction, record.outcome);
    trace!(
        pc = record.pc,
        predicted = %prediction,
        actual = record.outcome,
        hit,
        "branch"
    );
    predictor.train(record.pc, record.outcome);
}

/// Replays a fallible record stream, such as a [`TraceReader`](crate::trace::TraceReader).
///
/// # Errors
///
/// Stops at and returns the first [`TraceError`] in the stream.
pub fn replay<P, I>(predictor: &mut P, records: I) -> Result<PredictionStats, TraceError>
where
    P: BranchPredictor + ?Sized,
    I: IntoIterator<Item = Result<TraceRecord, TraceError>>,
{
    let mut stats = PredictionStats::new();
    for record in records {
        step(predictor, record?, &mut stats);
    }
    Ok(stats)
}

/// Replays records already held in memory.
pub fn replay_records<P>(predictor: &mut P, records: &[TraceRecord]) -> PredictionStats
where
    P: BranchPredictor + ?Sized,
{
    let mut stats = PredictionStats::new();
    for &record in records {
        step(predictor, record, &mut stats);
    }
    stats
}
