//!
//! Comparison of a reference and a candidate benchmark run.
//!

pub mod durations;
pub mod pairing;
pub mod significance;
pub mod throughput;

#[cfg(test)]
mod tests;

use crate::model::report::Report;
use crate::results::row::Evaluation;
use crate::results::row::Row;
use crate::results::Comparison;

use self::durations::iteration_durations;
use self::pairing::Pair;
use self::pairing::Pairing;
use self::significance::error::Error as SignificanceError;
use self::significance::verdict::Caveat;
use self::significance::Evaluator;

///
/// Compares the `reference` and `candidate` runs benchmark by benchmark.
///
/// A benchmark whose samples do not allow a t-test gets an insufficient-data row,
/// the remaining benchmarks are compared as usual.
///
pub fn compare(
    reference: &Report,
    candidate: &Report,
    evaluator: &Evaluator,
    pairing: Pairing,
) -> Result<Comparison, pairing::Error> {
    let pairs = pairing.pair(reference.benchmarks.as_slice(), candidate.benchmarks.as_slice())?;

    let rows: Vec<Row> = pairs
        .pairs
        .iter()
        .map(|pair| compare_pair(pair, evaluator))
        .collect();
    let average_delta = throughput::average(rows.iter().map(|row| row.delta));

    Ok(Comparison {
        significance_level: evaluator.config().significance_level,
        rows,
        average_delta,
        anomalies: pairs.anomalies,
    })
}

///
/// Compares a single benchmark pair.
///
pub fn compare_pair(pair: &Pair, evaluator: &Evaluator) -> Row {
    let _span = tracing::debug_span!("benchmark", name = pair.name.as_str()).entered();

    let before = iteration_durations(pair.reference.iterations());
    let after = iteration_durations(pair.candidate.iterations());

    let evaluation = match evaluator.evaluate(before.as_slice(), after.as_slice()) {
        Ok(verdict) => Evaluation::Evaluated(verdict),
        Err(error) => {
            if !matches!(error, SignificanceError::InsufficientData { .. }) {
                tracing::warn!("Benchmark `{}` cannot be evaluated: {error}", pair.name);
            }
            let mut caveats = evaluator.caveats(before.as_slice(), after.as_slice());
            if !caveats.contains(&Caveat::NotEnoughRuns) {
                caveats.push(Caveat::NotEnoughRuns);
            }
            Evaluation::InsufficientData { caveats }
        }
    };

    Row {
        name: pair.name.clone(),
        reference_items_per_second: pair.reference.items_per_second(),
        reference_runs: before.len(),
        candidate_items_per_second: pair.candidate.items_per_second(),
        candidate_runs: after.len(),
        delta: throughput::delta(
            pair.reference.items_per_second(),
            pair.candidate.items_per_second(),
        ),
        evaluation,
    }
}
