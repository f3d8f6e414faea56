//!
//! Per-iteration duration samples.
//!

use crate::model::benchmark::iteration::Iteration;

///
/// Returns the total duration of every iteration, in execution order.
///
/// Each sample is the sum of all statement phases of the iteration plus its parsing time.
/// The samples stay independent observations, nothing is aggregated across iterations.
///
pub fn iteration_durations(iterations: &[Iteration]) -> Vec<f64> {
    iterations.iter().map(iteration_duration).collect()
}

///
/// Returns the total duration of a single iteration.
///
pub fn iteration_duration(iteration: &Iteration) -> f64 {
    let statements: f64 = iteration
        .statements()
        .iter()
        .fold(0.0, |total, statement| total + statement.duration());
    statements + iteration.parse_duration()
}
