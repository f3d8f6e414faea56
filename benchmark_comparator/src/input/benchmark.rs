//!
//! A benchmark record as written by the benchmark runner.
//!

///
/// A benchmark record as written by the benchmark runner.
///
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Benchmark {
    /// The benchmark name.
    pub name: String,
    /// The throughput. Non-positive values mark an invalid measurement.
    pub items_per_second: f64,
    /// The iterations in execution order.
    #[serde(default, alias = "iterations")]
    pub metrics: Vec<Iteration>,
}

///
/// A single repetition of a benchmark.
///
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Iteration {
    /// SQL parsing time, in nanoseconds.
    pub parse_duration: f64,
    /// The statements executed by the iteration.
    #[serde(default)]
    pub statements: Vec<Statement>,
}

///
/// Timings of a single SQL statement, in nanoseconds.
///
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Statement {
    pub sql_translation_duration: f64,
    pub optimization_duration: f64,
    pub lqp_translation_duration: f64,
    pub plan_execution_duration: f64,
}
