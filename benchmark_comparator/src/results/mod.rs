//!
//! The benchmark comparison results.
//!

pub mod anomaly;
pub mod row;

use serde::Deserialize;
use serde::Serialize;

use self::anomaly::Anomaly;
use self::row::Row;

///
/// The benchmark comparison results.
///
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comparison {
    /// The p-value cutoff the rows were evaluated with.
    pub significance_level: f64,
    /// One row per benchmark pair.
    pub rows: Vec<Row>,
    /// The mean of the defined throughput changes.
    pub average_delta: Option<f64>,
    /// The suite-level anomalies.
    pub anomalies: Vec<Anomaly>,
}
