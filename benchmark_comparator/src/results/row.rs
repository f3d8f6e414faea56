//!
//! A benchmark comparison row.
//!

use serde::Deserialize;
use serde::Serialize;

use crate::analysis::significance::verdict::Caveat;
use crate::analysis::significance::verdict::Verdict;

///
/// The significance outcome of a benchmark pair.
///
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Evaluation {
    /// The t-test was run.
    Evaluated(Verdict),
    /// The t-test is undefined for the sample sizes.
    InsufficientData {
        /// The policy caveats, always including [`Caveat::NotEnoughRuns`].
        caveats: Vec<Caveat>,
    },
}

impl Evaluation {
    ///
    /// The p-value, if the t-test was run.
    ///
    pub fn p_value(&self) -> Option<f64> {
        match self {
            Self::Evaluated(verdict) => Some(verdict.p_value),
            Self::InsufficientData { .. } => None,
        }
    }

    pub fn is_significant(&self) -> bool {
        match self {
            Self::Evaluated(verdict) => verdict.is_significant,
            Self::InsufficientData { .. } => false,
        }
    }

    pub fn caveats(&self) -> &[Caveat] {
        match self {
            Self::Evaluated(verdict) => verdict.caveats.as_slice(),
            Self::InsufficientData { caveats } => caveats.as_slice(),
        }
    }
}

///
/// A benchmark comparison row.
///
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Row {
    /// The display name.
    pub name: String,
    /// The reference throughput.
    pub reference_items_per_second: f64,
    /// The number of reference iterations.
    pub reference_runs: usize,
    /// The candidate throughput.
    pub candidate_items_per_second: f64,
    /// The number of candidate iterations.
    pub candidate_runs: usize,
    /// The relative throughput change, undefined for a non-positive reference throughput.
    pub delta: Option<f64>,
    /// The significance outcome.
    pub evaluation: Evaluation,
}
