//!
//! Suite-level comparison anomalies.
//!

use serde::Deserialize;
use serde::Serialize;

///
/// A suite-level comparison anomaly.
///
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Anomaly {
    /// The runs have different numbers of benchmarks. Only the common prefix is compared.
    LengthMismatch {
        /// The number of reference benchmarks.
        reference: usize,
        /// The number of candidate benchmarks.
        candidate: usize,
    },
}

impl std::fmt::Display for Anomaly {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LengthMismatch {
                reference,
                candidate,
            } => write!(
                f,
                "The reference run has {reference} benchmarks, but the candidate run has {candidate}; only the first {} are compared",
                reference.min(candidate)
            ),
        }
    }
}
