//!
//! Matching of reference and candidate benchmark runs.
//!

use std::collections::BTreeMap;

use crate::model::benchmark::BenchmarkRun;
use crate::results::anomaly::Anomaly;

///
/// Benchmark pairing error.
///
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Some benchmarks exist on one side only.
    #[error("Unmatched benchmarks: reference-only [{}], candidate-only [{}]", .reference.join(", "), .candidate.join(", "))]
    Unmatched {
        /// Names found in the reference run only.
        reference: Vec<String>,
        /// Names found in the candidate run only.
        candidate: Vec<String>,
    },
    /// A benchmark name occurs more than once in a run.
    #[error("Benchmark `{name}` occurs more than once")]
    Duplicate {
        /// The repeated name.
        name: String,
    },
}

///
/// Benchmark pairing strategy.
///
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Pairing {
    /// The i-th reference benchmark is compared to the i-th candidate benchmark.
    #[default]
    Positional,
    /// Benchmarks are matched by name.
    Name,
}

///
/// A reference and candidate run of the same benchmark.
///
#[derive(Debug, Clone)]
pub struct Pair<'a> {
    /// The display name. Differing positional names are shown as `reference -> candidate`.
    pub name: String,
    /// The reference run.
    pub reference: &'a BenchmarkRun,
    /// The candidate run.
    pub candidate: &'a BenchmarkRun,
}

///
/// The pairing outcome.
///
#[derive(Debug, Clone, Default)]
pub struct Pairs<'a> {
    /// The matched runs.
    pub pairs: Vec<Pair<'a>>,
    /// The suite-level anomalies found while pairing.
    pub anomalies: Vec<Anomaly>,
}

impl Pairing {
    ///
    /// Pairs the reference and candidate runs.
    ///
    pub fn pair<'a>(
        &self,
        reference: &'a [BenchmarkRun],
        candidate: &'a [BenchmarkRun],
    ) -> Result<Pairs<'a>, Error> {
        match self {
            Self::Positional => Ok(Self::pair_positional(reference, candidate)),
            Self::Name => Self::pair_by_name(reference, candidate),
        }
    }

    fn pair_positional<'a>(
        reference: &'a [BenchmarkRun],
        candidate: &'a [BenchmarkRun],
    ) -> Pairs<'a> {
        let mut anomalies = Vec::new();
        if reference.len() != candidate.len() {
            let anomaly = Anomaly::LengthMismatch {
                reference: reference.len(),
                candidate: candidate.len(),
            };
            tracing::warn!("{anomaly}");
            anomalies.push(anomaly);
        }

        let pairs = reference
            .iter()
            .zip(candidate.iter())
            .map(|(reference, candidate)| {
                let name = if reference.name() == candidate.name() {
                    reference.name().to_owned()
                } else {
                    format!("{} -> {}", reference.name(), candidate.name())
                };
                Pair {
                    name,
                    reference,
                    candidate,
                }
            })
            .collect();

        Pairs { pairs, anomalies }
    }

    fn pair_by_name<'a>(
        reference: &'a [BenchmarkRun],
        candidate: &'a [BenchmarkRun],
    ) -> Result<Pairs<'a>, Error> {
        let candidates = index_by_name(candidate)?;
        let references = index_by_name(reference)?;

        let reference_only: Vec<String> = references
            .keys()
            .filter(|name| !candidates.contains_key(*name))
            .map(|name| (*name).to_owned())
            .collect();
        let candidate_only: Vec<String> = candidates
            .keys()
            .filter(|name| !references.contains_key(*name))
            .map(|name| (*name).to_owned())
            .collect();
        if !reference_only.is_empty() || !candidate_only.is_empty() {
            return Err(Error::Unmatched {
                reference: reference_only,
                candidate: candidate_only,
            });
        }

        let pairs = reference
            .iter()
            .map(|reference| Pair {
                name: reference.name().to_owned(),
                reference,
                candidate: candidates[reference.name()],
            })
            .collect();

        Ok(Pairs {
            pairs,
            anomalies: vec![],
        })
    }
}

fn index_by_name(runs: &[BenchmarkRun]) -> Result<BTreeMap<&str, &BenchmarkRun>, Error> {
    let mut index = BTreeMap::new();
    for run in runs.iter() {
        if index.insert(run.name(), run).is_some() {
            return Err(Error::Duplicate {
                name: run.name().to_owned(),
            });
        }
    }
    Ok(index)
}

impl std::str::FromStr for Pairing {
    type Err = anyhow::Error;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        match string.to_lowercase().as_str() {
            "positional" => Ok(Self::Positional),
            "name" => Ok(Self::Name),
            string => anyhow::bail!(
                "Unknown pairing `{string}`. Supported pairings: {}",
                [Self::Positional, Self::Name]
                    .into_iter()
                    .map(|element| element.to_string())
                    .collect::<Vec<String>>()
                    .join(", ")
            ),
        }
    }
}

impl std::fmt::Display for Pairing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Pairing::Positional => write!(f, "positional"),
            Pairing::Name => write!(f, "name"),
        }
    }
}
