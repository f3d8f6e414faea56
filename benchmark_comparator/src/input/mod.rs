//!
//! Benchmark result document.
//!

pub mod benchmark;
pub mod error;

use std::path::Path;

use self::benchmark::Benchmark;
use self::error::Error as InputError;

///
/// Benchmark result document, as written by the benchmark runner.
///
#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct Input {
    /// The runner context: machine, build type, scale factor, etc.
    /// It is not used by the comparison.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<serde_json::Value>,
    /// The benchmark records in execution order.
    pub benchmarks: Vec<Benchmark>,
}

impl TryFrom<&Path> for Input {
    type Error = InputError;

    fn try_from(path: &Path) -> Result<Self, Self::Error> {
        let text = std::fs::read_to_string(path).map_err(|error| InputError::Reading {
            error,
            path: path.to_path_buf(),
        })?;
        if text.trim().is_empty() {
            return Err(InputError::EmptyFile {
                path: path.to_path_buf(),
            });
        }
        let json: Self =
            serde_json::from_str(text.as_str()).map_err(|error| InputError::Parsing {
                error,
                path: path.to_path_buf(),
            })?;
        Ok(json)
    }
}
