//!
//! The significance policy configuration.
//!

use serde::Deserialize;
use serde::Serialize;

use super::error::Error;

///
/// The significance policy configuration.
///
/// A result is reported as significant only if the p-value is below `significance_level`
/// and both runs have at least `min_iterations` samples summing up to at least `min_runtime_ns`.
///
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// The p-value cutoff. A result is significant if its p-value is strictly below it.
    pub significance_level: f64,
    /// The minimal number of samples on each side.
    pub min_iterations: usize,
    /// The minimal total run time on each side, in nanoseconds.
    pub min_runtime_ns: f64,
}

impl Config {
    /// The default p-value cutoff.
    pub const DEFAULT_SIGNIFICANCE_LEVEL: f64 = 0.001;

    /// The default minimal number of samples.
    pub const DEFAULT_MIN_ITERATIONS: usize = 10;

    /// The default minimal total run time: 59 seconds.
    pub const DEFAULT_MIN_RUNTIME_NS: f64 = 59.0 * 1_000_000_000.0;

    ///
    /// Checks that the thresholds are usable.
    ///
    pub fn validate(&self) -> Result<(), Error> {
        if !(self.significance_level > 0.0 && self.significance_level <= 1.0) {
            return Err(Error::InvalidConfig(format!(
                "significance level must be in (0, 1], got {}",
                self.significance_level
            )));
        }
        if !self.min_runtime_ns.is_finite() || self.min_runtime_ns < 0.0 {
            return Err(Error::InvalidConfig(format!(
                "minimal run time must be a non-negative number of nanoseconds, got {}",
                self.min_runtime_ns
            )));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            significance_level: Self::DEFAULT_SIGNIFICANCE_LEVEL,
            min_iterations: Self::DEFAULT_MIN_ITERATIONS,
            min_runtime_ns: Self::DEFAULT_MIN_RUNTIME_NS,
        }
    }
}
