//!
//! The significance verdict.
//!

use serde::Deserialize;
use serde::Serialize;

///
/// The reason a result cannot be reported as significant.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Caveat {
    /// The total run time of either side is below the configured minimum.
    RunTimeTooShort,
    /// Either side has fewer samples than the configured minimum.
    NotEnoughRuns,
}

impl std::fmt::Display for Caveat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RunTimeTooShort => write!(f, "run time too short"),
            Self::NotEnoughRuns => write!(f, "not enough runs"),
        }
    }
}

///
/// The significance verdict for one pair of benchmark runs.
///
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Verdict {
    /// The full-precision two-sided p-value.
    pub p_value: f64,
    /// Whether the change may be reported as significant.
    pub is_significant: bool,
    /// The reasons of a downgrade, runtime check first.
    pub caveats: Vec<Caveat>,
}
