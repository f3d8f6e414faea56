//!
//! The significance evaluation error.
//!

///
/// The significance evaluation error.
///
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// The t-test is undefined for the given sample sizes.
    #[error("Insufficient data: {before} reference and {after} candidate samples")]
    InsufficientData {
        /// The number of reference samples.
        before: usize,
        /// The number of candidate samples.
        after: usize,
    },
    /// The policy thresholds are unusable.
    #[error("Invalid significance configuration: {0}")]
    InvalidConfig(String),
    /// The t distribution could not be constructed.
    #[error("Student's t distribution: {0}")]
    Distribution(String),
}
