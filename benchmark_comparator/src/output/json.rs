//!
//! JSON rendering of the comparison results.
//!

use crate::results::Comparison;

///
/// JSON rendering of the comparison results.
///
/// Undefined deltas and p-values are written as `null`.
///
#[derive(Debug, Default)]
pub struct Json {
    /// Serialized JSON.
    pub content: String,
}

impl TryFrom<&Comparison> for Json {
    type Error = serde_json::Error;

    fn try_from(comparison: &Comparison) -> Result<Self, Self::Error> {
        let content = serde_json::to_string_pretty(comparison)?;
        Ok(Self { content })
    }
}
