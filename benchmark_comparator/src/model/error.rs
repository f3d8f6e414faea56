//!
//! Malformed benchmark record error.
//!

///
/// Position of a timing value inside a result document.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    /// The benchmark name.
    pub benchmark: String,
    /// The iteration index, starting from zero.
    pub iteration: usize,
    /// The statement index inside the iteration, if the value belongs to a statement.
    pub statement: Option<usize>,
}

impl Location {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(benchmark: &str, iteration: usize) -> Self {
        Self {
            benchmark: benchmark.to_owned(),
            iteration,
            statement: None,
        }
    }

    ///
    /// Returns the location of a statement inside this iteration.
    ///
    pub fn statement(&self, index: usize) -> Self {
        Self {
            statement: Some(index),
            ..self.clone()
        }
    }

    ///
    /// Checks that a duration is finite and non-negative.
    ///
    pub fn check(&self, field: &'static str, value: f64) -> Result<f64, Error> {
        if !value.is_finite() {
            return Err(Error::NonFiniteDuration {
                location: self.clone(),
                field,
                value,
            });
        }
        if value < 0.0 {
            return Err(Error::NegativeDuration {
                location: self.clone(),
                field,
                value,
            });
        }
        Ok(value)
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "benchmark `{}`, iteration #{}", self.benchmark, self.iteration)?;
        if let Some(statement) = self.statement {
            write!(f, ", statement #{statement}")?;
        }
        Ok(())
    }
}

///
/// Malformed benchmark record error.
///
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// A duration is below zero.
    #[error("Malformed input at {location}: `{field}` is negative ({value})")]
    NegativeDuration {
        /// The value position.
        location: Location,
        /// The field name.
        field: &'static str,
        /// The offending value.
        value: f64,
    },
    /// A duration is NaN or infinite.
    #[error("Malformed input at {location}: `{field}` is not a finite number ({value})")]
    NonFiniteDuration {
        /// The value position.
        location: Location,
        /// The field name.
        field: &'static str,
        /// The offending value.
        value: f64,
    },
}
