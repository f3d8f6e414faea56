//!
//! A single repetition of a benchmark.
//!

use crate::input::benchmark::Iteration as InputIteration;
use crate::model::error::Error;
use crate::model::error::Location;

use super::statement::Statement;

///
/// A single repetition of a benchmark.
///
#[derive(Debug, Clone, PartialEq)]
pub struct Iteration {
    parse_duration: f64,
    statements: Vec<Statement>,
}

impl Iteration {
    ///
    /// Validates a raw iteration found at `location`.
    ///
    pub fn try_new(iteration: InputIteration, location: &Location) -> Result<Self, Error> {
        let parse_duration = location.check("parse_duration", iteration.parse_duration)?;
        let statements = iteration
            .statements
            .into_iter()
            .enumerate()
            .map(|(index, statement)| Statement::try_new(statement, &location.statement(index)))
            .collect::<Result<Vec<Statement>, Error>>()?;
        Ok(Self {
            parse_duration,
            statements,
        })
    }

    pub fn parse_duration(&self) -> f64 {
        self.parse_duration
    }

    pub fn statements(&self) -> &[Statement] {
        self.statements.as_slice()
    }
}
