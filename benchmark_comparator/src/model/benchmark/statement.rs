//!
//! A timed SQL statement.
//!

use crate::input::benchmark::Statement as InputStatement;
use crate::model::error::Error;
use crate::model::error::Location;

///
/// A timed SQL statement. All durations are non-negative nanoseconds.
///
#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    sql_translation_duration: f64,
    optimization_duration: f64,
    lqp_translation_duration: f64,
    plan_execution_duration: f64,
}

impl Statement {
    ///
    /// Validates a raw statement found at `location`.
    ///
    pub fn try_new(statement: InputStatement, location: &Location) -> Result<Self, Error> {
        Ok(Self {
            sql_translation_duration: location
                .check("sql_translation_duration", statement.sql_translation_duration)?,
            optimization_duration: location
                .check("optimization_duration", statement.optimization_duration)?,
            lqp_translation_duration: location
                .check("lqp_translation_duration", statement.lqp_translation_duration)?,
            plan_execution_duration: location
                .check("plan_execution_duration", statement.plan_execution_duration)?,
        })
    }

    pub fn sql_translation_duration(&self) -> f64 {
        self.sql_translation_duration
    }

    pub fn optimization_duration(&self) -> f64 {
        self.optimization_duration
    }

    pub fn lqp_translation_duration(&self) -> f64 {
        self.lqp_translation_duration
    }

    pub fn plan_execution_duration(&self) -> f64 {
        self.plan_execution_duration
    }

    ///
    /// The sum of the four statement phases.
    ///
    pub fn duration(&self) -> f64 {
        self.sql_translation_duration
            + self.optimization_duration
            + self.lqp_translation_duration
            + self.plan_execution_duration
    }
}
