//!
//! The significance evaluator.
//!

pub mod config;
pub mod error;
pub mod ttest;
pub mod verdict;


use self::config::Config;
use self::error::Error;
use self::verdict::Caveat;
use self::verdict::Verdict;

///
/// Decides whether the difference between two duration sample sets is significant.
///
#[derive(Debug, Clone, Default)]
pub struct Evaluator {
    /// The policy thresholds.
    config: Config,
}

impl Evaluator {
    ///
    /// Creates an evaluator with validated thresholds.
    ///
    pub fn new(config: Config) -> Result<Self, Error> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    ///
    /// Evaluates the reference `before` and candidate `after` duration samples.
    ///
    /// Returns [`Error::InsufficientData`] if the t-test is undefined for the sample sizes,
    /// that is if either side is empty or both sides have a single sample.
    ///
    pub fn evaluate(&self, before: &[f64], after: &[f64]) -> Result<Verdict, Error> {
        let ttest = ttest::ttest_ind(before, after)?;
        let caveats = self.caveats(before, after);
        let is_significant = ttest.p_value < self.config.significance_level && caveats.is_empty();

        tracing::debug!(
            statistic = ttest.statistic,
            degrees_of_freedom = ttest.degrees_of_freedom,
            p_value = ttest.p_value,
            is_significant,
            "t-test evaluated"
        );

        Ok(Verdict {
            p_value: ttest.p_value,
            is_significant,
            caveats,
        })
    }

    ///
    /// Returns the policy caveats for the samples: the run time check, then the sample count check.
    ///
    pub fn caveats(&self, before: &[f64], after: &[f64]) -> Vec<Caveat> {
        let mut caveats = Vec::with_capacity(2);

        let before_runtime: f64 = before.iter().sum();
        let after_runtime: f64 = after.iter().sum();
        if before_runtime < self.config.min_runtime_ns || after_runtime < self.config.min_runtime_ns
        {
            caveats.push(Caveat::RunTimeTooShort);
        }

        if before.len() < self.config.min_iterations || after.len() < self.config.min_iterations {
            caveats.push(Caveat::NotEnoughRuns);
        }

        caveats
    }
}
