//!
//! Two-sided independent two-sample Student's t-test.
//!

use statrs::distribution::ContinuousCDF;
use statrs::distribution::StudentsT;

use super::error::Error;

///
/// The t-test outcome.
///
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TTest {
    /// The t statistic.
    pub statistic: f64,
    /// The degrees of freedom.
    pub degrees_of_freedom: f64,
    /// The two-sided p-value.
    pub p_value: f64,
}

///
/// Runs the two-sided Student's t-test with pooled variance over two independent samples.
///
/// Both samples must be non-empty with at least one degree of freedom in total.
/// If both samples are constant, the result is `p = 1` for equal values and `p = 0` otherwise.
/// Constant samples are detected on the values, since their means may differ by rounding.
///
pub fn ttest_ind(a: &[f64], b: &[f64]) -> Result<TTest, Error> {
    let insufficient = Error::InsufficientData {
        before: a.len(),
        after: b.len(),
    };
    if a.is_empty() || b.is_empty() || a.len() + b.len() < 3 {
        return Err(insufficient);
    }

    let (a_len, b_len) = (a.len() as f64, b.len() as f64);
    let degrees_of_freedom = a_len + b_len - 2.0;
    if is_constant(a) && is_constant(b) {
        return Ok(degenerate(a[0] - b[0], degrees_of_freedom));
    }

    let a_mean = mean(a);
    let b_mean = mean(b);
    let pooled_variance =
        (squared_deviations(a, a_mean) + squared_deviations(b, b_mean)) / degrees_of_freedom;
    let standard_error = (pooled_variance * (1.0 / a_len + 1.0 / b_len)).sqrt();

    let difference = a_mean - b_mean;
    if standard_error == 0.0 {
        return Ok(degenerate(difference, degrees_of_freedom));
    }

    let statistic = difference / standard_error;
    let distribution = StudentsT::new(0.0, 1.0, degrees_of_freedom)
        .map_err(|error| Error::Distribution(error.to_string()))?;
    let p_value = (2.0 * distribution.sf(statistic.abs())).clamp(0.0, 1.0);

    Ok(TTest {
        statistic,
        degrees_of_freedom,
        p_value,
    })
}

///
/// Resolves a test over zero-variance samples by the sign of the difference.
///
fn degenerate(difference: f64, degrees_of_freedom: f64) -> TTest {
    let (statistic, p_value) = if difference == 0.0 {
        (0.0, 1.0)
    } else {
        (f64::INFINITY.copysign(difference), 0.0)
    };
    TTest {
        statistic,
        degrees_of_freedom,
        p_value,
    }
}

fn is_constant(values: &[f64]) -> bool {
    values.iter().all(|value| *value == values[0])
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / (values.len() as f64)
}

fn squared_deviations(values: &[f64], mean: f64) -> f64 {
    values.iter().map(|value| (value - mean).powi(2)).sum()
}
