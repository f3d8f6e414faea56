//!
//! The validated result document.
//!

use crate::input::Input;
use crate::model::benchmark::BenchmarkRun;
use crate::model::error::Error;

///
/// The validated result document of one benchmark suite execution.
///
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    /// The benchmark runs in execution order.
    pub benchmarks: Vec<BenchmarkRun>,
}

impl TryFrom<Input> for Report {
    type Error = Error;

    fn try_from(input: Input) -> Result<Self, Self::Error> {
        let benchmarks = input
            .benchmarks
            .into_iter()
            .map(BenchmarkRun::try_from)
            .collect::<Result<Vec<BenchmarkRun>, Error>>()?;
        Ok(Self { benchmarks })
    }
}
