//!
//! The benchmark run representation.
//!

pub mod iteration;
pub mod statement;

use crate::input::benchmark::Benchmark as InputBenchmark;
use crate::model::error::Error;
use crate::model::error::Location;

use self::iteration::Iteration;

///
/// One named benchmark's full result from one execution of the suite.
///
#[derive(Debug, Clone, PartialEq)]
pub struct BenchmarkRun {
    name: String,
    items_per_second: f64,
    iterations: Vec<Iteration>,
}

impl BenchmarkRun {
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    ///
    /// The measured throughput. Non-positive values mark an invalid measurement.
    ///
    pub fn items_per_second(&self) -> f64 {
        self.items_per_second
    }

    ///
    /// The iterations in execution order.
    ///
    pub fn iterations(&self) -> &[Iteration] {
        self.iterations.as_slice()
    }
}

impl TryFrom<InputBenchmark> for BenchmarkRun {
    type Error = Error;

    fn try_from(benchmark: InputBenchmark) -> Result<Self, Self::Error> {
        let iterations = benchmark
            .metrics
            .into_iter()
            .enumerate()
            .map(|(index, iteration)| {
                Iteration::try_new(iteration, &Location::new(benchmark.name.as_str(), index))
            })
            .collect::<Result<Vec<Iteration>, Error>>()?;
        Ok(Self {
            name: benchmark.name,
            items_per_second: benchmark.items_per_second,
            iterations,
        })
    }
}
