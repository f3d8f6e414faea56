//!
//! The benchmark comparator library.
//!

pub mod analysis;
pub mod input;
pub mod model;
pub mod output;
pub mod results;

pub use crate::analysis::compare;
pub use crate::analysis::durations::iteration_durations;
pub use crate::analysis::pairing::Error as PairingError;
pub use crate::analysis::pairing::Pairing;
pub use crate::analysis::significance::config::Config as SignificanceConfig;
pub use crate::analysis::significance::error::Error as SignificanceError;
pub use crate::analysis::significance::verdict::Caveat;
pub use crate::analysis::significance::verdict::Verdict;
pub use crate::analysis::significance::Evaluator;
pub use crate::analysis::throughput;
pub use crate::input::error::Error as InputError;
pub use crate::input::Input;
pub use crate::model::benchmark::BenchmarkRun;
pub use crate::model::error::Error as MalformedInputError;
pub use crate::model::report::Report;
pub use crate::output::format::Format as OutputFormat;
pub use crate::output::Output;
pub use crate::results::anomaly::Anomaly;
pub use crate::results::row::Evaluation;
pub use crate::results::row::Row;
pub use crate::results::Comparison;
