//!
//! The benchmark comparator arguments.
//!

use std::path::PathBuf;

use clap::Parser;

///
/// The benchmark comparator arguments.
///
#[derive(Debug, Parser)]
#[command(about, long_about = None, arg_required_else_help = true)]
pub struct Arguments {
    /// The reference (before) benchmark result document.
    pub reference: PathBuf,

    /// The candidate (after) benchmark result document.
    pub candidate: PathBuf,

    /// A change is significant if its p-value is below this level.
    #[arg(long, default_value_t = benchmark_comparator::SignificanceConfig::DEFAULT_SIGNIFICANCE_LEVEL)]
    pub significance_level: f64,

    /// Minimal number of iterations on each side for a significant result.
    #[arg(long, default_value_t = benchmark_comparator::SignificanceConfig::DEFAULT_MIN_ITERATIONS)]
    pub min_iterations: usize,

    /// Minimal total run time on each side for a significant result, in nanoseconds.
    #[arg(long, default_value_t = benchmark_comparator::SignificanceConfig::DEFAULT_MIN_RUNTIME_NS)]
    pub min_runtime_ns: f64,

    /// Benchmark pairing: `positional` (default) or `name`.
    #[arg(long, default_value_t = benchmark_comparator::Pairing::Positional)]
    pub pairing: benchmark_comparator::Pairing,

    /// Output format: `table` (default) or `json`.
    #[arg(long, default_value_t = benchmark_comparator::OutputFormat::Table)]
    pub output_format: benchmark_comparator::OutputFormat,

    /// The output file. If unset, the result is printed to `stdout`.
    #[arg(short, long)]
    pub output_file: Option<PathBuf>,

    /// Disables terminal colors.
    #[arg(long)]
    pub no_color: bool,

    /// Only prints errors to `stderr`.
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Prints debug information to `stderr`.
    #[arg(short, long)]
    pub verbose: bool,
}

impl Arguments {
    ///
    /// Returns the significance policy configuration.
    ///
    pub fn significance_config(&self) -> benchmark_comparator::SignificanceConfig {
        benchmark_comparator::SignificanceConfig {
            significance_level: self.significance_level,
            min_iterations: self.min_iterations,
            min_runtime_ns: self.min_runtime_ns,
        }
    }
}
