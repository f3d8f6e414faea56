//!
//! The benchmark comparator binary.
//!

pub(crate) mod arguments;

use std::path::Path;

use clap::error::ContextKind;
use clap::error::ContextValue;
use clap::error::ErrorKind;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use self::arguments::Arguments;

///
/// Whether clap rejected an option rather than a positional argument.
///
fn is_unknown_flag(error: &clap::Error) -> bool {
    matches!(
        error.get(ContextKind::InvalidArg),
        Some(ContextValue::String(argument)) if argument.starts_with('-')
    )
}

///
/// The application entry point.
///
fn main() -> anyhow::Result<()> {
    let arguments = match Arguments::try_parse() {
        Ok(arguments) => arguments,
        Err(error) => match error.kind() {
            ErrorKind::DisplayHelp
            | ErrorKind::DisplayVersion
            | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
            | ErrorKind::MissingRequiredArgument => {
                error.print()?;
                return Ok(());
            }
            // An extra positional argument is a wrong argument count, a misspelled flag is not.
            ErrorKind::UnknownArgument if !is_unknown_flag(&error) => {
                error.print()?;
                return Ok(());
            }
            _ => return Err(error.into()),
        },
    };

    init_tracing(arguments.quiet, arguments.verbose);
    if arguments.no_color || arguments.output_file.is_some() {
        colored::control::set_override(false);
    }

    let evaluator = benchmark_comparator::Evaluator::new(arguments.significance_config())?;
    let reference = load(arguments.reference.as_path())?;
    let candidate = load(arguments.candidate.as_path())?;

    let comparison =
        benchmark_comparator::compare(&reference, &candidate, &evaluator, arguments.pairing)?;

    let output = benchmark_comparator::Output::try_from((&comparison, arguments.output_format))?;
    match arguments.output_file {
        Some(output_path) => output.write_to_file(output_path)?,
        None => output.print()?,
    }

    Ok(())
}

///
/// Reads and validates a benchmark result document.
///
fn load(path: &Path) -> anyhow::Result<benchmark_comparator::Report> {
    let input = benchmark_comparator::Input::try_from(path)?;
    let report = benchmark_comparator::Report::try_from(input)
        .map_err(|error| anyhow::anyhow!("Result document {path:?}: {error}"))?;
    tracing::debug!(
        "Loaded {} benchmarks from {path:?}",
        report.benchmarks.len()
    );
    Ok(report)
}

///
/// Initializes the `stderr` logger. `RUST_LOG` overrides the verbosity flags.
///
fn init_tracing(quiet: bool, verbose: bool) {
    let level = if quiet {
        tracing::Level::ERROR
    } else if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(level.into())
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
