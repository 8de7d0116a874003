//! CLI entrypoint for the sigfmt conformance harness.

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use sigfmt_harness::fixtures::{FixtureSet, builtin_fixture_set};
use sigfmt_harness::runner::{TestRunner, render_case};
use sigfmt_harness::{ConformanceReport, HarnessError};

/// Conformance tooling for sigfmt.
#[derive(Debug, Parser)]
#[command(name = "sigfmt-harness")]
#[command(about = "Conformance testing harness for sigfmt")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Write the builtin reference case table as a fixture JSON file.
    Capture {
        /// Output fixture path.
        #[arg(long)]
        output: PathBuf,
    },
    /// Verify the formatting engine against a fixture file.
    Verify {
        /// Input fixture path; omit to use the builtin table.
        #[arg(long)]
        fixture: Option<PathBuf>,
        /// Optional markdown report path (printed to stdout if omitted).
        #[arg(long)]
        report: Option<PathBuf>,
        /// Optional JSON report path.
        #[arg(long)]
        report_json: Option<PathBuf>,
    },
    /// Render a single ad-hoc case and print the result.
    Render {
        /// Specifier string, e.g. "#08x".
        #[arg(long)]
        format: String,
        /// Value bit pattern, decimal.
        #[arg(long)]
        value: u128,
        /// Value width in bytes.
        #[arg(long, default_value_t = 8)]
        width_bytes: usize,
    },
}

fn run(cli: Cli) -> Result<bool, HarnessError> {
    match cli.command {
        Command::Capture { output } => {
            builtin_fixture_set().to_file(&output)?;
            Ok(true)
        }
        Command::Verify {
            fixture,
            report,
            report_json,
        } => {
            let set = match fixture {
                Some(path) => FixtureSet::from_file(&path)?,
                None => builtin_fixture_set(),
            };
            let runner = TestRunner::new(set.family.clone());
            let results = runner.run(&set)?;
            let summary = ConformanceReport::from_results(set.family.clone(), results);
            match report {
                Some(path) => fs::write(path, summary.to_markdown())?,
                None => print!("{}", summary.to_markdown()),
            }
            if let Some(path) = report_json {
                fs::write(path, summary.to_json()?)?;
            }
            Ok(summary.all_passed())
        }
        Command::Render {
            format,
            value,
            width_bytes,
        } => {
            let rendered = render_case(&format, value, width_bytes)?;
            println!("{rendered:?}");
            Ok(true)
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("harness: {err}");
            ExitCode::FAILURE
        }
    }
}
