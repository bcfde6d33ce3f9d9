//! reqscan - Requirements manifest parser and linter CLI tool
//!
//! This tool scans pip-style requirements manifests and checks their
//! structural invariants:
//! - every non-comment, non-blank line matches `name[comparator version]`
//! - no duplicate package names

use clap::Parser;
use reqscan::cli::CliArgs;
use reqscan::orchestrator::Orchestrator;
use reqscan::output::{create_formatter, OutputConfig};
use std::io::{self, Write};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = CliArgs::parse();

    // Run the main logic and handle errors
    match run(args) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Main application logic
fn run(args: CliArgs) -> anyhow::Result<ExitCode> {
    args.validate()?;

    // Print version info in verbose mode
    if args.verbose {
        eprintln!("reqscan v{}", env!("CARGO_PKG_VERSION"));
        eprintln!("Target: {}", args.path.display());
    }

    // Run the scan
    let orchestrator = Orchestrator::new(args.clone());
    let result = orchestrator.run();

    // Create output formatter based on CLI options
    let output_config = OutputConfig::from_cli(args.json, args.verbose, args.quiet);
    let formatter = create_formatter(output_config);

    // Output results
    let mut stdout = io::stdout().lock();
    formatter.format(&result, &mut stdout)?;
    stdout.flush()?;

    // Print processing errors in verbose mode
    if args.verbose && !result.errors.is_empty() {
        eprintln!();
        eprintln!("Errors encountered:");
        for error in &result.errors {
            eprintln!("  - {}", error);
        }
    }

    // Return appropriate exit code
    if !result.errors.is_empty() {
        // Partial success - some files could not be processed
        Ok(ExitCode::from(2))
    } else if result.summary.has_failures() {
        // Lint findings at error severity (or warnings under --strict)
        Ok(ExitCode::FAILURE)
    } else {
        Ok(ExitCode::SUCCESS)
    }
}
