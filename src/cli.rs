//! CLI argument parsing module for reqscan

use crate::domain::normalize_name;
use crate::error::ConfigError;
use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// Requirements manifest linter
#[derive(Parser, Debug, Clone)]
#[command(name = "reqscan", version, about = "Requirements manifest parser and linter")]
pub struct CliArgs {
    /// Manifest file or directory to scan (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    // General options
    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,

    /// Enable quiet mode - findings only, no summary
    #[arg(short, long)]
    pub quiet: bool,

    // Lint options
    /// Treat warnings as errors
    #[arg(long)]
    pub strict: bool,

    /// Require every record to be pinned with ==
    #[arg(long)]
    pub require_pinned: bool,

    /// Suppress findings for specific packages (can be specified multiple times)
    #[arg(long, action = ArgAction::Append)]
    pub exclude: Vec<String>,

    // Output options
    /// Output results in JSON format
    #[arg(long)]
    pub json: bool,
}

impl CliArgs {
    /// Validate option combinations
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.quiet && self.verbose {
            return Err(ConfigError::ConflictingOptions {
                message: "--quiet and --verbose cannot be used together".to_string(),
            });
        }
        Ok(())
    }

    /// Check if findings for a package should be suppressed
    pub fn is_excluded(&self, name: &str) -> bool {
        let normalized = normalize_name(name);
        self.exclude.iter().any(|p| normalize_name(p) == normalized)
    }
}
