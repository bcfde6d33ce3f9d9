//! Scan orchestrator for coordinating the whole workflow
//!
//! This module provides:
//! - Workflow coordination: detect → read → parse → lint → summarize
//! - Lint filter application from CLI args
//! - Error handling with partial continuation: an unreadable file is
//!   recorded and the scan moves on

use crate::cli::CliArgs;
use crate::domain::{FileReport, ScanSummary};
use crate::lint::{LintFilter, Linter};
use crate::manifest::{detect_manifests, read_manifest};
use crate::parser::RequirementsParser;

/// Orchestrator for coordinating the scan workflow
pub struct Orchestrator {
    /// CLI arguments for configuration
    args: CliArgs,
}

/// Result of running the orchestrator
pub struct ScanResult {
    /// Scan summary with all per-file reports
    pub summary: ScanSummary,
    /// Processing errors encountered
    pub errors: Vec<ScanError>,
}

/// Errors that can occur during orchestration
#[derive(Debug)]
pub enum ScanError {
    /// The requested scan path does not exist
    PathNotFound { path: String },
    /// Failed to read a manifest file
    ReadError { path: String, message: String },
}

impl std::fmt::Display for ScanError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScanError::PathNotFound { path } => {
                write!(f, "Path not found: {}", path)
            }
            ScanError::ReadError { path, message } => {
                write!(f, "Failed to read {}: {}", path, message)
            }
        }
    }
}

impl std::error::Error for ScanError {}

impl Orchestrator {
    /// Create a new orchestrator with the given CLI arguments
    pub fn new(args: CliArgs) -> Self {
        Self { args }
    }

    /// Run the scan workflow
    pub fn run(&self) -> ScanResult {
        let mut summary = ScanSummary::new(self.args.strict);
        let mut errors = Vec::new();

        // A typo'd path must surface as a processing error, not a clean
        // empty scan
        if !self.args.path.exists() {
            errors.push(ScanError::PathNotFound {
                path: self.args.path.display().to_string(),
            });
            return ScanResult { summary, errors };
        }

        // Step 1: Detect manifest files
        let manifests = detect_manifests(&self.args.path);

        if manifests.is_empty() {
            return ScanResult { summary, errors };
        }

        // Build the lint filter from CLI args
        let filter = self.build_filter();
        let linter = Linter::new(filter);
        let parser = RequirementsParser;

        // Step 2: Parse and lint each manifest
        for manifest_info in &manifests {
            let content = match read_manifest(&manifest_info.path) {
                Ok(c) => c,
                Err(e) => {
                    errors.push(ScanError::ReadError {
                        path: manifest_info.path.display().to_string(),
                        message: e.to_string(),
                    });
                    continue;
                }
            };

            let lines = parser.parse(&content);
            let findings = linter.lint(&lines);
            summary.add_file(FileReport::new(&manifest_info.path, &lines, findings));
        }

        ScanResult { summary, errors }
    }

    /// Build a LintFilter from CLI arguments
    fn build_filter(&self) -> LintFilter {
        let mut filter = LintFilter::new();

        if !self.args.exclude.is_empty() {
            filter = filter.with_exclude(self.args.exclude.clone());
        }

        if self.args.require_pinned {
            filter = filter.with_require_pinned(true);
        }

        filter
    }
}
