//! JSON output formatter for machine processing
//!
//! This module provides:
//! - JSON serialization of scan results
//! - Structured file-by-file finding information

use crate::domain::{DependencyRecord, FileReport, Finding};
use crate::orchestrator::ScanResult;
use crate::output::{OutputFormatter, Verbosity};
use serde::Serialize;
use std::io::Write;

/// JSON formatter for machine-readable output
pub struct JsonFormatter {
    /// Verbosity level affects detail in output
    verbosity: Verbosity,
}

impl JsonFormatter {
    /// Create a new JSON formatter
    pub fn new(verbosity: Verbosity) -> Self {
        Self { verbosity }
    }
}

/// JSON representation of the full result
#[derive(Serialize)]
struct JsonOutput {
    /// Whether warnings count as failures
    strict: bool,
    /// Summary statistics
    summary: JsonSummary,
    /// Per-file results
    files: Vec<JsonFile>,
    /// Processing errors encountered
    #[serde(skip_serializing_if = "Vec::is_empty")]
    errors: Vec<String>,
}

/// JSON representation of summary statistics
#[derive(Serialize)]
struct JsonSummary {
    /// Total number of files scanned
    files: usize,
    /// Total number of dependency records
    records: usize,
    /// Total number of error findings
    errors: usize,
    /// Total number of warning findings
    warnings: usize,
}

/// JSON representation of one manifest file's result
#[derive(Serialize)]
struct JsonFile {
    /// Path to the manifest file
    path: String,
    /// Number of dependency records
    records: usize,
    /// Lint findings
    findings: Vec<Finding>,
    /// Full dependency records (only in verbose mode)
    #[serde(skip_serializing_if = "Vec::is_empty")]
    dependencies: Vec<DependencyRecord>,
}

impl JsonFormatter {
    /// Convert a file report to its JSON representation
    fn file_to_json(&self, report: &FileReport) -> JsonFile {
        let dependencies = if self.verbosity == Verbosity::Verbose {
            report.records.clone()
        } else {
            Vec::new()
        };

        JsonFile {
            path: report.path.display().to_string(),
            records: report.records.len(),
            findings: report.findings.clone(),
            dependencies,
        }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, result: &ScanResult, writer: &mut dyn Write) -> std::io::Result<()> {
        let summary = &result.summary;

        let output = JsonOutput {
            strict: summary.strict,
            summary: JsonSummary {
                files: summary.files_scanned(),
                records: summary.total_records(),
                errors: summary.total_errors(),
                warnings: summary.total_warnings(),
            },
            files: summary.files.iter().map(|f| self.file_to_json(f)).collect(),
            errors: result.errors.iter().map(|e| e.to_string()).collect(),
        };

        let json = serde_json::to_string_pretty(&output)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
        writeln!(writer, "{}", json)
    }
}
