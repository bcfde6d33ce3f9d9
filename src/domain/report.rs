//! Scan report types
//!
//! Provides structures for tracking scan results at file and overall levels.

use super::{DependencyRecord, Finding, LineKind, ManifestLine};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Scan result for a single manifest file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileReport {
    /// Path to the manifest file
    pub path: PathBuf,
    /// Parsed dependency records, in manifest order
    pub records: Vec<DependencyRecord>,
    /// Lint findings against this file
    pub findings: Vec<Finding>,
    /// Total number of physical lines
    pub line_count: usize,
    /// Number of comment lines
    pub comment_count: usize,
    /// Number of blank lines
    pub blank_count: usize,
}

impl FileReport {
    /// Creates a report from classified lines and findings
    pub fn new(path: impl Into<PathBuf>, lines: &[ManifestLine], findings: Vec<Finding>) -> Self {
        let records = lines.iter().filter_map(|l| l.record().cloned()).collect();
        let comment_count = lines
            .iter()
            .filter(|l| matches!(l.kind, LineKind::Comment))
            .count();
        let blank_count = lines
            .iter()
            .filter(|l| matches!(l.kind, LineKind::Blank))
            .count();

        Self {
            path: path.into(),
            records,
            findings,
            line_count: lines.len(),
            comment_count,
            blank_count,
        }
    }

    /// Returns the number of error findings
    pub fn error_count(&self) -> usize {
        self.findings.iter().filter(|f| f.is_error()).count()
    }

    /// Returns the number of warning findings
    pub fn warning_count(&self) -> usize {
        self.findings.iter().filter(|f| !f.is_error()).count()
    }

    /// Returns all error findings
    pub fn errors(&self) -> impl Iterator<Item = &Finding> {
        self.findings.iter().filter(|f| f.is_error())
    }

    /// Returns all warning findings
    pub fn warnings(&self) -> impl Iterator<Item = &Finding> {
        self.findings.iter().filter(|f| !f.is_error())
    }

    /// Returns true if this file fails the scan for the given strictness
    pub fn fails(&self, strict: bool) -> bool {
        self.findings.iter().any(|f| f.fails(strict))
    }

    /// Returns true if the file is clean (no findings at all)
    pub fn is_clean(&self) -> bool {
        self.findings.is_empty()
    }
}

/// Overall summary of a scan across all manifest files
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanSummary {
    /// Results for each manifest file processed
    pub files: Vec<FileReport>,
    /// Whether warnings count as failures
    pub strict: bool,
}

impl ScanSummary {
    /// Creates a new ScanSummary
    pub fn new(strict: bool) -> Self {
        Self {
            files: Vec::new(),
            strict,
        }
    }

    /// Adds a file report
    pub fn add_file(&mut self, report: FileReport) {
        self.files.push(report);
    }

    /// Returns the total number of files scanned
    pub fn files_scanned(&self) -> usize {
        self.files.len()
    }

    /// Returns the total number of dependency records
    pub fn total_records(&self) -> usize {
        self.files.iter().map(|f| f.records.len()).sum()
    }

    /// Returns the total number of error findings
    pub fn total_errors(&self) -> usize {
        self.files.iter().map(|f| f.error_count()).sum()
    }

    /// Returns the total number of warning findings
    pub fn total_warnings(&self) -> usize {
        self.files.iter().map(|f| f.warning_count()).sum()
    }

    /// Returns true if the scan fails under the configured strictness
    pub fn has_failures(&self) -> bool {
        self.files.iter().any(|f| f.fails(self.strict))
    }

    /// Returns all findings across all files, with their file paths
    pub fn all_findings(&self) -> impl Iterator<Item = (&PathBuf, &Finding)> {
        self.files
            .iter()
            .flat_map(|f| f.findings.iter().map(move |finding| (&f.path, finding)))
    }
}

impl Default for ScanSummary {
    fn default() -> Self {
        Self::new(false)
    }
}
