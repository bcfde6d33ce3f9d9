//! Text output formatter for human-readable display
//!
//! This module provides:
//! - Per-file finding display with colored severities
//! - Record listing in verbose mode
//! - A closing summary line with file, record, and finding counts

use crate::domain::{FileReport, Finding, Severity};
use crate::orchestrator::ScanResult;
use crate::output::{OutputFormatter, Verbosity};
use colored::Colorize;
use std::io::Write;

/// Text formatter for human-readable output
pub struct TextFormatter {
    /// Verbosity level
    verbosity: Verbosity,
    /// Whether to use colors
    color: bool,
}

impl TextFormatter {
    /// Create a new text formatter
    pub fn new(verbosity: Verbosity) -> Self {
        Self {
            verbosity,
            color: true,
        }
    }

    /// Create a new text formatter with color option
    pub fn with_color(verbosity: Verbosity, color: bool) -> Self {
        Self { verbosity, color }
    }

    /// Format a severity label, colored when enabled
    fn severity_label(&self, severity: Severity) -> String {
        if !self.color {
            return severity.to_string();
        }
        match severity {
            Severity::Error => "error".red().bold().to_string(),
            Severity::Warning => "warning".yellow().to_string(),
        }
    }

    /// Format one finding as a grep-style line
    fn format_finding(&self, report: &FileReport, finding: &Finding) -> String {
        format!(
            "{}:{}: {} [{}]: {}",
            report.path.display(),
            finding.line,
            self.severity_label(finding.severity),
            finding.rule.code(),
            finding.message
        )
    }

    /// Write the per-file sections
    fn write_files(&self, result: &ScanResult, writer: &mut dyn Write) -> std::io::Result<()> {
        for report in &result.summary.files {
            let show_header = self.verbosity == Verbosity::Verbose
                || (!report.is_clean() && self.verbosity == Verbosity::Normal);

            if show_header {
                let header = if self.color {
                    report.path.display().to_string().bold().to_string()
                } else {
                    report.path.display().to_string()
                };
                writeln!(writer, "{}", header)?;
            }

            if self.verbosity == Verbosity::Verbose {
                for record in &report.records {
                    writeln!(writer, "  {}", record)?;
                }
                writeln!(
                    writer,
                    "  {} records, {} comments, {} blank lines",
                    report.records.len(),
                    report.comment_count,
                    report.blank_count
                )?;
            }

            for finding in &report.findings {
                if self.verbosity == Verbosity::Quiet {
                    writeln!(writer, "{}", self.format_finding(report, finding))?;
                } else {
                    writeln!(
                        writer,
                        "  line {}: {} [{}]: {}",
                        finding.line,
                        self.severity_label(finding.severity),
                        finding.rule.code(),
                        finding.message
                    )?;
                }
            }

            if show_header {
                writeln!(writer)?;
            }
        }
        Ok(())
    }

    /// Write the closing summary line
    fn write_summary(&self, result: &ScanResult, writer: &mut dyn Write) -> std::io::Result<()> {
        let summary = &result.summary;
        let errors = summary.total_errors();
        let warnings = summary.total_warnings();

        let status = if errors > 0
            || !result.errors.is_empty()
            || (summary.strict && warnings > 0)
        {
            if self.color {
                "FAIL".red().bold().to_string()
            } else {
                "FAIL".to_string()
            }
        } else if self.color {
            "OK".green().to_string()
        } else {
            "OK".to_string()
        };

        writeln!(
            writer,
            "{}: {} files scanned, {} records, {} errors, {} warnings",
            status,
            summary.files_scanned(),
            summary.total_records(),
            errors,
            warnings
        )
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, result: &ScanResult, writer: &mut dyn Write) -> std::io::Result<()> {
        self.write_files(result, writer)?;

        // Processing errors are shown at every verbosity level
        for error in &result.errors {
            writeln!(writer, "{}: {}", self.severity_label(Severity::Error), error)?;
        }

        if self.verbosity != Verbosity::Quiet {
            self.write_summary(result, writer)?;
        }

        Ok(())
    }
}
