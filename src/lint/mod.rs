//! Lint engine for requirements manifests
//!
//! This module provides:
//! - Lint filter configuration from CLI args
//! - The lint engine that checks classified lines against the rules
//!
//! Rules checked:
//! - invalid-line (error): a non-comment, non-blank line does not match
//!   `name[comparator version]`
//! - duplicate-name (error): the same package name, compared after
//!   normalization, appears on more than one line
//! - unconstrained (warning): a record carries no version constraint
//! - not-pinned (warning, --require-pinned): a record is not pinned with `==`

mod filter;

pub use filter::LintFilter;

use crate::domain::{DependencyRecord, Finding, LineKind, ManifestLine, Rule};
use std::collections::HashMap;

/// Lint engine that produces findings for a parsed manifest
pub struct Linter {
    /// Filter configuration
    filter: LintFilter,
}

impl Linter {
    /// Create a new Linter with the given filter
    pub fn new(filter: LintFilter) -> Self {
        Self { filter }
    }

    /// Check all lines of one manifest and return the findings, in line order
    pub fn lint(&self, lines: &[ManifestLine]) -> Vec<Finding> {
        let mut findings = Vec::new();
        // normalized name -> line of first occurrence
        let mut seen: HashMap<String, usize> = HashMap::new();

        for line in lines {
            match &line.kind {
                LineKind::Comment | LineKind::Blank => {}
                LineKind::Invalid { reason } => {
                    // Invalid lines are never suppressed by --exclude
                    findings.push(Finding::new(line.number, Rule::InvalidLine, reason.clone()));
                }
                LineKind::Dependency { record } => {
                    self.check_record(line.number, record, &mut seen, &mut findings);
                }
            }
        }

        findings
    }

    fn check_record(
        &self,
        number: usize,
        record: &DependencyRecord,
        seen: &mut HashMap<String, usize>,
        findings: &mut Vec<Finding>,
    ) {
        let suppressed = self.filter.is_excluded(&record.normalized_name);

        // A duplicate yields only the duplicate finding; the constraint
        // checks already ran against the first occurrence
        if let Some(first_line) = seen.get(&record.normalized_name) {
            if !suppressed {
                findings.push(
                    Finding::new(
                        number,
                        Rule::DuplicateName,
                        format!(
                            "duplicate of '{}' first declared on line {}",
                            record.name, first_line
                        ),
                    )
                    .with_package(&record.name),
                );
            }
            return;
        }
        seen.insert(record.normalized_name.clone(), number);

        if suppressed {
            return;
        }

        if !record.is_constrained() {
            findings.push(
                Finding::new(
                    number,
                    Rule::Unconstrained,
                    format!("'{}' has no version constraint", record.name),
                )
                .with_package(&record.name),
            );
        } else if self.filter.require_pinned && !record.is_pinned() {
            findings.push(
                Finding::new(
                    number,
                    Rule::NotPinned,
                    format!(
                        "'{}' is not pinned with == (found '{}')",
                        record.name,
                        record.constraint.as_ref().map(|c| c.raw.as_str()).unwrap_or("")
                    ),
                )
                .with_package(&record.name),
            );
        }
    }
}
