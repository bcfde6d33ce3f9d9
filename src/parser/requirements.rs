//! Requirements manifest line parser
//!
//! Classifies each physical line of a requirements manifest:
//! - Dependency: `name[comparator version]`, optionally with a trailing
//!   ` # comment`
//! - Comment: lines whose first non-whitespace character is `#`
//! - Blank: empty or whitespace-only lines
//! - Invalid: everything else

use crate::domain::{DependencyRecord, ManifestLine};
use crate::parser::parse_constraint;
use regex::Regex;
use std::sync::LazyLock;

/// Parser for requirements manifest content
#[derive(Debug, Default)]
pub struct RequirementsParser;

// Package name followed by the rest of the line (PEP 508 name grammar)
static DEPENDENCY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Za-z0-9](?:[A-Za-z0-9._-]*[A-Za-z0-9])?)\s*(.*)$").unwrap()
});

impl RequirementsParser {
    /// Create a new parser
    pub fn new() -> Self {
        Self
    }

    /// Parses manifest content into classified lines
    pub fn parse(&self, content: &str) -> Vec<ManifestLine> {
        content
            .lines()
            .enumerate()
            .map(|(idx, raw)| self.parse_line(idx + 1, raw))
            .collect()
    }

    /// Parses and classifies a single line
    pub fn parse_line(&self, number: usize, raw: &str) -> ManifestLine {
        let trimmed = raw.trim();

        if trimmed.is_empty() {
            return ManifestLine::blank(number, raw);
        }

        if trimmed.starts_with('#') {
            return ManifestLine::comment(number, raw);
        }

        // Split off a trailing comment before matching the dependency form
        let (body, comment) = split_inline_comment(trimmed);
        let body = body.trim_end();

        let Some(caps) = DEPENDENCY_RE.captures(body) else {
            return ManifestLine::invalid(
                number,
                raw,
                "does not match name[comparator version]",
            );
        };

        let name = caps.get(1).map(|m| m.as_str()).unwrap_or("");
        let rest = caps.get(2).map(|m| m.as_str()).unwrap_or("").trim();

        let record = if rest.is_empty() {
            DependencyRecord::new(name, None)
        } else {
            match parse_constraint(rest) {
                Some(constraint) => DependencyRecord::new(name, Some(constraint)),
                None => {
                    return ManifestLine::invalid(
                        number,
                        raw,
                        format!("invalid version constraint '{}'", rest),
                    );
                }
            }
        };

        let record = match comment {
            Some(c) => record.with_comment(c),
            None => record,
        };

        ManifestLine::dependency(number, raw, record)
    }

    /// Parses manifest content and returns only the dependency records
    pub fn records(&self, content: &str) -> Vec<DependencyRecord> {
        self.parse(content)
            .iter()
            .filter_map(|l| l.record().cloned())
            .collect()
    }
}

/// Splits a trailing comment off a dependency line
///
/// An inline comment starts at a `#` preceded by whitespace; a `#` inside
/// the requirement text itself does not open a comment.
fn split_inline_comment(line: &str) -> (&str, Option<&str>) {
    let bytes = line.as_bytes();
    for (i, &b) in bytes.iter().enumerate() {
        if b == b'#' && i > 0 && bytes[i - 1].is_ascii_whitespace() {
            return (&line[..i], Some(line[i..].trim_end()));
        }
    }
    (line, None)
}
