//! Line classification for requirements manifests
//!
//! Every physical line of a manifest is classified exactly once:
//! dependency, comment, blank, or invalid. Invalid lines keep their raw
//! text so findings can point at them.

use super::DependencyRecord;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The classification of one manifest line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LineKind {
    /// A dependency line producing a record
    Dependency { record: DependencyRecord },
    /// A `#`-prefixed comment line
    Comment,
    /// A blank or whitespace-only line
    Blank,
    /// A line that matches no valid form
    Invalid { reason: String },
}

/// One physical line of a manifest with its classification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestLine {
    /// 1-based line number
    pub number: usize,
    /// Raw line text, without the trailing newline
    pub raw: String,
    /// Classification of this line
    pub kind: LineKind,
}

impl ManifestLine {
    /// Creates a dependency line
    pub fn dependency(number: usize, raw: impl Into<String>, record: DependencyRecord) -> Self {
        Self {
            number,
            raw: raw.into(),
            kind: LineKind::Dependency { record },
        }
    }

    /// Creates a comment line
    pub fn comment(number: usize, raw: impl Into<String>) -> Self {
        Self {
            number,
            raw: raw.into(),
            kind: LineKind::Comment,
        }
    }

    /// Creates a blank line
    pub fn blank(number: usize, raw: impl Into<String>) -> Self {
        Self {
            number,
            raw: raw.into(),
            kind: LineKind::Blank,
        }
    }

    /// Creates an invalid line
    pub fn invalid(number: usize, raw: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            number,
            raw: raw.into(),
            kind: LineKind::Invalid {
                reason: reason.into(),
            },
        }
    }

    /// Returns true if this line produced a dependency record
    pub fn is_dependency(&self) -> bool {
        matches!(self.kind, LineKind::Dependency { .. })
    }

    /// Returns true if this line is invalid
    pub fn is_invalid(&self) -> bool {
        matches!(self.kind, LineKind::Invalid { .. })
    }

    /// Returns the dependency record, if this line produced one
    pub fn record(&self) -> Option<&DependencyRecord> {
        match &self.kind {
            LineKind::Dependency { record } => Some(record),
            _ => None,
        }
    }
}

impl fmt::Display for ManifestLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.number, self.raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Comparator, VersionConstraint};

    fn sample_record() -> DependencyRecord {
        DependencyRecord::new(
            "pandas",
            Some(VersionConstraint::new(Comparator::GreaterOrEqual, "2.0.0")),
        )
    }

    #[test]
    fn test_dependency_line() {
        let line = ManifestLine::dependency(1, "pandas>=2.0.0", sample_record());
        assert_eq!(line.number, 1);
        assert!(line.is_dependency());
        assert!(!line.is_invalid());
        assert_eq!(line.record().unwrap().name, "pandas");
    }

    #[test]
    fn test_comment_line() {
        let line = ManifestLine::comment(2, "# Note: Terraform is installed separately");
        assert!(!line.is_dependency());
        assert!(line.record().is_none());
        assert_eq!(line.kind, LineKind::Comment);
    }

    #[test]
    fn test_blank_line() {
        let line = ManifestLine::blank(3, "");
        assert_eq!(line.kind, LineKind::Blank);
        assert!(line.record().is_none());
    }

    #[test]
    fn test_invalid_line() {
        let line = ManifestLine::invalid(4, "pandas >> 2.0", "unrecognized operator");
        assert!(line.is_invalid());
        if let LineKind::Invalid { reason } = &line.kind {
            assert_eq!(reason, "unrecognized operator");
        } else {
            panic!("Expected Invalid variant");
        }
    }

    #[test]
    fn test_display_trait() {
        let line = ManifestLine::comment(7, "# tools");
        assert_eq!(format!("{}", line), "7: # tools");
    }

    #[test]
    fn test_serde_line_kind_tagging() {
        let line = ManifestLine::dependency(1, "pandas>=2.0.0", sample_record());
        let json = serde_json::to_string(&line).unwrap();
        assert!(json.contains("\"kind\":\"dependency\""));
        let parsed: ManifestLine = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, line);
    }

    #[test]
    fn test_serde_invalid_line() {
        let line = ManifestLine::invalid(4, "???", "not a requirement");
        let json = serde_json::to_string(&line).unwrap();
        assert!(json.contains("\"kind\":\"invalid\""));
        let parsed: ManifestLine = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, line);
    }
}
