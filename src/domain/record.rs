//! Dependency record structures
//!
//! A dependency record is one parsed entry from a requirements manifest:
//! a package name plus an optional version constraint.

use super::VersionConstraint;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Normalizes a package name for comparison (PEP 503): lowercase, with
/// runs of `-`, `_`, and `.` collapsed to a single `-`
pub fn normalize_name(name: &str) -> String {
    let mut result = String::with_capacity(name.len());
    let mut prev_sep = false;
    for c in name.chars() {
        if matches!(c, '-' | '_' | '.') {
            if !prev_sep {
                result.push('-');
            }
            prev_sep = true;
        } else {
            result.push(c.to_ascii_lowercase());
            prev_sep = false;
        }
    }
    result
}

/// Represents one parsed dependency entry from a manifest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyRecord {
    /// Package name as written in the manifest
    pub name: String,
    /// Normalized package name used for duplicate comparison
    pub normalized_name: String,
    /// Version constraint, absent when the line names the package alone
    #[serde(skip_serializing_if = "Option::is_none")]
    pub constraint: Option<VersionConstraint>,
    /// Trailing comment on the dependency line, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl DependencyRecord {
    /// Creates a new dependency record
    pub fn new(name: impl Into<String>, constraint: Option<VersionConstraint>) -> Self {
        let name = name.into();
        let normalized_name = normalize_name(&name);
        Self {
            name,
            normalized_name,
            constraint,
            comment: None,
        }
    }

    /// Sets a trailing comment on this record (builder pattern)
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// Returns true if this record carries any version constraint
    pub fn is_constrained(&self) -> bool {
        self.constraint.is_some()
    }

    /// Returns true if this record pins an exact version
    pub fn is_pinned(&self) -> bool {
        self.constraint
            .as_ref()
            .map(|c| c.is_pinned())
            .unwrap_or(false)
    }

    /// Returns the constrained version string, if any
    pub fn version(&self) -> Option<&str> {
        self.constraint.as_ref().map(|c| c.version.as_str())
    }
}

impl fmt::Display for DependencyRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.constraint {
            Some(c) => write!(f, "{}{}", self.name, c),
            None => write!(f, "{}", self.name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Comparator;

    fn sample_constraint() -> VersionConstraint {
        VersionConstraint::new(Comparator::GreaterOrEqual, "2.0.0")
    }

    #[test]
    fn test_normalize_name_lowercase() {
        assert_eq!(normalize_name("Pandas"), "pandas");
        assert_eq!(normalize_name("NumPy"), "numpy");
    }

    #[test]
    fn test_normalize_name_separators() {
        assert_eq!(normalize_name("pytest_cov"), "pytest-cov");
        assert_eq!(normalize_name("pytest.cov"), "pytest-cov");
        assert_eq!(normalize_name("pytest-cov"), "pytest-cov");
    }

    #[test]
    fn test_normalize_name_collapses_runs() {
        assert_eq!(normalize_name("a.-_b"), "a-b");
        assert_eq!(normalize_name("a__b"), "a-b");
    }

    #[test]
    fn test_record_new() {
        let rec = DependencyRecord::new("pandas", Some(sample_constraint()));
        assert_eq!(rec.name, "pandas");
        assert_eq!(rec.normalized_name, "pandas");
        assert!(rec.is_constrained());
        assert!(rec.comment.is_none());
    }

    #[test]
    fn test_record_unconstrained() {
        let rec = DependencyRecord::new("awscli", None);
        assert!(!rec.is_constrained());
        assert!(!rec.is_pinned());
        assert!(rec.version().is_none());
    }

    #[test]
    fn test_record_is_pinned() {
        let pinned = DependencyRecord::new(
            "numpy",
            Some(VersionConstraint::new(Comparator::Equal, "1.26.4")),
        );
        assert!(pinned.is_pinned());

        let not_pinned = DependencyRecord::new("pandas", Some(sample_constraint()));
        assert!(!not_pinned.is_pinned());
    }

    #[test]
    fn test_record_version() {
        let rec = DependencyRecord::new("pandas", Some(sample_constraint()));
        assert_eq!(rec.version(), Some("2.0.0"));
    }

    #[test]
    fn test_record_with_comment() {
        let rec = DependencyRecord::new("boto3", Some(sample_constraint()))
            .with_comment("# AWS SDK");
        assert_eq!(rec.comment.as_deref(), Some("# AWS SDK"));
    }

    #[test]
    fn test_record_normalized_name() {
        let rec = DependencyRecord::new("Pytest_Cov", None);
        assert_eq!(rec.name, "Pytest_Cov");
        assert_eq!(rec.normalized_name, "pytest-cov");
    }

    #[test]
    fn test_record_display_with_constraint() {
        let rec = DependencyRecord::new("pandas", Some(sample_constraint()));
        assert_eq!(format!("{}", rec), "pandas>=2.0.0");
    }

    #[test]
    fn test_record_display_without_constraint() {
        let rec = DependencyRecord::new("awscli", None);
        assert_eq!(format!("{}", rec), "awscli");
    }

    #[test]
    fn test_record_equality_and_clone() {
        let rec = DependencyRecord::new("pandas", Some(sample_constraint()));
        let cloned = rec.clone();
        assert_eq!(rec, cloned);
    }

    #[test]
    fn test_serde_record() {
        let rec = DependencyRecord::new("pandas", Some(sample_constraint()));
        let json = serde_json::to_string(&rec).unwrap();
        let parsed: DependencyRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, rec);
    }

    #[test]
    fn test_serde_record_skips_absent_fields() {
        let rec = DependencyRecord::new("awscli", None);
        let json = serde_json::to_string(&rec).unwrap();
        assert!(!json.contains("constraint"));
        assert!(!json.contains("comment"));
    }
}
