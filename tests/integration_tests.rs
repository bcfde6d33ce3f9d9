//! Integration tests for reqscan
//!
//! These tests verify:
//! - Manifest detection in directories
//! - Requirements line parsing
//! - Lint rule behavior across whole manifests

use reqscan::domain::{Comparator, Rule, Severity};
use reqscan::lint::{LintFilter, Linter};
use reqscan::manifest::{detect_manifests, parse_manifest};
use reqscan::parser::RequirementsParser;
use std::fs;
use tempfile::TempDir;

/// Test fixture directory creation helper
fn create_test_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

mod manifest_detection {
    use super::*;

    /// Test detection of recognized manifest names in a directory
    #[test]
    fn test_detect_recognized_names() {
        let temp_dir = create_test_dir();

        fs::write(temp_dir.path().join("requirements.txt"), "pandas>=2.0.0\n").unwrap();
        fs::write(temp_dir.path().join("requirements-dev.txt"), "pytest>=7.0\n").unwrap();
        fs::write(temp_dir.path().join("constraints.txt"), "numpy==1.26.0\n").unwrap();
        // Not a manifest name, must be skipped
        fs::write(temp_dir.path().join("notes.txt"), "pandas>=2.0.0\n").unwrap();
        fs::write(temp_dir.path().join("setup.py"), "# nothing here\n").unwrap();

        let manifests = detect_manifests(temp_dir.path());

        assert_eq!(manifests.len(), 3, "Should detect 3 manifest files");
        let names: Vec<_> = manifests
            .iter()
            .map(|m| m.path.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert!(names.contains(&"requirements.txt".to_string()));
        assert!(names.contains(&"requirements-dev.txt".to_string()));
        assert!(names.contains(&"constraints.txt".to_string()));
        assert!(!names.contains(&"notes.txt".to_string()));
    }

    /// Test detection inside a requirements/ subdirectory
    #[test]
    fn test_detect_requirements_subdirectory() {
        let temp_dir = create_test_dir();
        let sub = temp_dir.path().join("requirements");
        fs::create_dir(&sub).unwrap();
        fs::write(sub.join("base.txt"), "boto3>=1.26.0\n").unwrap();
        fs::write(sub.join("dev.txt"), "black>=23.0.0\n").unwrap();
        fs::write(sub.join("README.md"), "not a manifest\n").unwrap();

        let manifests = detect_manifests(temp_dir.path());

        assert_eq!(manifests.len(), 2, "Should detect both .txt files in requirements/");
    }

    /// Test that an explicit file path is returned as-is
    #[test]
    fn test_explicit_file_path() {
        let temp_dir = create_test_dir();
        let path = temp_dir.path().join("anything.txt");
        fs::write(&path, "pandas>=2.0.0\n").unwrap();

        let manifests = detect_manifests(&path);

        assert_eq!(manifests.len(), 1);
        assert_eq!(manifests[0].path, path);
    }

    /// Test that an empty directory yields no manifests
    #[test]
    fn test_empty_directory() {
        let temp_dir = create_test_dir();
        let manifests = detect_manifests(temp_dir.path());
        assert!(manifests.is_empty());
    }

    /// Test that results are sorted by path for deterministic output
    #[test]
    fn test_detection_order_is_sorted() {
        let temp_dir = create_test_dir();
        fs::write(temp_dir.path().join("requirements-zz.txt"), "").unwrap();
        fs::write(temp_dir.path().join("requirements-aa.txt"), "").unwrap();
        fs::write(temp_dir.path().join("requirements.txt"), "").unwrap();

        let manifests = detect_manifests(temp_dir.path());
        let mut sorted = manifests.clone();
        sorted.sort_by(|a, b| a.path.cmp(&b.path));

        assert_eq!(
            manifests.iter().map(|m| &m.path).collect::<Vec<_>>(),
            sorted.iter().map(|m| &m.path).collect::<Vec<_>>()
        );
    }
}

mod requirements_parsing {
    use super::*;

    /// Test parsing a realistic manifest with comments and blanks
    #[test]
    fn test_parse_full_manifest() {
        let content = "\
# Core data processing
pandas>=2.0.0
numpy>=1.24.0

# AWS integration
boto3>=1.26.0
botocore>=1.29.0
awscli>=1.27.0

# Testing
pytest>=7.3.0
pytest-cov>=4.0.0

# Code quality
black>=23.0.0
flake8>=6.0.0

# Note: terraform is installed separately, not via pip
";
        let parser = RequirementsParser::new();
        let lines = parser.parse(content);
        let records = parser.records(content);

        assert_eq!(records.len(), 9, "Should parse 9 dependency records");
        assert!(lines.iter().all(|l| !l.is_invalid()), "No invalid lines expected");

        let pandas = &records[0];
        assert_eq!(pandas.name, "pandas");
        let constraint = pandas.constraint.as_ref().unwrap();
        assert_eq!(constraint.comparator, Comparator::GreaterOrEqual);
        assert_eq!(constraint.version, "2.0.0");
    }

    /// Test that each comparator form is accepted
    #[test]
    fn test_all_comparators() {
        let content = "\
a==1.0
b!=1.0
c>=1.0
d>1.0
e<=1.0
f<1.0
g~=1.0
";
        let parser = RequirementsParser::new();
        let records = parser.records(content);

        assert_eq!(records.len(), 7);
        let comparators: Vec<_> = records
            .iter()
            .map(|r| r.constraint.as_ref().unwrap().comparator)
            .collect();
        assert_eq!(
            comparators,
            vec![
                Comparator::Equal,
                Comparator::NotEqual,
                Comparator::GreaterOrEqual,
                Comparator::Greater,
                Comparator::LessOrEqual,
                Comparator::Less,
                Comparator::Compatible,
            ]
        );
    }

    /// Test that malformed lines become invalid records, not panics
    #[test]
    fn test_malformed_lines_are_invalid() {
        let content = "\
pandas>=2.0.0
===broken
numpy >< 1.0
-e git+https://example.com/repo.git
";
        let parser = RequirementsParser::new();
        let lines = parser.parse(content);

        let invalid: Vec<_> = lines.iter().filter(|l| l.is_invalid()).collect();
        assert_eq!(invalid.len(), 3);
        assert_eq!(invalid[0].number, 2);
    }

    /// Test inline comments are split off and attached to the record
    #[test]
    fn test_inline_comment_attachment() {
        let parser = RequirementsParser::new();
        let lines = parser.parse("boto3>=1.26.0  # pinned for lambda runtime\n");

        let record = lines[0].record().expect("Should be a dependency line");
        assert_eq!(record.name, "boto3");
        assert_eq!(record.comment.as_deref(), Some("# pinned for lambda runtime"));
    }

    /// Test parse_manifest end-to-end from disk
    #[test]
    fn test_parse_manifest_from_disk() {
        let temp_dir = create_test_dir();
        let path = temp_dir.path().join("requirements.txt");
        fs::write(&path, "pandas>=2.0.0\nnumpy>=1.24.0\n").unwrap();

        let lines = parse_manifest(&path).expect("Should read and parse");
        assert_eq!(lines.iter().filter(|l| l.is_dependency()).count(), 2);
    }

    /// Test that non-UTF-8 content is rejected with a readable error
    #[test]
    fn test_parse_manifest_rejects_binary() {
        let temp_dir = create_test_dir();
        let path = temp_dir.path().join("requirements.txt");
        fs::write(&path, [0xffu8, 0xfe, 0x00, 0x01]).unwrap();

        let result = parse_manifest(&path);
        assert!(result.is_err(), "Binary content should not parse");
    }
}

mod lint_rules {
    use super::*;

    fn lint(content: &str, filter: LintFilter) -> Vec<reqscan::domain::Finding> {
        let parser = RequirementsParser::new();
        let lines = parser.parse(content);
        Linter::new(filter).lint(&lines)
    }

    /// Test that a clean manifest produces no findings
    #[test]
    fn test_clean_manifest() {
        let findings = lint("pandas>=2.0.0\nnumpy>=1.24.0\n", LintFilter::default());
        assert!(findings.is_empty());
    }

    /// Test duplicate detection uses normalized names
    #[test]
    fn test_duplicate_detection_normalized() {
        let content = "pytest-cov>=4.0.0\nPytest.Cov>=4.1.0\n";
        let findings = lint(content, LintFilter::default());

        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].rule, Rule::DuplicateName);
        assert_eq!(findings[0].severity, Severity::Error);
        assert_eq!(findings[0].line, 2);
        assert!(findings[0].message.contains("line 1"));
    }

    /// Test unconstrained records produce a warning
    #[test]
    fn test_unconstrained_warning() {
        let findings = lint("pandas\n", LintFilter::default());

        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].rule, Rule::Unconstrained);
        assert_eq!(findings[0].severity, Severity::Warning);
    }

    /// Test not-pinned is only reported under require_pinned
    #[test]
    fn test_not_pinned_requires_flag() {
        let content = "pandas>=2.0.0\nnumpy==1.24.0\n";

        let without = lint(content, LintFilter::default());
        assert!(without.is_empty(), "Ranges are fine without --require-pinned");

        let with = lint(content, LintFilter::default().with_require_pinned(true));
        assert_eq!(with.len(), 1);
        assert_eq!(with[0].rule, Rule::NotPinned);
        assert_eq!(with[0].line, 1, "Only the >= record should be flagged");
    }

    /// Test excluded packages are suppressed, invalid lines never are
    #[test]
    fn test_exclude_suppresses_package_findings() {
        let content = "pandas\n!!garbage!!\n";
        let filter = LintFilter::default().with_exclude(vec!["Pandas".to_string()]);
        let findings = lint(content, filter);

        assert_eq!(findings.len(), 1, "Only the invalid line should remain");
        assert_eq!(findings[0].rule, Rule::InvalidLine);
    }

    /// Test invalid lines are errors
    #[test]
    fn test_invalid_line_is_error() {
        let findings = lint("pandas >< 1.0\n", LintFilter::default());

        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].rule, Rule::InvalidLine);
        assert_eq!(findings[0].severity, Severity::Error);
        assert!(findings[0].is_error());
    }

    /// Test strict mode turns warnings into failures
    #[test]
    fn test_strict_promotes_warnings() {
        let findings = lint("pandas\n", LintFilter::default());
        assert_eq!(findings.len(), 1);
        assert!(!findings[0].fails(false), "Warning passes in default mode");
        assert!(findings[0].fails(true), "Warning fails in strict mode");
    }
}
