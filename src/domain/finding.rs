//! Lint finding types

use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity of a lint finding
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Advisory finding; fails the run only under --strict
    Warning,
    /// Invariant violation; always fails the run
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// Lint rules checked against a manifest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Rule {
    /// Non-comment, non-blank line does not match `name[comparator version]`
    InvalidLine,
    /// The same package name (normalized) appears more than once
    DuplicateName,
    /// A record carries no version constraint
    Unconstrained,
    /// A record is not pinned with `==` (checked under --require-pinned)
    NotPinned,
}

impl Rule {
    /// Returns the rule identifier used in output
    pub fn code(&self) -> &'static str {
        match self {
            Rule::InvalidLine => "invalid-line",
            Rule::DuplicateName => "duplicate-name",
            Rule::Unconstrained => "unconstrained",
            Rule::NotPinned => "not-pinned",
        }
    }

    /// Returns the default severity for this rule
    pub fn default_severity(&self) -> Severity {
        match self {
            Rule::InvalidLine | Rule::DuplicateName => Severity::Error,
            Rule::Unconstrained | Rule::NotPinned => Severity::Warning,
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A single lint finding against a manifest line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    /// 1-based line number the finding points at
    pub line: usize,
    /// The rule that produced this finding
    pub rule: Rule,
    /// Severity of the finding
    pub severity: Severity,
    /// The package concerned, when the line parsed far enough to name one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package: Option<String>,
    /// Human-readable description
    pub message: String,
}

impl Finding {
    /// Creates a finding with the rule's default severity
    pub fn new(line: usize, rule: Rule, message: impl Into<String>) -> Self {
        Self {
            line,
            rule,
            severity: rule.default_severity(),
            package: None,
            message: message.into(),
        }
    }

    /// Sets the package name (builder pattern)
    pub fn with_package(mut self, package: impl Into<String>) -> Self {
        self.package = Some(package.into());
        self
    }

    /// Returns true if this finding is an error
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }

    /// Returns true if this finding fails the run for the given strictness
    pub fn fails(&self, strict: bool) -> bool {
        strict || self.is_error()
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "line {}: {} [{}]: {}",
            self.line,
            self.severity,
            self.rule.code(),
            self.message
        )
    }
}
