//! Lint filter configuration
//!
//! This module provides the LintFilter struct that encapsulates
//! all filter options for lint judgment.

use crate::domain::normalize_name;

/// Filter configuration for lint judgment
#[derive(Debug, Clone, Default)]
pub struct LintFilter {
    /// Packages whose findings are suppressed, stored normalized
    pub exclude: Vec<String>,
    /// Require records to be pinned with ==
    pub require_pinned: bool,
}

impl LintFilter {
    /// Create a new LintFilter with default settings (check everything)
    pub fn new() -> Self {
        Self::default()
    }

    /// Set packages to exclude from findings
    pub fn with_exclude(mut self, exclude: Vec<String>) -> Self {
        self.exclude = exclude.iter().map(|n| normalize_name(n)).collect();
        self
    }

    /// Set whether unpinned records produce findings
    pub fn with_require_pinned(mut self, require: bool) -> Self {
        self.require_pinned = require;
        self
    }

    /// Check if a package's findings are suppressed
    ///
    /// Expects an already-normalized name.
    pub fn is_excluded(&self, normalized_name: &str) -> bool {
        self.exclude.iter().any(|p| p == normalized_name)
    }
}
