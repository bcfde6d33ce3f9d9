//! Version constraint types for requirement records
//!
//! A constraint is a single comparison operator followed by a dotted-numeric
//! version, as written in a requirements manifest:
//! - Minimum: `>=2.0.0`
//! - Pin: `==1.26.4`
//! - Compatible release: `~=1.4`
//! - Exclusion: `!=3.0.1`

use super::Comparator;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A version constraint with its original string representation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionConstraint {
    /// The comparison operator
    pub comparator: Comparator,
    /// The version number (without the operator)
    pub version: String,
    /// The raw constraint text as it appears in the manifest
    pub raw: String,
}

impl VersionConstraint {
    /// Creates a new VersionConstraint
    pub fn new(comparator: Comparator, version: impl Into<String>) -> Self {
        let version = version.into();
        let raw = format!("{}{}", comparator.as_str(), version);
        Self {
            comparator,
            version,
            raw,
        }
    }

    /// Creates a VersionConstraint preserving the raw manifest text
    pub fn with_raw(comparator: Comparator, version: impl Into<String>, raw: impl Into<String>) -> Self {
        Self {
            comparator,
            version: version.into(),
            raw: raw.into(),
        }
    }

    /// Returns true if this constraint pins an exact version
    pub fn is_pinned(&self) -> bool {
        self.comparator.is_pinning()
    }

    /// Returns the version split into numeric components, pre-release
    /// segments excluded (`"2.0.0"` -> `[2, 0, 0]`)
    pub fn version_components(&self) -> Vec<u64> {
        self.version
            .split('.')
            .map_while(|part| part.parse().ok())
            .collect()
    }
}

impl fmt::Display for VersionConstraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}
