//! Version constraint parser
//!
//! Handles constraint formats:
//! - Pin: `==1.26.4`
//! - Minimum: `>=2.0.0`, `>2.0.0`
//! - Maximum: `<=3.0`, `<3.0`
//! - Exclusion: `!=3.0.1`
//! - Compatible release: `~=1.4`
//!
//! Versions are dotted numerics with an optional trailing alphanumeric
//! pre-release segment (`2.0.0`, `1.26`, `4.0.0rc1`).

use crate::domain::{Comparator, VersionConstraint};
use regex::Regex;
use std::sync::LazyLock;

// Operator alternation is longest-first so `>=` wins over `>`
static CONSTRAINT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(==|!=|>=|<=|~=|>|<)\s*(\d+(?:\.\d+)*(?:[a-zA-Z]+\d*)?)$").unwrap()
});

/// Parses a version constraint string
///
/// Returns None when the text is not a single comparator followed by a
/// dotted-numeric version.
pub fn parse_constraint(constraint_str: &str) -> Option<VersionConstraint> {
    let trimmed = constraint_str.trim();

    if trimmed.is_empty() {
        return None;
    }

    let caps = CONSTRAINT_RE.captures(trimmed)?;
    let comparator = Comparator::from_str_opt(caps.get(1)?.as_str())?;
    let version = caps.get(2)?.as_str();

    Some(VersionConstraint::with_raw(comparator, version, trimmed))
}
