//! Version comparison operators for requirement constraints

use serde::{Deserialize, Serialize};
use std::fmt;

/// Comparison operator in a version constraint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Comparator {
    /// Exact match (`==`)
    Equal,
    /// Exclusion (`!=`)
    NotEqual,
    /// Minimum version, inclusive (`>=`)
    GreaterOrEqual,
    /// Minimum version, exclusive (`>`)
    Greater,
    /// Maximum version, inclusive (`<=`)
    LessOrEqual,
    /// Maximum version, exclusive (`<`)
    Less,
    /// Compatible release (`~=`)
    Compatible,
}

impl Comparator {
    /// Returns the operator as it appears in the manifest
    pub fn as_str(&self) -> &'static str {
        match self {
            Comparator::Equal => "==",
            Comparator::NotEqual => "!=",
            Comparator::GreaterOrEqual => ">=",
            Comparator::Greater => ">",
            Comparator::LessOrEqual => "<=",
            Comparator::Less => "<",
            Comparator::Compatible => "~=",
        }
    }

    /// Parses an operator string
    pub fn from_str_opt(s: &str) -> Option<Self> {
        match s {
            "==" => Some(Comparator::Equal),
            "!=" => Some(Comparator::NotEqual),
            ">=" => Some(Comparator::GreaterOrEqual),
            ">" => Some(Comparator::Greater),
            "<=" => Some(Comparator::LessOrEqual),
            "<" => Some(Comparator::Less),
            "~=" => Some(Comparator::Compatible),
            _ => None,
        }
    }

    /// Returns true if this operator pins a single version
    pub fn is_pinning(&self) -> bool {
        matches!(self, Comparator::Equal)
    }

    /// Returns all supported operators, longest first
    pub fn all() -> &'static [Comparator] {
        &[
            Comparator::Equal,
            Comparator::NotEqual,
            Comparator::GreaterOrEqual,
            Comparator::LessOrEqual,
            Comparator::Compatible,
            Comparator::Greater,
            Comparator::Less,
        ]
    }
}

impl fmt::Display for Comparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
