//! Core domain models for reqscan
//!
//! This module contains the fundamental types used throughout the application:
//! - Comparison operators and version constraints
//! - Dependency record structures
//! - Line classification for manifest text
//! - Lint findings and rules
//! - Report and summary structures

mod comparator;
mod constraint;
mod finding;
mod line;
mod record;
mod report;

pub use comparator::Comparator;
pub use constraint::VersionConstraint;
pub use finding::{Finding, Rule, Severity};
pub use line::{LineKind, ManifestLine};
pub use record::{normalize_name, DependencyRecord};
pub use report::{FileReport, ScanSummary};
