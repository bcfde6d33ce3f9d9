//! Parsers for requirements manifest text
//!
//! This module provides:
//! - Version constraint parsing (comparator + dotted-numeric version)
//! - Line-oriented classification of manifest content

mod constraint;
mod requirements;

pub use constraint::parse_constraint;
pub use requirements::RequirementsParser;
