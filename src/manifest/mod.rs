//! Manifest file detection and parsing
//!
//! This module provides functionality to:
//! - Detect requirements manifests under a path
//! - Read manifest content with typed errors
//! - Parse a manifest file into classified lines

mod detector;

pub use detector::{detect_manifests, is_manifest_name, ManifestInfo};

use crate::domain::ManifestLine;
use crate::error::ManifestError;
use crate::parser::RequirementsParser;
use std::path::Path;

/// Reads manifest content from a file path
pub fn read_manifest(path: &Path) -> Result<String, ManifestError> {
    if !path.exists() {
        return Err(ManifestError::not_found(path));
    }

    let bytes =
        std::fs::read(path).map_err(|e| ManifestError::read_error(path, e))?;

    String::from_utf8(bytes).map_err(|_| ManifestError::not_text(path))
}

/// Parses a manifest file into classified lines
pub fn parse_manifest(path: &Path) -> Result<Vec<ManifestLine>, ManifestError> {
    let content = read_manifest(path)?;
    Ok(RequirementsParser.parse(&content))
}
