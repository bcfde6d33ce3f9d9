//! Manifest file detection
//!
//! Features:
//! - Detects requirements.txt, requirements-*.txt, *-requirements.txt,
//!   and constraints.txt in a directory
//! - Detects *.txt files under a requirements/ subdirectory
//! - Accepts an explicit file path as-is

use std::path::{Path, PathBuf};

/// Information about a detected manifest file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestInfo {
    /// Path to the manifest file
    pub path: PathBuf,
}

impl ManifestInfo {
    /// Create a new ManifestInfo
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

/// Returns true if a file name is recognized as a requirements manifest
pub fn is_manifest_name(name: &str) -> bool {
    if name == "requirements.txt" || name == "constraints.txt" {
        return true;
    }
    if !name.ends_with(".txt") {
        return false;
    }
    let stem = &name[..name.len() - 4];
    stem.starts_with("requirements-") || stem.ends_with("-requirements")
}

/// Detect all manifest files under the given path
///
/// This function:
/// 1. Returns a file path unchanged (whatever its name)
/// 2. Scans a directory for recognized manifest names
/// 3. Scans a requirements/ subdirectory for *.txt files
///
/// Results are sorted by path so runs are deterministic.
pub fn detect_manifests(path: &Path) -> Vec<ManifestInfo> {
    if path.is_file() {
        return vec![ManifestInfo::new(path)];
    }

    let mut manifests = Vec::new();

    if let Ok(entries) = std::fs::read_dir(path) {
        for entry in entries.flatten() {
            let entry_path = entry.path();
            if !entry_path.is_file() {
                continue;
            }
            let matches = entry_path
                .file_name()
                .and_then(|n| n.to_str())
                .map(is_manifest_name)
                .unwrap_or(false);
            if matches {
                manifests.push(ManifestInfo::new(entry_path));
            }
        }
    }

    // requirements/ layout: one .txt per environment
    let requirements_dir = path.join("requirements");
    if requirements_dir.is_dir() {
        if let Ok(entries) = std::fs::read_dir(&requirements_dir) {
            for entry in entries.flatten() {
                let entry_path = entry.path();
                let is_txt = entry_path
                    .extension()
                    .and_then(|e| e.to_str())
                    .map(|e| e == "txt")
                    .unwrap_or(false);
                if entry_path.is_file() && is_txt {
                    manifests.push(ManifestInfo::new(entry_path));
                }
            }
        }
    }

    manifests.sort_by(|a, b| a.path.cmp(&b.path));
    manifests
}
