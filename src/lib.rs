//! reqscan - Requirements manifest parser and linter library
//!
//! This library provides the core functionality for parsing and linting
//! pip-style requirements manifests:
//! - Line classification (dependency, comment, blank, invalid)
//! - Dependency record extraction with version constraints
//! - Lint rules for manifest invariants (valid lines, unique names)

pub mod cli;
pub mod domain;
pub mod error;
pub mod lint;
pub mod manifest;
pub mod orchestrator;
pub mod output;
pub mod parser;
