//! Build file parsing and rewriting
//!
//! This module provides functionality to:
//! - Extract dependency coordinates from Gradle build files
//! - Rewrite declarations with updated versions
//! - Read and write build files with typed errors

mod gradle;
mod writer;

pub use gradle::{GradleParser, CONFIGURATIONS};
pub use writer::{
    read_manifest, rewrite, rewrite_content, write_manifest, ManifestWriter, RewriteOutcome,
    WriteResult,
};

use crate::domain::DependencyCoordinate;
use crate::error::ManifestError;
use std::path::Path;

/// Read a build file and extract its coordinates
pub fn parse_manifest(path: &Path) -> Result<Vec<DependencyCoordinate>, ManifestError> {
    let content = read_manifest(path)?;
    Ok(GradleParser::new().parse(&content))
}
