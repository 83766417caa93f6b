//! Build file rewriting
//!
//! This module provides:
//! - `rewrite`, replacing `group:artifact:old` with `group:artifact:new`
//! - ManifestWriter applying the rewrite to a file on disk
//!
//! A match must be a whole declaration: it may not be preceded by a
//! coordinate character nor followed by a version character, so
//! `junit:junit:4.1` never touches `junit:junit:4.12`.
//! All replacements are computed against the original text in one pass; a
//! replaced version is never matched again by another report.

use crate::domain::{DependencyReport, UpdateVerdict};
use crate::error::ManifestError;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Outcome of rewriting file content
#[derive(Debug)]
pub struct RewriteOutcome {
    /// Rewritten content
    pub content: String,
    /// Number of declarations replaced
    pub replaced: usize,
    /// Updates whose declaration was not found
    pub errors: Vec<ManifestError>,
}

/// A replacement at a byte range of the original content
#[derive(Debug)]
struct Edit {
    start: usize,
    end: usize,
    replacement: String,
}

fn is_version_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_' | '+')
}

/// Byte ranges of whole-declaration matches of `needle`
fn find_declarations(content: &str, needle: &str) -> Vec<(usize, usize)> {
    content
        .match_indices(needle)
        .filter(|(start, _)| {
            let end = start + needle.len();
            let before_ok = content[..*start]
                .chars()
                .next_back()
                .is_none_or(|c| !is_version_char(c));
            let after_ok = content[end..]
                .chars()
                .next()
                .is_none_or(|c| !is_version_char(c));
            before_ok && after_ok
        })
        .map(|(start, _)| (start, start + needle.len()))
        .collect()
}

/// Rewrite every `UpdateAvailable` report and collect the ones not found
pub fn rewrite_content(content: &str, reports: &[DependencyReport]) -> RewriteOutcome {
    let mut edits: Vec<Edit> = Vec::new();
    let mut errors = Vec::new();

    for report in reports {
        let UpdateVerdict::UpdateAvailable(new_version) = &report.verdict else {
            continue;
        };
        let coordinate = report.coordinate();
        let needle = coordinate.declaration();
        let matches = find_declarations(content, &needle);

        if matches.is_empty() {
            warn!("{}: declaration not found in build file", needle);
            errors.push(ManifestError::rewrite_error(
                needle,
                "declaration not found in build file",
            ));
            continue;
        }

        for (start, end) in matches {
            edits.push(Edit {
                start,
                end,
                replacement: coordinate.declaration_with(new_version),
            });
        }
    }

    edits.sort_by_key(|e| e.start);

    let mut output = String::with_capacity(content.len());
    let mut cursor = 0;
    let mut replaced = 0;
    for edit in edits {
        // Duplicate declarations produce the same range more than once
        if edit.start < cursor {
            continue;
        }
        output.push_str(&content[cursor..edit.start]);
        output.push_str(&edit.replacement);
        cursor = edit.end;
        replaced += 1;
    }
    output.push_str(&content[cursor..]);

    RewriteOutcome {
        content: output,
        replaced,
        errors,
    }
}

/// Replace `group:artifact:old` with `group:artifact:new` for every
/// `UpdateAvailable` report. Returns the new content and the number of
/// declarations replaced.
pub fn rewrite(content: &str, reports: &[DependencyReport]) -> (String, usize) {
    let outcome = rewrite_content(content, reports);
    (outcome.content, outcome.replaced)
}

/// Writer applying update reports to a build file
#[derive(Debug, Default)]
pub struct ManifestWriter;

/// Result of applying updates to a build file
#[derive(Debug)]
pub struct WriteResult {
    /// Path to the build file
    pub path: PathBuf,
    /// Number of declarations replaced
    pub replaced: usize,
    /// Whether the file was actually modified
    pub file_modified: bool,
    /// Updates that could not be applied
    pub errors: Vec<ManifestError>,
}

impl WriteResult {
    /// Returns true if any errors occurred
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

impl ManifestWriter {
    /// Create a new ManifestWriter
    pub fn new() -> Self {
        Self
    }

    /// Rewrite the file at `path`. Nothing is written when no declaration
    /// changed.
    pub fn apply(
        &self,
        path: &Path,
        reports: &[DependencyReport],
    ) -> Result<WriteResult, ManifestError> {
        let content = read_manifest(path)?;
        let outcome = rewrite_content(&content, reports);

        let changed = outcome.replaced > 0 && outcome.content != content;
        if changed {
            write_manifest(path, &outcome.content)?;
        }

        Ok(WriteResult {
            path: path.to_path_buf(),
            replaced: outcome.replaced,
            file_modified: changed,
            errors: outcome.errors,
        })
    }
}

/// Read a build file, distinguishing a missing file from other failures
pub fn read_manifest(path: &Path) -> Result<String, ManifestError> {
    fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ManifestError::not_found(path)
        } else {
            ManifestError::read_error(path, e)
        }
    })
}

/// Write content to a build file
pub fn write_manifest(path: &Path, content: &str) -> Result<(), ManifestError> {
    fs::write(path, content).map_err(|e| ManifestError::write_error(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DependencyCoordinate, ResolutionResult};
    use std::io::Write;
    use tempfile::TempDir;

    fn report(group: &str, artifact: &str, old: &str, verdict: UpdateVerdict) -> DependencyReport {
        let coordinate = DependencyCoordinate::new(group, artifact, old);
        let resolution = match verdict.new_version() {
            Some(v) => ResolutionResult::found(coordinate, v, "Maven Central"),
            None => ResolutionResult::absent(coordinate),
        };
        DependencyReport::new(resolution, verdict)
    }

    fn update(group: &str, artifact: &str, old: &str, new: &str) -> DependencyReport {
        report(
            group,
            artifact,
            old,
            UpdateVerdict::UpdateAvailable(new.to_string()),
        )
    }

    fn create_build_file(dir: &TempDir, content: &str) -> PathBuf {
        let path = dir.path().join("build.gradle");
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_rewrite_single() {
        let content = "compile 'junit:junit:4.11'\n";
        let (output, replaced) = rewrite(content, &[update("junit", "junit", "4.11", "4.13.2")]);
        assert_eq!(output, "compile 'junit:junit:4.13.2'\n");
        assert_eq!(replaced, 1);
    }

    #[test]
    fn test_rewrite_ignores_non_updates() {
        let content = "compile 'junit:junit:4.11'\n";
        let reports = [
            report("junit", "junit", "4.11", UpdateVerdict::Current),
            report(
                "junit",
                "junit",
                "4.11",
                UpdateVerdict::Unparseable("no version found".to_string()),
            ),
        ];
        let (output, replaced) = rewrite(content, &reports);
        assert_eq!(output, content);
        assert_eq!(replaced, 0);
    }

    #[test]
    fn test_rewrite_does_not_touch_longer_version() {
        let content = "compile 'junit:junit:4.1'\ncompile 'junit:junit:4.12'\n";
        let (output, replaced) = rewrite(content, &[update("junit", "junit", "4.1", "4.2")]);
        assert_eq!(output, "compile 'junit:junit:4.2'\ncompile 'junit:junit:4.12'\n");
        assert_eq!(replaced, 1);
    }

    #[test]
    fn test_rewrite_does_not_touch_longer_group() {
        let content = "compile 'org.junit:junit:4.12'\n";
        let (output, replaced) = rewrite(content, &[update("junit", "junit", "4.12", "4.13")]);
        assert_eq!(output, content);
        assert_eq!(replaced, 0);
    }

    #[test]
    fn test_rewrite_keeps_packaging_suffix() {
        let content = "compile 'com.example:widget:1.0@aar'\n";
        let (output, _) = rewrite(content, &[update("com.example", "widget", "1.0", "1.1")]);
        assert_eq!(output, "compile 'com.example:widget:1.1@aar'\n");
    }

    #[test]
    fn test_rewrite_does_not_cascade() {
        // Two declarations of the same artifact at different versions
        let content = "compile 'a:b:1.0'\ntestCompile 'a:b:1.1'\n";
        let reports = [update("a", "b", "1.0", "1.1"), update("a", "b", "1.1", "1.2")];
        let (output, replaced) = rewrite(content, &reports);
        assert_eq!(output, "compile 'a:b:1.1'\ntestCompile 'a:b:1.2'\n");
        assert_eq!(replaced, 2);
    }

    #[test]
    fn test_rewrite_duplicate_reports_count_once() {
        let content = "compile 'a:b:1.0'\ntestCompile 'a:b:1.0'\n";
        let reports = [update("a", "b", "1.0", "2.0"), update("a", "b", "1.0", "2.0")];
        let (output, replaced) = rewrite(content, &reports);
        assert_eq!(output, "compile 'a:b:2.0'\ntestCompile 'a:b:2.0'\n");
        assert_eq!(replaced, 2);
    }

    #[test]
    fn test_rewrite_content_reports_missing_declaration() {
        let outcome = rewrite_content("compile 'a:b:1.0'\n", &[update("x", "y", "1.0", "2.0")]);
        assert_eq!(outcome.replaced, 0);
        assert_eq!(outcome.errors.len(), 1);
        assert!(matches!(
            &outcome.errors[0],
            ManifestError::RewriteError { coordinate, .. } if coordinate == "x:y:1.0"
        ));
    }

    #[test]
    fn test_apply_writes_file() {
        let dir = TempDir::new().unwrap();
        let path = create_build_file(&dir, "compile 'junit:junit:4.11'\n");

        let writer = ManifestWriter::new();
        let result = writer
            .apply(&path, &[update("junit", "junit", "4.11", "4.13.2")])
            .unwrap();

        assert!(result.file_modified);
        assert_eq!(result.replaced, 1);
        assert!(!result.has_errors());
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "compile 'junit:junit:4.13.2'\n"
        );
    }

    #[test]
    fn test_apply_without_updates_does_not_write() {
        let dir = TempDir::new().unwrap();
        let path = create_build_file(&dir, "compile 'junit:junit:4.13.2'\n");

        let writer = ManifestWriter::new();
        let result = writer
            .apply(
                &path,
                &[report("junit", "junit", "4.13.2", UpdateVerdict::Current)],
            )
            .unwrap();
        assert!(!result.file_modified);
        assert_eq!(result.replaced, 0);
    }

    #[test]
    fn test_read_manifest_not_found() {
        let dir = TempDir::new().unwrap();
        let result = read_manifest(&dir.path().join("missing.gradle"));
        assert!(matches!(result, Err(ManifestError::NotFound { .. })));
    }
}
