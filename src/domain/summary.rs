//! Run summary types
//!
//! Collects the per-coordinate reports of one run over one build file.
//! Reports are only ever appended.

use super::{DependencyCoordinate, DependencyReport};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Summary of checking one build file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateSummary {
    /// Path to the build file
    pub path: PathBuf,
    /// Reports in declaration order
    pub reports: Vec<DependencyReport>,
    /// Coordinates excluded by a group skip pattern
    pub skipped: Vec<DependencyCoordinate>,
    /// Whether this run only reports (no rewrite)
    pub dry_run: bool,
    /// Number of declarations rewritten in the build file
    pub rewritten: usize,
}

impl UpdateSummary {
    /// Creates a new UpdateSummary
    pub fn new(path: impl Into<PathBuf>, dry_run: bool) -> Self {
        Self {
            path: path.into(),
            reports: Vec::new(),
            skipped: Vec::new(),
            dry_run,
            rewritten: 0,
        }
    }

    /// Adds a report
    pub fn add_report(&mut self, report: DependencyReport) {
        self.reports.push(report);
    }

    /// Records a skipped coordinate
    pub fn add_skipped(&mut self, coordinate: DependencyCoordinate) {
        self.skipped.push(coordinate);
    }

    /// Returns all reports with an update available
    pub fn updates(&self) -> impl Iterator<Item = &DependencyReport> {
        self.reports.iter().filter(|r| r.verdict.is_update())
    }

    /// Returns all reports whose verdict could not be computed
    pub fn unparseable(&self) -> impl Iterator<Item = &DependencyReport> {
        self.reports.iter().filter(|r| r.verdict.is_unparseable())
    }

    /// Returns the number of updates available
    pub fn total_updates(&self) -> usize {
        self.updates().count()
    }

    /// Returns the number of current dependencies
    pub fn total_current(&self) -> usize {
        self.reports.iter().filter(|r| r.verdict.is_current()).count()
    }

    /// Returns the number of unparseable verdicts
    pub fn total_unparseable(&self) -> usize {
        self.unparseable().count()
    }

    /// Returns the number of checked dependencies
    pub fn total_dependencies(&self) -> usize {
        self.reports.len()
    }

    /// Returns true if any update is available
    pub fn has_updates(&self) -> bool {
        self.total_updates() > 0
    }
}

impl Default for UpdateSummary {
    fn default() -> Self {
        Self::new("build.gradle", true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ResolutionResult, UpdateVerdict, NO_VERSION_FOUND};

    fn coordinate(artifact: &str) -> DependencyCoordinate {
        DependencyCoordinate::new("com.example", artifact, "1.0.0")
    }

    fn update(artifact: &str) -> DependencyReport {
        DependencyReport::new(
            ResolutionResult::found(coordinate(artifact), "2.0.0", "Maven Central"),
            UpdateVerdict::UpdateAvailable("2.0.0".to_string()),
        )
    }

    fn current(artifact: &str) -> DependencyReport {
        DependencyReport::new(
            ResolutionResult::found(coordinate(artifact), "1.0.0", "Maven Central"),
            UpdateVerdict::Current,
        )
    }

    fn missing(artifact: &str) -> DependencyReport {
        DependencyReport::new(
            ResolutionResult::absent(coordinate(artifact)),
            UpdateVerdict::Unparseable(NO_VERSION_FOUND.to_string()),
        )
    }

    #[test]
    fn test_summary_new() {
        let summary = UpdateSummary::new("/tmp/build.gradle", false);
        assert_eq!(summary.path, PathBuf::from("/tmp/build.gradle"));
        assert!(summary.reports.is_empty());
        assert!(summary.skipped.is_empty());
        assert!(!summary.dry_run);
        assert_eq!(summary.rewritten, 0);
        assert!(!summary.has_updates());
    }

    #[test]
    fn test_summary_counts() {
        let mut summary = UpdateSummary::default();
        summary.add_report(update("a"));
        summary.add_report(current("b"));
        summary.add_report(missing("c"));
        summary.add_report(update("d"));
        summary.add_skipped(coordinate("e"));

        assert_eq!(summary.total_dependencies(), 4);
        assert_eq!(summary.total_updates(), 2);
        assert_eq!(summary.total_current(), 1);
        assert_eq!(summary.total_unparseable(), 1);
        assert_eq!(summary.skipped.len(), 1);
        assert!(summary.has_updates());
    }

    #[test]
    fn test_summary_preserves_order() {
        let mut summary = UpdateSummary::default();
        summary.add_report(update("z"));
        summary.add_report(update("a"));

        let artifacts: Vec<_> = summary
            .updates()
            .map(|r| r.coordinate().artifact.as_str())
            .collect();
        assert_eq!(artifacts, vec!["z", "a"]);
    }

    #[test]
    fn test_summary_keeps_duplicates() {
        let mut summary = UpdateSummary::default();
        summary.add_report(update("a"));
        summary.add_report(update("a"));
        assert_eq!(summary.total_updates(), 2);
    }

    #[test]
    fn test_serde_summary() {
        let mut summary = UpdateSummary::default();
        summary.add_report(update("a"));
        let json = serde_json::to_string(&summary).unwrap();
        let parsed: UpdateSummary = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, summary);
    }
}
