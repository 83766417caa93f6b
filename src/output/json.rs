//! JSON output formatter for machine processing
//!
//! This module provides:
//! - JSON serialization of per-dependency verdicts
//! - Summary counts and rewrite errors

use crate::domain::{DependencyReport, UpdateSummary, UpdateVerdict};
use crate::orchestrator::OrchestratorResult;
use crate::output::{OutputFormatter, Verbosity};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::io::Write;

/// JSON formatter for machine-readable output
pub struct JsonFormatter {
    /// Verbosity level affects detail in output
    verbosity: Verbosity,
}

impl JsonFormatter {
    /// Create a new JSON formatter
    pub fn new(verbosity: Verbosity) -> Self {
        Self { verbosity }
    }
}

/// JSON representation of the full result
#[derive(Serialize)]
struct JsonOutput {
    /// Checked build file
    file: String,
    /// Whether the build file was left untouched
    dry_run: bool,
    /// One entry per checked declaration
    dependencies: Vec<JsonDependency>,
    /// Declarations excluded by the group filter (verbose only)
    #[serde(skip_serializing_if = "Vec::is_empty")]
    skipped: Vec<String>,
    /// Summary statistics
    summary: JsonSummary,
    /// Errors encountered
    #[serde(skip_serializing_if = "Vec::is_empty")]
    errors: Vec<String>,
}

/// JSON representation of summary statistics
#[derive(Serialize)]
struct JsonSummary {
    updates: usize,
    current: usize,
    unparseable: usize,
    skipped: usize,
    rewritten: usize,
}

/// JSON representation of one dependency
#[derive(Serialize)]
struct JsonDependency {
    group: String,
    artifact: String,
    declared_version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    packaging: Option<String>,
    resolved_version: Option<String>,
    repository: Option<String>,
    /// Metadata timestamp of the answering repository
    #[serde(skip_serializing_if = "Option::is_none")]
    last_updated: Option<DateTime<Utc>>,
    /// `update_available`, `current` or `unparseable`
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    reason: Option<String>,
}

impl From<&DependencyReport> for JsonDependency {
    fn from(report: &DependencyReport) -> Self {
        let coord = report.coordinate();
        let (status, reason) = match &report.verdict {
            UpdateVerdict::UpdateAvailable(_) => ("update_available", None),
            UpdateVerdict::Current => ("current", None),
            UpdateVerdict::Unparseable(reason) => ("unparseable", Some(reason.clone())),
        };

        Self {
            group: coord.group.clone(),
            artifact: coord.artifact.clone(),
            declared_version: coord.declared_version.clone(),
            packaging: coord.packaging.clone(),
            resolved_version: report.resolution.resolved_version.clone(),
            repository: report.resolution.repository.clone(),
            last_updated: report.resolution.last_updated,
            status,
            reason,
        }
    }
}

impl From<&UpdateSummary> for JsonSummary {
    fn from(summary: &UpdateSummary) -> Self {
        Self {
            updates: summary.total_updates(),
            current: summary.total_current(),
            unparseable: summary.total_unparseable(),
            skipped: summary.skipped.len(),
            rewritten: summary.rewritten,
        }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, result: &OrchestratorResult, writer: &mut dyn Write) -> std::io::Result<()> {
        let summary = &result.summary;

        // Quiet mode keeps only updates
        let dependencies = summary
            .reports
            .iter()
            .filter(|r| self.verbosity != Verbosity::Quiet || r.verdict.is_update())
            .map(JsonDependency::from)
            .collect();

        let skipped = if self.verbosity == Verbosity::Verbose {
            summary.skipped.iter().map(|c| c.declaration()).collect()
        } else {
            Vec::new()
        };

        let output = JsonOutput {
            file: summary.path.display().to_string(),
            dry_run: summary.dry_run,
            dependencies,
            skipped,
            summary: JsonSummary::from(summary),
            errors: result.errors.iter().map(|e| e.to_string()).collect(),
        };

        let json = serde_json::to_string_pretty(&output).map_err(std::io::Error::other)?;

        writeln!(writer, "{}", json)?;

        Ok(())
    }

    fn format_summary(
        &self,
        summary: &UpdateSummary,
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(&JsonSummary::from(summary))
            .map_err(std::io::Error::other)?;

        writeln!(writer, "{}", json)?;

        Ok(())
    }
}
