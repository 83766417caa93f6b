//! Orchestrator coordinating one run over one build file
//!
//! This module provides:
//! - Workflow coordination: read → parse → filter → resolve → plan → rewrite
//! - Sequential resolution, one coordinate at a time
//! - Rewrite error collection with partial continuation

use crate::config::Config;
use crate::domain::UpdateSummary;
use crate::error::{AppError, ManifestError, RegistryError};
use crate::manifest::{parse_manifest, ManifestWriter, WriteResult};
use crate::progress::Progress;
use crate::registry::Repository;
use crate::update::{UpdatePlanner, VersionResolver};
use tracing::{debug, info, warn};

/// Orchestrator for coordinating the update workflow
pub struct Orchestrator {
    /// Run configuration
    config: Config,
    /// Resolver over the configured repositories
    resolver: VersionResolver,
    /// Verdict computation
    planner: UpdatePlanner,
}

/// Result of running the orchestrator
pub struct OrchestratorResult {
    /// Reports for every checked coordinate
    pub summary: UpdateSummary,
    /// Outcome of the rewrite, when one was attempted
    pub write_result: Option<WriteResult>,
    /// Rewrite problems; the run itself completed
    pub errors: Vec<ManifestError>,
}

impl OrchestratorResult {
    /// Returns true if any rewrite problem was collected
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

impl Orchestrator {
    /// Create a new orchestrator talking to the configured repositories
    pub fn new(config: Config) -> Result<Self, RegistryError> {
        let repositories = config.build_repositories()?;
        Ok(Self::with_repositories(config, repositories))
    }

    /// Create an orchestrator with explicit repositories (for testing)
    pub fn with_repositories(config: Config, repositories: Vec<Box<dyn Repository>>) -> Self {
        Self {
            config,
            resolver: VersionResolver::new(repositories),
            planner: UpdatePlanner::new(),
        }
    }

    /// Run the workflow.
    ///
    /// Fails only when the build file cannot be read. Every coordinate gets a
    /// report; rewrite failures are collected in the result.
    pub async fn run(&self, show_progress: bool) -> Result<OrchestratorResult, AppError> {
        let path = self.config.file.as_path();
        let coordinates = parse_manifest(path)?;
        debug!(
            "{}: {} declarations, repositories {:?}",
            path.display(),
            coordinates.len(),
            self.resolver.repository_names()
        );

        let mut summary = UpdateSummary::new(path, !self.config.update);

        let (to_check, skipped): (Vec<_>, Vec<_>) = coordinates
            .into_iter()
            .partition(|c| self.config.filter.should_process(c));
        for coordinate in skipped {
            debug!("{}: skipped by group filter", coordinate.key());
            summary.add_skipped(coordinate);
        }

        let mut progress = Progress::new(show_progress);
        progress.start(to_check.len() as u64, "Checking dependencies");
        for coordinate in &to_check {
            progress.set_message(&coordinate.key());
            let resolution = self
                .resolver
                .resolve_latest(coordinate, self.config.policy)
                .await;
            summary.add_report(self.planner.report(resolution));
            progress.inc();
        }
        progress.finish_and_clear();

        let mut errors = Vec::new();
        let mut write_result = None;

        if self.config.update && summary.has_updates() {
            match ManifestWriter::new().apply(path, &summary.reports) {
                Ok(mut result) => {
                    info!("{}: {} declarations rewritten", path.display(), result.replaced);
                    summary.rewritten = result.replaced;
                    errors.extend(result.errors.drain(..));
                    write_result = Some(result);
                }
                Err(e) => {
                    warn!("{}", e);
                    errors.push(e);
                }
            }
        }

        Ok(OrchestratorResult {
            summary,
            write_result,
            errors,
        })
    }
}
