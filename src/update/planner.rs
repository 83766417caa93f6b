//! Update verdicts from resolution results

use crate::domain::version::compare;
use crate::domain::{DependencyReport, ResolutionResult, UpdateVerdict, NO_VERSION_FOUND};
use std::cmp::Ordering;
use tracing::debug;

/// Turns a resolution into a verdict for its coordinate
#[derive(Debug, Clone, Copy, Default)]
pub struct UpdatePlanner;

impl UpdatePlanner {
    /// Create a new planner
    pub fn new() -> Self {
        Self
    }

    /// Compare the declared version against the resolved one.
    ///
    /// The comparison is always `compare(declared, resolved)`: an update is
    /// available only when the declared version is strictly lower. A newer
    /// declared version is reported as current, never as a downgrade.
    pub fn plan(&self, resolution: &ResolutionResult) -> UpdateVerdict {
        let Some(resolved) = resolution.resolved_version.as_deref() else {
            return UpdateVerdict::Unparseable(NO_VERSION_FOUND.to_string());
        };

        let declared = resolution.coordinate.declared_version.as_str();
        match compare(declared, resolved) {
            Ok(Ordering::Less) => UpdateVerdict::UpdateAvailable(resolved.to_string()),
            Ok(_) => UpdateVerdict::Current,
            Err(e) => {
                debug!("{}: {}", resolution.coordinate.key(), e);
                UpdateVerdict::Unparseable(e.to_string())
            }
        }
    }

    /// Plan a resolution and pair it with its verdict
    pub fn report(&self, resolution: ResolutionResult) -> DependencyReport {
        let verdict = self.plan(&resolution);
        DependencyReport::new(resolution, verdict)
    }
}
