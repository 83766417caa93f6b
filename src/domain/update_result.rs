//! Resolution and update verdict types

use super::DependencyCoordinate;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Reason reported when no repository yielded a usable version
pub const NO_VERSION_FOUND: &str = "no version found";

/// Outcome of resolving the latest version for one coordinate
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolutionResult {
    /// The coordinate that was resolved
    pub coordinate: DependencyCoordinate,
    /// The selected version, taken verbatim from a repository's version list
    pub resolved_version: Option<String>,
    /// Name of the repository whose list was used
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repository: Option<String>,
    /// When that repository last changed the artifact's metadata
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<DateTime<Utc>>,
}

impl ResolutionResult {
    /// A resolution that found a version
    pub fn found(
        coordinate: DependencyCoordinate,
        version: impl Into<String>,
        repository: impl Into<String>,
    ) -> Self {
        Self {
            coordinate,
            resolved_version: Some(version.into()),
            repository: Some(repository.into()),
            last_updated: None,
        }
    }

    /// A resolution where no repository yielded a usable version
    pub fn absent(coordinate: DependencyCoordinate) -> Self {
        Self {
            coordinate,
            resolved_version: None,
            repository: None,
            last_updated: None,
        }
    }

    /// A repository answered but nothing matched the selection policy
    pub fn absent_from(coordinate: DependencyCoordinate, repository: impl Into<String>) -> Self {
        Self {
            coordinate,
            resolved_version: None,
            repository: Some(repository.into()),
            last_updated: None,
        }
    }

    /// Sets the repository metadata timestamp (builder pattern)
    pub fn with_last_updated(mut self, last_updated: Option<DateTime<Utc>>) -> Self {
        self.last_updated = last_updated;
        self
    }

    /// Returns true if a version was selected
    pub fn is_resolved(&self) -> bool {
        self.resolved_version.is_some()
    }
}

/// Comparison verdict for one coordinate
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "detail", rename_all = "snake_case")]
pub enum UpdateVerdict {
    /// Declared version is at or above the resolved version
    Current,
    /// A newer version is available
    UpdateAvailable(String),
    /// No version found, or one side is not a semantic version
    Unparseable(String),
}

impl UpdateVerdict {
    /// Returns true if an update is available
    pub fn is_update(&self) -> bool {
        matches!(self, UpdateVerdict::UpdateAvailable(_))
    }

    /// Returns true if the declared version is current
    pub fn is_current(&self) -> bool {
        matches!(self, UpdateVerdict::Current)
    }

    /// Returns true if the verdict could not be computed
    pub fn is_unparseable(&self) -> bool {
        matches!(self, UpdateVerdict::Unparseable(_))
    }

    /// Returns the new version for updates
    pub fn new_version(&self) -> Option<&str> {
        match self {
            UpdateVerdict::UpdateAvailable(version) => Some(version),
            _ => None,
        }
    }
}

impl fmt::Display for UpdateVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UpdateVerdict::Current => write!(f, "current"),
            UpdateVerdict::UpdateAvailable(version) => write!(f, "update to {}", version),
            UpdateVerdict::Unparseable(reason) => write!(f, "unparseable: {}", reason),
        }
    }
}

/// Everything known about one coordinate after a run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyReport {
    /// Resolution outcome, owning the coordinate
    pub resolution: ResolutionResult,
    /// Verdict computed from the resolution
    pub verdict: UpdateVerdict,
}

impl DependencyReport {
    /// Creates a new report
    pub fn new(resolution: ResolutionResult, verdict: UpdateVerdict) -> Self {
        Self {
            resolution,
            verdict,
        }
    }

    /// The coordinate this report is about
    pub fn coordinate(&self) -> &DependencyCoordinate {
        &self.resolution.coordinate
    }
}

impl fmt::Display for DependencyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let coord = self.coordinate();
        match &self.verdict {
            UpdateVerdict::Current => {
                write!(f, "{} {} current", coord.key(), coord.declared_version)
            }
            UpdateVerdict::UpdateAvailable(version) => {
                write!(
                    f,
                    "{} {} -> {}",
                    coord.key(),
                    coord.declared_version,
                    version
                )
            }
            UpdateVerdict::Unparseable(reason) => write!(f, "{} for {}", reason, coord),
        }
    }
}
