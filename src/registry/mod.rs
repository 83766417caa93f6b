//! Repository adapters for fetching published versions
//!
//! This module provides:
//! - HTTP client shared foundation with retry logic
//! - `maven-metadata.xml` adapter (full version lists)
//! - Nexus resolve API adapter (latest release only)
//!
//! Every adapter reports failure as `Err(RegistryError)`, which the resolver
//! treats as "unavailable" and recovers from by trying the next repository.

mod client;
mod maven;
pub mod metadata;
mod nexus;

pub use client::{HttpClient, DEFAULT_TIMEOUT};
pub use maven::{MavenMetadataRepository, GOOGLE_MAVEN_URL, MAVEN_CENTRAL_URL};
pub use nexus::{NexusResolveRepository, OSS_NEXUS_URL};

use crate::domain::DependencyCoordinate;
use crate::error::RegistryError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[cfg(test)]
use mockall::automock;

/// Shape of the list a repository returned
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    /// Every published version, oldest first
    Full,
    /// Only the latest release (length ≤ 1); not usable for pre-release selection
    LatestRelease,
}

/// Versions returned by one repository, in the repository's publish order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionList {
    /// Name of the repository that produced the list
    pub repository: String,
    /// Version strings, oldest first as reported by the repository
    pub versions: Vec<String>,
    /// Shape of the list
    pub kind: ListKind,
    /// Last modification of the repository metadata, when known
    pub last_updated: Option<DateTime<Utc>>,
}

impl VersionList {
    /// A full version list
    pub fn full(repository: impl Into<String>, versions: Vec<String>) -> Self {
        Self {
            repository: repository.into(),
            versions,
            kind: ListKind::Full,
            last_updated: None,
        }
    }

    /// A degenerate list holding only the latest release
    pub fn latest_release(repository: impl Into<String>, versions: Vec<String>) -> Self {
        Self {
            repository: repository.into(),
            versions,
            kind: ListKind::LatestRelease,
            last_updated: None,
        }
    }

    /// Sets the metadata timestamp (builder pattern)
    pub fn with_last_updated(mut self, last_updated: Option<DateTime<Utc>>) -> Self {
        self.last_updated = last_updated;
        self
    }

    /// Returns true if the repository listed no versions
    pub fn is_empty(&self) -> bool {
        self.versions.is_empty()
    }

    /// Number of listed versions
    pub fn len(&self) -> usize {
        self.versions.len()
    }
}

/// A remote repository that can list the published versions of an artifact
#[cfg_attr(test, automock)]
#[async_trait]
pub trait Repository: Send + Sync {
    /// Display name used in logs and reports
    fn name(&self) -> String;

    /// Fetch the published versions for a coordinate
    async fn fetch_versions(
        &self,
        coordinate: &DependencyCoordinate,
    ) -> Result<VersionList, RegistryError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_list_full() {
        let list = VersionList::full("Maven Central", vec!["1.0".into(), "1.1".into()]);
        assert_eq!(list.kind, ListKind::Full);
        assert_eq!(list.len(), 2);
        assert!(!list.is_empty());
        assert!(list.last_updated.is_none());
    }

    #[test]
    fn test_version_list_latest_release() {
        let list = VersionList::latest_release("Nexus", Vec::new());
        assert_eq!(list.kind, ListKind::LatestRelease);
        assert!(list.is_empty());
    }

    #[test]
    fn test_version_list_with_last_updated() {
        let now = Utc::now();
        let list = VersionList::full("r", Vec::new()).with_last_updated(Some(now));
        assert_eq!(list.last_updated, Some(now));
    }
}
