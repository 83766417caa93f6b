//! Nexus `artifact/maven/resolve` adapter
//!
//! API endpoint: `{base}/service/local/artifact/maven/resolve`
//!
//! Query format: `g={group}&a={artifact}&v=RELEASE&r=releases[&p=aar]`
//!
//! The API only reports the latest release, so the resulting list has at most
//! one entry and is marked `ListKind::LatestRelease`.

use crate::domain::DependencyCoordinate;
use crate::error::RegistryError;
use crate::registry::{HttpClient, Repository, VersionList};
use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

/// Sonatype OSS Nexus base URL
pub const OSS_NEXUS_URL: &str = "https://oss.sonatype.org";

/// Nexus resolve adapter
pub struct NexusResolveRepository {
    client: HttpClient,
    name: String,
    base_url: String,
}

/// Nexus resolve response
#[derive(Debug, Deserialize)]
struct ResolveResponse {
    data: ResolvedArtifact,
}

/// Resolved artifact details
#[derive(Debug, Deserialize)]
struct ResolvedArtifact {
    version: String,
}

impl NexusResolveRepository {
    /// Create a new Nexus adapter for the instance at `base_url`
    pub fn new(client: HttpClient, name: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            client,
            name: name.into(),
            base_url: base_url.into(),
        }
    }

    /// Build the resolve URL for a coordinate
    fn build_url(&self, coordinate: &DependencyCoordinate) -> String {
        let mut url = format!(
            "{}/service/local/artifact/maven/resolve?g={}&a={}&v=RELEASE&r=releases",
            self.base_url.trim_end_matches('/'),
            coordinate.group,
            coordinate.artifact
        );
        if coordinate.is_aar() {
            url.push_str("&p=aar");
        }
        url
    }
}

#[async_trait]
impl Repository for NexusResolveRepository {
    fn name(&self) -> String {
        self.name.clone()
    }

    async fn fetch_versions(
        &self,
        coordinate: &DependencyCoordinate,
    ) -> Result<VersionList, RegistryError> {
        let url = self.build_url(coordinate);
        let package = coordinate.key();
        let response: ResolveResponse = self.client.get_json(&url, &package, &self.name).await?;

        let version = response.data.version.trim().to_string();
        debug!("{}: {} latest release is '{}'", self.name, package, version);

        let versions = if version.is_empty() {
            Vec::new()
        } else {
            vec![version]
        };

        Ok(VersionList::latest_release(self.name.clone(), versions))
    }
}
