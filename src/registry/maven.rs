//! Maven repository adapter reading `maven-metadata.xml`
//!
//! URL layout: `{base}/{group as path}/{artifact}/maven-metadata.xml`
//! (e.g., `https://repo1.maven.org/maven2/junit/junit/maven-metadata.xml`).
//! Used for both the primary and the secondary repository.

use crate::domain::DependencyCoordinate;
use crate::error::RegistryError;
use crate::registry::metadata::parse_metadata;
use crate::registry::{HttpClient, Repository, VersionList};
use async_trait::async_trait;
use tracing::debug;

/// Maven Central base URL
pub const MAVEN_CENTRAL_URL: &str = "https://repo1.maven.org/maven2";

/// Google Maven base URL
pub const GOOGLE_MAVEN_URL: &str = "https://dl.google.com/android/maven2";

/// Repository serving full version lists through `maven-metadata.xml`
pub struct MavenMetadataRepository {
    client: HttpClient,
    name: String,
    base_url: String,
}

impl MavenMetadataRepository {
    /// Create a new adapter for the repository at `base_url`
    pub fn new(client: HttpClient, name: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            client,
            name: name.into(),
            base_url: base_url.into(),
        }
    }

    /// Build the metadata URL for a coordinate
    fn build_url(&self, coordinate: &DependencyCoordinate) -> String {
        format!(
            "{}/{}/{}/maven-metadata.xml",
            self.base_url.trim_end_matches('/'),
            coordinate.group_path(),
            coordinate.artifact
        )
    }
}

#[async_trait]
impl Repository for MavenMetadataRepository {
    fn name(&self) -> String {
        self.name.clone()
    }

    async fn fetch_versions(
        &self,
        coordinate: &DependencyCoordinate,
    ) -> Result<VersionList, RegistryError> {
        let url = self.build_url(coordinate);
        let package = coordinate.key();
        let body = self.client.get_xml(&url, &package, &self.name).await?;

        let metadata = parse_metadata(&body).map_err(|e| {
            RegistryError::invalid_response(
                package.as_str(),
                self.name.as_str(),
                format!("failed to parse maven-metadata.xml: {}", e),
            )
        })?;

        debug!(
            "{}: {} lists {} versions",
            self.name,
            package,
            metadata.versions.len()
        );

        Ok(VersionList::full(self.name.clone(), metadata.versions)
            .with_last_updated(metadata.last_updated))
    }
}
