//! Run configuration
//!
//! Built once from the command line and passed down explicitly; nothing here
//! outlives a single run.

use crate::cli::CliArgs;
use crate::error::{ConfigError, RegistryError};
use crate::registry::{
    HttpClient, MavenMetadataRepository, NexusResolveRepository, Repository, GOOGLE_MAVEN_URL,
    MAVEN_CENTRAL_URL,
};
use crate::update::{GroupFilter, ResolvePolicy, VersionOrdering};
use reqwest::Url;
use std::path::PathBuf;
use std::time::Duration;

/// Protocol spoken by a repository
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepositoryKind {
    /// `maven-metadata.xml` listing every version
    Metadata,
    /// Nexus resolve API reporting the latest release only
    NexusResolve,
}

/// One repository in fallback order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryConfig {
    pub kind: RepositoryKind,
    pub name: String,
    pub url: String,
}

impl RepositoryConfig {
    fn new(kind: RepositoryKind, name: &str, url: &str) -> Result<Self, ConfigError> {
        validate_url(url)?;
        Ok(Self {
            kind,
            name: name.to_string(),
            url: url.to_string(),
        })
    }

    /// Instantiate the adapter for this repository
    pub fn build(&self, client: HttpClient) -> Box<dyn Repository> {
        match self.kind {
            RepositoryKind::Metadata => Box::new(MavenMetadataRepository::new(
                client,
                self.name.as_str(),
                self.url.as_str(),
            )),
            RepositoryKind::NexusResolve => Box::new(NexusResolveRepository::new(
                client,
                self.name.as_str(),
                self.url.as_str(),
            )),
        }
    }
}

/// Configuration for one run
#[derive(Debug, Clone)]
pub struct Config {
    /// Build file to check
    pub file: PathBuf,
    /// Rewrite the build file
    pub update: bool,
    /// Repositories in fallback order
    pub repositories: Vec<RepositoryConfig>,
    /// Per-request timeout
    pub timeout: Duration,
    /// Version selection policy
    pub policy: ResolvePolicy,
    /// Group skip filter
    pub filter: GroupFilter,
}

impl Config {
    /// Build and validate the configuration from command line arguments
    pub fn from_cli(args: &CliArgs) -> Result<Self, ConfigError> {
        if args.nexus.is_some() && args.primary_url.is_some() {
            return Err(ConfigError::ConflictingOptions {
                message: "--nexus and --primary-url both set the primary repository".to_string(),
            });
        }
        if args.quiet && args.verbose {
            return Err(ConfigError::ConflictingOptions {
                message: "--quiet and --verbose cannot be combined".to_string(),
            });
        }

        let primary = match (&args.nexus, &args.primary_url) {
            (Some(nexus), _) => RepositoryConfig::new(RepositoryKind::NexusResolve, "Nexus", nexus)?,
            (None, Some(url)) => RepositoryConfig::new(RepositoryKind::Metadata, "Primary", url)?,
            (None, None) => {
                RepositoryConfig::new(RepositoryKind::Metadata, "Maven Central", MAVEN_CENTRAL_URL)?
            }
        };
        let secondary = match &args.secondary_url {
            Some(url) => RepositoryConfig::new(RepositoryKind::Metadata, "Secondary", url)?,
            None => RepositoryConfig::new(RepositoryKind::Metadata, "Google Maven", GOOGLE_MAVEN_URL)?,
        };

        let ordering = if args.semantic_order {
            VersionOrdering::Semantic
        } else {
            VersionOrdering::PublishOrder
        };

        let filter = if args.skip_groups.is_empty() {
            GroupFilter::new()
        } else {
            GroupFilter::none().with_skip_groups(args.skip_groups.clone())
        };

        Ok(Self {
            file: args.file.clone(),
            update: args.update,
            repositories: vec![primary, secondary],
            timeout: Duration::from_secs(args.timeout),
            policy: ResolvePolicy::stable()
                .with_prerelease(args.prerelease)
                .with_ordering(ordering),
            filter,
        })
    }

    /// Instantiate the repository adapters, sharing one HTTP client
    pub fn build_repositories(&self) -> Result<Vec<Box<dyn Repository>>, RegistryError> {
        let client = HttpClient::with_timeout(self.timeout)?;
        Ok(self
            .repositories
            .iter()
            .map(|repo| repo.build(client.clone()))
            .collect())
    }
}

/// Accept absolute http(s) URLs only
fn validate_url(value: &str) -> Result<(), ConfigError> {
    let url = Url::parse(value).map_err(|e| ConfigError::InvalidUrl {
        value: value.to_string(),
        message: e.to_string(),
    })?;
    match url.scheme() {
        "http" | "https" => Ok(()),
        scheme => Err(ConfigError::InvalidUrl {
            value: value.to_string(),
            message: format!("unsupported scheme '{}'", scheme),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn config(args: &[&str]) -> Result<Config, ConfigError> {
        let mut argv = vec!["mvn-update"];
        argv.extend_from_slice(args);
        Config::from_cli(&CliArgs::parse_from(argv))
    }

    #[test]
    fn test_default_repositories() {
        let config = config(&[]).unwrap();
        assert_eq!(config.repositories.len(), 2);
        assert_eq!(config.repositories[0].name, "Maven Central");
        assert_eq!(config.repositories[0].url, MAVEN_CENTRAL_URL);
        assert_eq!(config.repositories[0].kind, RepositoryKind::Metadata);
        assert_eq!(config.repositories[1].name, "Google Maven");
        assert_eq!(config.repositories[1].url, GOOGLE_MAVEN_URL);
    }

    #[test]
    fn test_default_policy_and_filter() {
        let config = config(&[]).unwrap();
        assert_eq!(config.policy, ResolvePolicy::stable());
        assert_eq!(config.filter, GroupFilter::new());
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert!(!config.update);
    }

    #[test]
    fn test_policy_flags() {
        let config = config(&["-p", "--semantic-order"]).unwrap();
        assert!(config.policy.allow_prerelease);
        assert_eq!(config.policy.ordering, VersionOrdering::Semantic);
    }

    #[test]
    fn test_skip_groups_replace_defaults() {
        let config = config(&["--skip-group", "org.internal"]).unwrap();
        assert_eq!(config.filter.skip_groups, vec!["org.internal"]);
    }

    #[test]
    fn test_custom_urls() {
        let config = config(&[
            "--primary-url",
            "http://127.0.0.1:9000/m2",
            "--secondary-url",
            "http://127.0.0.1:9001/m2",
        ])
        .unwrap();
        assert_eq!(config.repositories[0].url, "http://127.0.0.1:9000/m2");
        assert_eq!(config.repositories[1].url, "http://127.0.0.1:9001/m2");
    }

    #[test]
    fn test_nexus_primary() {
        let config = config(&["--nexus"]).unwrap();
        assert_eq!(config.repositories[0].kind, RepositoryKind::NexusResolve);
        assert_eq!(config.repositories[1].kind, RepositoryKind::Metadata);
    }

    #[test]
    fn test_nexus_conflicts_with_primary_url() {
        let result = config(&["--nexus", "--primary-url", "https://repo.example"]);
        assert!(matches!(result, Err(ConfigError::ConflictingOptions { .. })));
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        let result = config(&["-q", "--verbose"]);
        assert!(matches!(result, Err(ConfigError::ConflictingOptions { .. })));
    }

    #[test]
    fn test_invalid_url() {
        let result = config(&["--primary-url", "not a url"]);
        assert!(matches!(result, Err(ConfigError::InvalidUrl { .. })));

        let result = config(&["--secondary-url", "ftp://mirror.example/m2"]);
        assert!(matches!(result, Err(ConfigError::InvalidUrl { .. })));
    }

    #[test]
    fn test_build_repositories_keeps_order() {
        let config = config(&["--nexus"]).unwrap();
        let repositories = config.build_repositories().unwrap();
        let names: Vec<String> = repositories.iter().map(|r| r.name()).collect();
        assert_eq!(names, vec!["Nexus", "Google Maven"]);
    }
}
