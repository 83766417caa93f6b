//! Latest-version resolution across repositories
//!
//! Repositories are tried strictly in order. The first one returning a
//! non-empty list wins and its list alone is used for selection; lists from
//! different repositories are never merged. A repository that fails or lists
//! nothing is skipped.
//!
//! Selection trusts the repository's publish order (oldest first) unless the
//! policy asks for `VersionOrdering::Semantic`. A repository that returns
//! versions out of order therefore produces a wrong pre-release pick under
//! the default ordering.

use crate::domain::version::classify;
use crate::domain::{DependencyCoordinate, ResolutionResult, VersionString};
use crate::registry::{ListKind, Repository, VersionList};
use tracing::debug;

/// How a version list is ordered when picking the latest entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VersionOrdering {
    /// Trust the repository's order: the last entry is the newest
    #[default]
    PublishOrder,
    /// Order parsable entries by semver precedence; unparsable entries are ignored
    Semantic,
}

/// Caller-supplied selection policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ResolvePolicy {
    /// Allow pre-release versions to be selected
    pub allow_prerelease: bool,
    /// List ordering assumption
    pub ordering: VersionOrdering,
}

impl ResolvePolicy {
    /// Policy selecting the latest stable version in publish order
    pub fn stable() -> Self {
        Self::default()
    }

    /// Set whether pre-releases may be selected
    pub fn with_prerelease(mut self, allow: bool) -> Self {
        self.allow_prerelease = allow;
        self
    }

    /// Set the ordering assumption
    pub fn with_ordering(mut self, ordering: VersionOrdering) -> Self {
        self.ordering = ordering;
        self
    }
}

/// Resolves the latest applicable version using an ordered list of repositories
pub struct VersionResolver {
    repositories: Vec<Box<dyn Repository>>,
}

impl VersionResolver {
    /// Create a resolver trying `repositories` in the given order
    pub fn new(repositories: Vec<Box<dyn Repository>>) -> Self {
        Self { repositories }
    }

    /// Names of the configured repositories, in fallback order
    pub fn repository_names(&self) -> Vec<String> {
        self.repositories.iter().map(|r| r.name()).collect()
    }

    /// Resolve the latest version of `coordinate` under `policy`.
    ///
    /// Never fails: every problem ends in an absent resolution.
    pub async fn resolve_latest(
        &self,
        coordinate: &DependencyCoordinate,
        policy: ResolvePolicy,
    ) -> ResolutionResult {
        let Some(list) = self.fetch_first_available(coordinate).await else {
            debug!("{}: no repository listed any version", coordinate.key());
            return ResolutionResult::absent(coordinate.clone());
        };

        let last_updated = list.last_updated;
        match select_version(&list, policy) {
            Some(version) => ResolutionResult::found(coordinate.clone(), version, list.repository)
                .with_last_updated(last_updated),
            None => {
                debug!(
                    "{}: {} listed {} versions, none eligible",
                    coordinate.key(),
                    list.repository,
                    list.len()
                );
                ResolutionResult::absent_from(coordinate.clone(), list.repository)
            }
        }
    }

    /// Query repositories in order until one returns a non-empty list
    async fn fetch_first_available(&self, coordinate: &DependencyCoordinate) -> Option<VersionList> {
        for repository in &self.repositories {
            match repository.fetch_versions(coordinate).await {
                Ok(list) if !list.is_empty() => return Some(list),
                Ok(_) => debug!(
                    "{}: {} lists no versions, trying next repository",
                    coordinate.key(),
                    repository.name()
                ),
                Err(e) => debug!(
                    "{}: {} unavailable ({}), trying next repository",
                    coordinate.key(),
                    repository.name(),
                    e
                ),
            }
        }
        None
    }
}

/// Select the latest applicable version from one repository's list.
///
/// The result is always an entry of `list`. A `LatestRelease` list only ever
/// yields a stable candidate, whatever the policy says about pre-releases.
pub fn select_version(list: &VersionList, policy: ResolvePolicy) -> Option<String> {
    let allow_prerelease = policy.allow_prerelease && list.kind == ListKind::Full;

    match policy.ordering {
        VersionOrdering::PublishOrder if allow_prerelease => list.versions.last().cloned(),
        VersionOrdering::PublishOrder => latest_stable(&list.versions),
        VersionOrdering::Semantic => highest_precedence(&list.versions, allow_prerelease),
    }
}

/// Scan newest to oldest and return the first stable entry
fn latest_stable(versions: &[String]) -> Option<String> {
    versions
        .iter()
        .rev()
        .find(|v| classify(v).is_stable())
        .cloned()
}

/// Highest semver precedence among parsable entries; ties keep the later entry
fn highest_precedence(versions: &[String], allow_prerelease: bool) -> Option<String> {
    versions
        .iter()
        .filter_map(|raw| {
            VersionString::new(raw.as_str())
                .parse()
                .ok()
                .map(|parsed| (raw, parsed))
        })
        .filter(|(_, parsed)| allow_prerelease || parsed.pre.is_empty())
        .max_by(|(_, a), (_, b)| a.cmp_precedence(b))
        .map(|(raw, _)| raw.clone())
}
