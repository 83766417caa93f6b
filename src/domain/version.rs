//! Version classification and comparison
//!
//! Maven artifacts frequently publish two-component versions (`1.2`), which
//! are not valid semantic versions. Both classification and comparison pad
//! the core to three components (`1.2` -> `1.2.0`, `1.2-beta` -> `1.2.0-beta`)
//! before handing the string to `semver`. Anything still unparsable after that
//! is reported, never panicked on.

use crate::error::VersionError;
use semver::Version;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;

/// Derived classification of a version string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionClassification {
    /// Carries a semver pre-release tag (`-beta`, `-rc1`, ...)
    pub is_prerelease: bool,
    /// Parses as a semantic version after normalization
    pub is_parsable: bool,
}

impl VersionClassification {
    /// Parsable and without a pre-release tag
    pub fn is_stable(&self) -> bool {
        self.is_parsable && !self.is_prerelease
    }
}

/// A textual version as published by a repository or declared in a build file
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VersionString(String);

impl VersionString {
    /// Wraps a version string
    pub fn new(version: impl Into<String>) -> Self {
        Self(version.into())
    }

    /// Returns the raw text
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parses into a semantic version, padding `MAJOR.MINOR` to `MAJOR.MINOR.0`
    pub fn parse(&self) -> Result<Version, VersionError> {
        Version::parse(&normalize(&self.0))
            .map_err(|e| VersionError::parse(self.0.as_str(), e.to_string()))
    }

    /// Classifies this version as stable, pre-release or unparsable
    pub fn classify(&self) -> VersionClassification {
        match self.parse() {
            Ok(version) => VersionClassification {
                is_prerelease: !version.pre.is_empty(),
                is_parsable: true,
            },
            Err(_) => VersionClassification {
                is_prerelease: false,
                is_parsable: false,
            },
        }
    }

    /// Compares by semver precedence; build metadata is ignored
    pub fn compare(&self, other: &VersionString) -> Result<Ordering, VersionError> {
        let left = self.parse()?;
        let right = other.parse()?;
        Ok(left.cmp_precedence(&right))
    }
}

impl fmt::Display for VersionString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for VersionString {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for VersionString {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Classifies a raw version string
pub fn classify(version: &str) -> VersionClassification {
    VersionString::new(version).classify()
}

/// Compares two raw version strings by semver precedence.
///
/// Fails with the first string that does not parse.
pub fn compare(a: &str, b: &str) -> Result<Ordering, VersionError> {
    VersionString::new(a).compare(&VersionString::new(b))
}

/// Pads a two-component core to three components, keeping any suffix
fn normalize(version: &str) -> Cow<'_, str> {
    let core_end = version.find(['-', '+']).unwrap_or(version.len());
    let (core, suffix) = version.split_at(core_end);

    if core.matches('.').count() == 1 {
        Cow::Owned(format!("{}.0{}", core, suffix))
    } else {
        Cow::Borrowed(version)
    }
}
