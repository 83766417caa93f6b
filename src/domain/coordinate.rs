//! Dependency coordinate declared in a build file

use serde::{Deserialize, Serialize};
use std::fmt;

/// One `group:artifact:version[@packaging]` declaration
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DependencyCoordinate {
    /// Maven group id (e.g., `com.squareup.okhttp3`)
    pub group: String,
    /// Maven artifact id (e.g., `okhttp`)
    pub artifact: String,
    /// Version as written in the build file
    pub declared_version: String,
    /// Packaging suffix (e.g., `aar` for `@aar` declarations)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub packaging: Option<String>,
}

impl DependencyCoordinate {
    /// Creates a new coordinate without packaging
    pub fn new(
        group: impl Into<String>,
        artifact: impl Into<String>,
        declared_version: impl Into<String>,
    ) -> Self {
        Self {
            group: group.into(),
            artifact: artifact.into(),
            declared_version: declared_version.into(),
            packaging: None,
        }
    }

    /// Sets the packaging (builder pattern)
    pub fn with_packaging(mut self, packaging: impl Into<String>) -> Self {
        self.packaging = Some(packaging.into());
        self
    }

    /// Returns `group:artifact`
    pub fn key(&self) -> String {
        format!("{}:{}", self.group, self.artifact)
    }

    /// Returns `group:artifact:version` as it appears in the build file
    pub fn declaration(&self) -> String {
        self.declaration_with(&self.declared_version)
    }

    /// Returns `group:artifact:<version>` for a replacement version
    pub fn declaration_with(&self, version: &str) -> String {
        format!("{}:{}:{}", self.group, self.artifact, version)
    }

    /// Returns the group id as a repository path (`com.example` -> `com/example`)
    pub fn group_path(&self) -> String {
        self.group.replace('.', "/")
    }

    /// Returns true for `@aar` declarations
    pub fn is_aar(&self) -> bool {
        self.packaging.as_deref() == Some("aar")
    }
}

impl fmt::Display for DependencyCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.declaration())?;
        if let Some(ref packaging) = self.packaging {
            write!(f, "@{}", packaging)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn okhttp() -> DependencyCoordinate {
        DependencyCoordinate::new("com.squareup.okhttp3", "okhttp", "4.9.0")
    }

    #[test]
    fn test_coordinate_new() {
        let coord = okhttp();
        assert_eq!(coord.group, "com.squareup.okhttp3");
        assert_eq!(coord.artifact, "okhttp");
        assert_eq!(coord.declared_version, "4.9.0");
        assert!(coord.packaging.is_none());
        assert!(!coord.is_aar());
    }

    #[test]
    fn test_coordinate_key_and_declaration() {
        let coord = okhttp();
        assert_eq!(coord.key(), "com.squareup.okhttp3:okhttp");
        assert_eq!(coord.declaration(), "com.squareup.okhttp3:okhttp:4.9.0");
        assert_eq!(
            coord.declaration_with("4.12.0"),
            "com.squareup.okhttp3:okhttp:4.12.0"
        );
    }

    #[test]
    fn test_coordinate_group_path() {
        assert_eq!(okhttp().group_path(), "com/squareup/okhttp3");
        assert_eq!(
            DependencyCoordinate::new("junit", "junit", "4.12").group_path(),
            "junit"
        );
    }

    #[test]
    fn test_coordinate_display_with_packaging() {
        let coord = DependencyCoordinate::new("com.example", "widget", "1.0").with_packaging("aar");
        assert!(coord.is_aar());
        assert_eq!(format!("{}", coord), "com.example:widget:1.0@aar");
        assert_eq!(format!("{}", okhttp()), "com.squareup.okhttp3:okhttp:4.9.0");
    }

    #[test]
    fn test_serde_coordinate() {
        let coord = okhttp();
        let json = serde_json::to_string(&coord).unwrap();
        assert!(!json.contains("packaging"));
        let parsed: DependencyCoordinate = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, coord);
    }
}
