//! `maven-metadata.xml` parsing
//!
//! ```xml
//! <metadata>
//!   <groupId>junit</groupId>
//!   <artifactId>junit</artifactId>
//!   <versioning>
//!     <latest>4.13.2</latest>
//!     <release>4.13.2</release>
//!     <versions>
//!       <version>4.12</version>
//!       <version>4.13-beta-1</version>
//!       <version>4.13.2</version>
//!     </versions>
//!     <lastUpdated>20210213164433</lastUpdated>
//!   </versioning>
//! </metadata>
//! ```
//!
//! Versions are kept in document order, which repositories write oldest first.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct MetadataDocument {
    versioning: Option<Versioning>,
}

#[derive(Debug, Deserialize)]
struct Versioning {
    versions: Option<Versions>,
    #[serde(rename = "lastUpdated")]
    last_updated: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Versions {
    #[serde(rename = "version", default)]
    entries: Vec<String>,
}

/// Version information extracted from a metadata document
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MavenMetadata {
    /// Published versions in document order
    pub versions: Vec<String>,
    /// The `<lastUpdated>` timestamp, if present and well-formed
    pub last_updated: Option<DateTime<Utc>>,
}

/// Parses a `maven-metadata.xml` document.
///
/// A document without `<versioning>` or `<versions>` yields an empty list.
pub fn parse_metadata(xml: &str) -> Result<MavenMetadata, quick_xml::DeError> {
    let document: MetadataDocument = quick_xml::de::from_str(xml)?;

    let Some(versioning) = document.versioning else {
        return Ok(MavenMetadata::default());
    };

    let versions = versioning
        .versions
        .map(|v| v.entries)
        .unwrap_or_default()
        .into_iter()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .collect();

    Ok(MavenMetadata {
        versions,
        last_updated: versioning
            .last_updated
            .as_deref()
            .and_then(parse_last_updated),
    })
}

/// Parses the `yyyyMMddHHmmss` timestamp format used by Maven
fn parse_last_updated(value: &str) -> Option<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(value.trim(), "%Y%m%d%H%M%S")
        .ok()
        .map(|naive| naive.and_utc())
}
