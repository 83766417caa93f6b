//! Gradle build file parser
//!
//! Handles string notation declarations in `build.gradle` and
//! `build.gradle.kts`:
//! - `implementation 'group:artifact:version'`
//! - `implementation("group:artifact:version")`
//! - `compile 'group:artifact:version@aar'`
//!
//! Map notation, variable interpolation (`$version`) and classifier
//! coordinates are not rewritable as `group:artifact:version` and are ignored.

use crate::domain::DependencyCoordinate;
use regex::Regex;
use std::sync::LazyLock;

/// Parser for build.gradle and build.gradle.kts files
#[derive(Debug, Clone, Copy, Default)]
pub struct GradleParser;

// String notation dependency: implementation 'group:artifact:version[@packaging]'
static DEP_STRING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"^\s*(\w+)\s*\(?\s*['"]([A-Za-z0-9_.\-]+):([A-Za-z0-9_.\-]+):([A-Za-z0-9_.+\-]+)(?:@(\w+))?['"]"#,
    )
    .unwrap()
});

/// Dependency configurations whose declarations are checked
pub const CONFIGURATIONS: [&str; 12] = [
    "compile",
    "implementation",
    "api",
    "compileOnly",
    "runtimeOnly",
    "testCompile",
    "testImplementation",
    "androidTestImplementation",
    "debugImplementation",
    "releaseImplementation",
    "kapt",
    "annotationProcessor",
];

impl GradleParser {
    /// Create a new parser
    pub fn new() -> Self {
        Self
    }

    /// Extract coordinates in declaration order. Duplicates are kept.
    pub fn parse(&self, content: &str) -> Vec<DependencyCoordinate> {
        let mut coordinates = Vec::new();
        let mut in_block_comment = false;

        for line in content.lines() {
            let trimmed = line.trim();

            if in_block_comment {
                if trimmed.contains("*/") {
                    in_block_comment = false;
                }
                continue;
            }
            if trimmed.starts_with("/*") {
                in_block_comment = !trimmed.contains("*/");
                continue;
            }

            // Skip empty lines and comments
            if trimmed.is_empty() || trimmed.starts_with("//") {
                continue;
            }

            if let Some(coordinate) = self.parse_line(trimmed) {
                coordinates.push(coordinate);
            }
        }

        coordinates
    }

    /// Parse a single string notation declaration
    fn parse_line(&self, line: &str) -> Option<DependencyCoordinate> {
        let caps = DEP_STRING.captures(line)?;

        let configuration = caps.get(1)?.as_str();
        if !CONFIGURATIONS.contains(&configuration) {
            return None;
        }

        let coordinate = DependencyCoordinate::new(
            caps.get(2)?.as_str(),
            caps.get(3)?.as_str(),
            caps.get(4)?.as_str(),
        );

        Some(match caps.get(5) {
            Some(packaging) => coordinate.with_packaging(packaging.as_str()),
            None => coordinate,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(content: &str) -> Vec<DependencyCoordinate> {
        GradleParser::new().parse(content)
    }

    #[test]
    fn test_parse_string_notation() {
        let deps = parse("    compile 'com.squareup.okhttp3:okhttp:3.12.0'\n");
        assert_eq!(deps.len(), 1);
        assert_eq!(deps[0].group, "com.squareup.okhttp3");
        assert_eq!(deps[0].artifact, "okhttp");
        assert_eq!(deps[0].declared_version, "3.12.0");
        assert!(deps[0].packaging.is_none());
    }

    #[test]
    fn test_parse_string_notation_double_quotes() {
        let deps = parse(r#"implementation "io.reactivex.rxjava2:rxjava:2.2.4""#);
        assert_eq!(deps.len(), 1);
        assert_eq!(deps[0].key(), "io.reactivex.rxjava2:rxjava");
    }

    #[test]
    fn test_parse_kotlin_parentheses() {
        let deps = parse(r#"implementation("org.jetbrains.kotlin:kotlin-stdlib:1.9.22")"#);
        assert_eq!(deps.len(), 1);
        assert_eq!(deps[0].declared_version, "1.9.22");
    }

    #[test]
    fn test_parse_aar_packaging() {
        let deps = parse("compile 'com.github.chrisbanes:PhotoView:2.1.3@aar'");
        assert_eq!(deps.len(), 1);
        assert_eq!(deps[0].declared_version, "2.1.3");
        assert_eq!(deps[0].packaging.as_deref(), Some("aar"));
        assert!(deps[0].is_aar());
    }

    #[test]
    fn test_parse_prerelease_version() {
        let deps = parse("testImplementation 'org.junit.jupiter:junit-jupiter:5.11.0-M2'");
        assert_eq!(deps[0].declared_version, "5.11.0-M2");
    }

    #[test]
    fn test_parse_all_configurations() {
        let content = CONFIGURATIONS
            .iter()
            .map(|c| format!("{} 'g.{}:a:1.0'", c, c))
            .collect::<Vec<_>>()
            .join("\n");
        assert_eq!(parse(&content).len(), CONFIGURATIONS.len());
    }

    #[test]
    fn test_parse_ignores_unknown_configuration() {
        assert!(parse("classpath 'com.android.tools.build:gradle:8.2.0'").is_empty());
        assert!(parse("id 'com.android.application'").is_empty());
    }

    #[test]
    fn test_parse_ignores_variables_and_map_notation() {
        let content = r#"
implementation "com.example:lib:$libVersion"
implementation group: 'com.example', name: 'lib', version: '1.0'
implementation project(':core')
"#;
        assert!(parse(content).is_empty());
    }

    #[test]
    fn test_parse_ignores_classifier() {
        assert!(parse("implementation 'com.example:natives:1.0:linux'").is_empty());
    }

    #[test]
    fn test_parse_skips_comments() {
        let content = r#"
// compile 'junit:junit:4.11'
/*
compile 'junit:junit:4.10'
*/
/* single line */
compile 'junit:junit:4.12' // trailing comment
"#;
        let deps = parse(content);
        assert_eq!(deps.len(), 1);
        assert_eq!(deps[0].declared_version, "4.12");
    }

    #[test]
    fn test_parse_keeps_duplicates_in_order() {
        let content = "compile 'junit:junit:4.11'\ntestCompile 'junit:junit:4.12'\n";
        let deps = parse(content);
        assert_eq!(deps.len(), 2);
        assert_eq!(deps[0].declared_version, "4.11");
        assert_eq!(deps[1].declared_version, "4.12");
    }

    #[test]
    fn test_parse_empty() {
        assert!(parse("").is_empty());
    }

    #[test]
    fn test_parse_realistic_build_gradle() {
        let content = r#"apply plugin: 'com.android.application'

android {
    compileSdkVersion 28
    defaultConfig {
        applicationId "com.example.app"
        minSdkVersion 21
    }
}

dependencies {
    implementation fileTree(dir: 'libs', include: ['*.jar'])
    implementation 'com.android.support:appcompat-v7:28.0.0'
    implementation 'com.google.android.gms:play-services-maps:16.0.0'
    implementation 'com.squareup.retrofit2:retrofit:2.5.0'
    implementation 'com.jakewharton.timber:timber:4.7.1'
    testImplementation 'junit:junit:4.12'
    androidTestImplementation 'com.android.support.test:runner:1.0.2'
}
"#;
        let deps = parse(content);
        let keys: Vec<String> = deps.iter().map(|d| d.key()).collect();
        assert_eq!(
            keys,
            vec![
                "com.android.support:appcompat-v7",
                "com.google.android.gms:play-services-maps",
                "com.squareup.retrofit2:retrofit",
                "com.jakewharton.timber:timber",
                "junit:junit",
                "com.android.support.test:runner",
            ]
        );
    }
}
