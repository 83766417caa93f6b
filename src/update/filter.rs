//! Group skip filter
//!
//! Coordinates whose group contains one of the skip patterns are excluded
//! before resolution. The default patterns cover Android support and Play
//! Services artifacts, which live outside the public repositories.

use crate::domain::DependencyCoordinate;

/// Group patterns skipped unless overridden
pub const DEFAULT_SKIP_GROUPS: &[&str] = &["com.android.support", "com.google.android.gms"];

/// Filter deciding which coordinates are resolved
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupFilter {
    /// Substrings matched against the group id
    pub skip_groups: Vec<String>,
}

impl Default for GroupFilter {
    fn default() -> Self {
        Self {
            skip_groups: DEFAULT_SKIP_GROUPS.iter().map(|g| g.to_string()).collect(),
        }
    }
}

impl GroupFilter {
    /// Create a filter with the default skip patterns
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a filter that skips nothing
    pub fn none() -> Self {
        Self {
            skip_groups: Vec::new(),
        }
    }

    /// Replace the skip patterns
    pub fn with_skip_groups(mut self, skip_groups: Vec<String>) -> Self {
        self.skip_groups = skip_groups;
        self
    }

    /// Returns the first pattern matching the coordinate's group, if any
    pub fn matching_pattern(&self, coordinate: &DependencyCoordinate) -> Option<&str> {
        self.skip_groups
            .iter()
            .map(String::as_str)
            .find(|pattern| !pattern.is_empty() && coordinate.group.contains(pattern))
    }

    /// Check if a coordinate should be resolved
    pub fn should_process(&self, coordinate: &DependencyCoordinate) -> bool {
        self.matching_pattern(coordinate).is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coord(group: &str) -> DependencyCoordinate {
        DependencyCoordinate::new(group, "artifact", "1.0.0")
    }

    #[test]
    fn test_default_skips_android_groups() {
        let filter = GroupFilter::new();
        assert!(!filter.should_process(&coord("com.android.support")));
        assert!(!filter.should_process(&coord("com.google.android.gms")));
        assert!(filter.should_process(&coord("com.squareup.okhttp3")));
    }

    #[test]
    fn test_substring_match() {
        let filter = GroupFilter::new();
        assert_eq!(
            filter.matching_pattern(&coord("com.android.support.test")),
            Some("com.android.support")
        );
    }

    #[test]
    fn test_none_processes_everything() {
        let filter = GroupFilter::none();
        assert!(filter.should_process(&coord("com.android.support")));
    }

    #[test]
    fn test_custom_patterns() {
        let filter = GroupFilter::new().with_skip_groups(vec!["org.internal".to_string()]);
        assert!(!filter.should_process(&coord("org.internal.tools")));
        assert!(filter.should_process(&coord("com.android.support")));
    }

    #[test]
    fn test_empty_pattern_matches_nothing() {
        let filter = GroupFilter::none().with_skip_groups(vec![String::new()]);
        assert!(filter.should_process(&coord("junit")));
    }
}
