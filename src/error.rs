//! Application error types using thiserror
//!
//! Error hierarchy:
//! - ManifestError: Issues reading, parsing or rewriting the build file
//! - RegistryError: A repository could not answer (recovered by fallback)
//! - VersionError: A version string is not a semantic version
//! - ConfigError: Issues with CLI configuration

use std::path::PathBuf;
use thiserror::Error;

/// Application-level error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Build file related errors
    #[error(transparent)]
    Manifest(#[from] ManifestError),

    /// Repository related errors
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// Version parsing errors
    #[error(transparent)]
    Version(#[from] VersionError),

    /// Configuration related errors
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Errors related to build file operations
#[derive(Error, Debug)]
pub enum ManifestError {
    /// Build file not found
    #[error("build file not found: {path}")]
    NotFound { path: PathBuf },

    /// Failed to read build file
    #[error("failed to read build file {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write build file
    #[error("failed to write build file {path}: {source}")]
    WriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A declaration could not be rewritten
    #[error("failed to rewrite '{coordinate}': {message}")]
    RewriteError { coordinate: String, message: String },
}

/// Errors raised while talking to one repository.
///
/// Every variant means "this repository is unavailable for this coordinate";
/// the resolver falls through to the next repository.
#[derive(Error, Debug)]
pub enum RegistryError {
    /// Artifact not found in repository
    #[error("artifact '{package}' not found in {registry}")]
    PackageNotFound { package: String, registry: String },

    /// Network request failed or returned a non-success status
    #[error("failed to fetch '{package}' from {registry}: {message}")]
    NetworkError {
        package: String,
        registry: String,
        message: String,
    },

    /// Rate limit exceeded
    #[error("rate limit exceeded for {registry}")]
    RateLimitExceeded { registry: String },

    /// Response body could not be parsed
    #[error("invalid response from {registry} for '{package}': {message}")]
    InvalidResponse {
        package: String,
        registry: String,
        message: String,
    },

    /// Timeout
    #[error("timeout while fetching '{package}' from {registry}")]
    Timeout { package: String, registry: String },
}

/// Errors raised when a version string is not a semantic version
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VersionError {
    /// The string could not be parsed
    #[error("invalid version '{version}': {message}")]
    Parse { version: String, message: String },
}

/// Errors related to configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Repository URL is not usable
    #[error("invalid repository URL '{value}': {message}")]
    InvalidUrl { value: String, message: String },

    /// Conflicting options
    #[error("conflicting options: {message}")]
    ConflictingOptions { message: String },
}

impl ManifestError {
    /// Creates a new NotFound error
    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        ManifestError::NotFound { path: path.into() }
    }

    /// Creates a new ReadError
    pub fn read_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ManifestError::ReadError {
            path: path.into(),
            source,
        }
    }

    /// Creates a new WriteError
    pub fn write_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ManifestError::WriteError {
            path: path.into(),
            source,
        }
    }

    /// Creates a new RewriteError
    pub fn rewrite_error(coordinate: impl Into<String>, message: impl Into<String>) -> Self {
        ManifestError::RewriteError {
            coordinate: coordinate.into(),
            message: message.into(),
        }
    }
}

impl RegistryError {
    /// Creates a new PackageNotFound error
    pub fn package_not_found(package: impl Into<String>, registry: impl Into<String>) -> Self {
        RegistryError::PackageNotFound {
            package: package.into(),
            registry: registry.into(),
        }
    }

    /// Creates a new NetworkError
    pub fn network_error(
        package: impl Into<String>,
        registry: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        RegistryError::NetworkError {
            package: package.into(),
            registry: registry.into(),
            message: message.into(),
        }
    }

    /// Creates a new InvalidResponse error
    pub fn invalid_response(
        package: impl Into<String>,
        registry: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        RegistryError::InvalidResponse {
            package: package.into(),
            registry: registry.into(),
            message: message.into(),
        }
    }

    /// Creates a new RateLimitExceeded error
    pub fn rate_limit_exceeded(registry: impl Into<String>) -> Self {
        RegistryError::RateLimitExceeded {
            registry: registry.into(),
        }
    }

    /// Creates a new Timeout error
    pub fn timeout(package: impl Into<String>, registry: impl Into<String>) -> Self {
        RegistryError::Timeout {
            package: package.into(),
            registry: registry.into(),
        }
    }

    /// Returns true if retrying the request might succeed
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            RegistryError::RateLimitExceeded { .. }
                | RegistryError::Timeout { .. }
                | RegistryError::NetworkError { .. }
        )
    }
}

impl VersionError {
    /// Creates a new Parse error
    pub fn parse(version: impl Into<String>, message: impl Into<String>) -> Self {
        VersionError::Parse {
            version: version.into(),
            message: message.into(),
        }
    }

    /// The string that failed to parse
    pub fn version(&self) -> &str {
        match self {
            VersionError::Parse { version, .. } => version,
        }
    }
}
