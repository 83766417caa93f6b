//! CLI argument parsing module for mvn-update

use crate::registry::DEFAULT_TIMEOUT;
use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// Parse a timeout in whole seconds, rejecting zero
fn parse_timeout(s: &str) -> Result<u64, String> {
    let secs: u64 = s
        .trim()
        .parse()
        .map_err(|_| format!("invalid number of seconds: {}", s))?;
    if secs == 0 {
        return Err("timeout must be at least 1 second".to_string());
    }
    Ok(secs)
}

/// Maven/Gradle dependency version checker
#[derive(Parser, Debug, Clone)]
#[command(
    name = "mvn-update",
    version,
    about = "Check Gradle dependencies against Maven repositories"
)]
pub struct CliArgs {
    /// Gradle build file to check
    #[arg(default_value = "build.gradle")]
    pub file: PathBuf,

    // General options
    /// Rewrite the build file with the versions found
    #[arg(short, long)]
    pub update: bool,

    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,

    /// Enable quiet mode - only updates are printed
    #[arg(short, long)]
    pub quiet: bool,

    // Selection policy
    /// Allow pre-release versions (alpha, beta, rc, ...)
    #[arg(short, long)]
    pub prerelease: bool,

    /// Order versions by semver precedence instead of trusting repository order
    #[arg(long)]
    pub semantic_order: bool,

    /// Skip groups containing this pattern (can be specified multiple times;
    /// replaces the default Android patterns)
    #[arg(long = "skip-group", value_name = "PATTERN", action = ArgAction::Append)]
    pub skip_groups: Vec<String>,

    // Repositories
    /// Base URL of the primary maven repository
    #[arg(long, value_name = "URL")]
    pub primary_url: Option<String>,

    /// Base URL of the fallback maven repository
    #[arg(long, value_name = "URL")]
    pub secondary_url: Option<String>,

    /// Use a Nexus resolve API as primary (`--nexus=URL`; defaults to Sonatype OSS)
    #[arg(
        long,
        value_name = "URL",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = crate::registry::OSS_NEXUS_URL
    )]
    pub nexus: Option<String>,

    /// Per-request timeout in seconds
    #[arg(long, value_name = "SECS", default_value_t = DEFAULT_TIMEOUT.as_secs(), value_parser = parse_timeout)]
    pub timeout: u64,

    // Output options
    /// Output results in JSON format
    #[arg(long)]
    pub json: bool,
}

impl CliArgs {
    /// Check if this run only reports
    pub fn is_dry_run(&self) -> bool {
        !self.update
    }
}
