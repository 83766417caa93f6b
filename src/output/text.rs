//! Text output formatter for human-readable display
//!
//! This module provides:
//! - One line per checked dependency (`g:a old -> new`, `g:a old current`,
//!   `<reason> for g:a:old`)
//! - Semantic version change type indication (major/minor/patch)
//! - Skipped coordinates and answering repositories in verbose mode
//! - Summary with a breakdown by change type

use crate::domain::version::VersionString;
use crate::domain::{DependencyReport, UpdateSummary, UpdateVerdict};
use crate::orchestrator::OrchestratorResult;
use crate::output::{OutputFormatter, Verbosity};
use colored::Colorize;
use std::io::Write;

/// Semantic version change type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionChangeType {
    /// Major version change (breaking)
    Major,
    /// Minor version change (features)
    Minor,
    /// Patch or pre-release change
    Patch,
    /// Unknown or unparseable
    Unknown,
}

impl VersionChangeType {
    /// Determine the change type between two versions
    pub fn from_versions(old: &str, new: &str) -> Self {
        let old = VersionString::new(old).parse();
        let new = VersionString::new(new).parse();

        match (old, new) {
            (Ok(old), Ok(new)) => {
                if new.major != old.major {
                    VersionChangeType::Major
                } else if new.minor != old.minor {
                    VersionChangeType::Minor
                } else {
                    VersionChangeType::Patch
                }
            }
            _ => VersionChangeType::Unknown,
        }
    }

    /// Get the display label with color
    pub fn colored_label(&self) -> String {
        match self {
            VersionChangeType::Major => "major".red().bold().to_string(),
            VersionChangeType::Minor => "minor".yellow().to_string(),
            VersionChangeType::Patch => "patch".green().to_string(),
            VersionChangeType::Unknown => "?".dimmed().to_string(),
        }
    }

    /// Get the plain label
    pub fn label(&self) -> &'static str {
        match self {
            VersionChangeType::Major => "major",
            VersionChangeType::Minor => "minor",
            VersionChangeType::Patch => "patch",
            VersionChangeType::Unknown => "?",
        }
    }
}

/// Text formatter for human-readable output
pub struct TextFormatter {
    /// Verbosity level
    verbosity: Verbosity,
    /// Whether the build file is left untouched
    dry_run: bool,
    /// Whether to use colors
    color: bool,
}

impl TextFormatter {
    /// Create a new text formatter
    pub fn new(verbosity: Verbosity, dry_run: bool) -> Self {
        Self::with_color(verbosity, dry_run, true)
    }

    /// Create a new text formatter with color option
    pub fn with_color(verbosity: Verbosity, dry_run: bool, color: bool) -> Self {
        Self {
            verbosity,
            dry_run,
            color,
        }
    }

    /// Repository suffix shown in verbose mode, with the metadata date when known
    fn repository_suffix(&self, report: &DependencyReport) -> String {
        if self.verbosity != Verbosity::Verbose {
            return String::new();
        }
        let Some(repo) = report.resolution.repository.as_deref() else {
            return String::new();
        };
        let label = match report.resolution.last_updated {
            Some(ts) => format!("({}, updated {})", repo, ts.format("%Y-%m-%d")),
            None => format!("({})", repo),
        };
        if self.color {
            format!(" {}", label.dimmed())
        } else {
            format!(" {}", label)
        }
    }

    /// Format one report line
    fn format_report_line(
        &self,
        report: &DependencyReport,
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        let coord = report.coordinate();
        let key = coord.key();
        let old = coord.declared_version.as_str();
        let suffix = self.repository_suffix(report);

        match &report.verdict {
            UpdateVerdict::UpdateAvailable(new) => {
                let change_type = VersionChangeType::from_versions(old, new);
                if self.color {
                    writeln!(
                        writer,
                        "{} {} {} {} [{}]{}",
                        key.bold(),
                        old.dimmed(),
                        "->".dimmed(),
                        new.bright_white().bold(),
                        change_type.colored_label(),
                        suffix
                    )
                } else {
                    writeln!(
                        writer,
                        "{} {} -> {} [{}]{}",
                        key,
                        old,
                        new,
                        change_type.label(),
                        suffix
                    )
                }
            }
            UpdateVerdict::Current => {
                if self.color {
                    writeln!(writer, "{} {} {}{}", key, old.dimmed(), "current".green(), suffix)
                } else {
                    writeln!(writer, "{} {} current{}", key, old, suffix)
                }
            }
            UpdateVerdict::Unparseable(reason) => {
                if self.color {
                    writeln!(writer, "{} for {}", reason.red(), coord.declaration())
                } else {
                    writeln!(writer, "{} for {}", reason, coord.declaration())
                }
            }
        }
    }

    /// Count updates by change type
    fn count_by_change_type(&self, summary: &UpdateSummary) -> (usize, usize, usize, usize) {
        let mut major = 0;
        let mut minor = 0;
        let mut patch = 0;
        let mut unknown = 0;

        for report in summary.updates() {
            if let Some(new) = report.verdict.new_version() {
                match VersionChangeType::from_versions(&report.coordinate().declared_version, new)
                {
                    VersionChangeType::Major => major += 1,
                    VersionChangeType::Minor => minor += 1,
                    VersionChangeType::Patch => patch += 1,
                    VersionChangeType::Unknown => unknown += 1,
                }
            }
        }

        (major, minor, patch, unknown)
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, result: &OrchestratorResult, writer: &mut dyn Write) -> std::io::Result<()> {
        let summary = &result.summary;

        // In quiet mode, only show updates
        if self.verbosity == Verbosity::Quiet {
            for report in summary.updates() {
                self.format_report_line(report, writer)?;
            }
            return Ok(());
        }

        for report in &summary.reports {
            self.format_report_line(report, writer)?;
        }

        if self.verbosity == Verbosity::Verbose {
            for coordinate in &summary.skipped {
                if self.color {
                    writeln!(
                        writer,
                        "{} {}",
                        coordinate.declaration().dimmed(),
                        "skipped (group filter)".dimmed()
                    )?;
                } else {
                    writeln!(writer, "{} skipped (group filter)", coordinate.declaration())?;
                }
            }
        }

        // Format errors if any
        if !result.errors.is_empty() {
            writeln!(writer)?;
            if self.color {
                writeln!(writer, "{}:", "Errors".red().bold())?;
            } else {
                writeln!(writer, "Errors:")?;
            }
            for error in &result.errors {
                if self.color {
                    writeln!(writer, "  {} {}", "✗".red(), error)?;
                } else {
                    writeln!(writer, "  - {}", error)?;
                }
            }
        }

        writeln!(writer)?;
        self.format_summary(summary, writer)
    }

    fn format_summary(
        &self,
        summary: &UpdateSummary,
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        let updates = summary.total_updates();
        let (major, minor, patch, unknown) = self.count_by_change_type(summary);

        let mut breakdown = Vec::new();
        if major > 0 {
            breakdown.push(format!("{} major", major));
        }
        if minor > 0 {
            breakdown.push(format!("{} minor", minor));
        }
        if patch > 0 {
            breakdown.push(format!("{} patch", patch));
        }
        if unknown > 0 {
            breakdown.push(format!("{} other", unknown));
        }
        let breakdown = if breakdown.is_empty() {
            String::new()
        } else {
            format!(" ({})", breakdown.join(", "))
        };

        let counts = format!(
            "{} current, {} unparseable, {} skipped",
            summary.total_current(),
            summary.total_unparseable(),
            summary.skipped.len()
        );

        if self.color {
            writeln!(
                writer,
                "{} {} update(s){}, {}",
                "Summary:".bold(),
                updates.to_string().green(),
                breakdown,
                counts.dimmed()
            )?;
        } else {
            writeln!(writer, "Summary: {} update(s){}, {}", updates, breakdown, counts)?;
        }

        let path = summary.path.display();
        if !self.dry_run && summary.rewritten > 0 {
            writeln!(
                writer,
                "Rewrote {} declaration(s) in {}",
                summary.rewritten, path
            )?;
        } else if self.dry_run && updates > 0 {
            if self.color {
                writeln!(
                    writer,
                    "{}",
                    format!("Run with --update to rewrite {}", path).dimmed()
                )?;
            } else {
                writeln!(writer, "Run with --update to rewrite {}", path)?;
            }
        }

        Ok(())
    }
}
