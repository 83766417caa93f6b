//! Core domain models for mvn-update
//!
//! This module contains the fundamental types used throughout the application:
//! - Dependency coordinates extracted from build files
//! - Version classification and semantic-version comparison
//! - Resolution results and update verdicts
//! - Run summary

mod coordinate;
mod summary;
mod update_result;
pub mod version;

pub use coordinate::DependencyCoordinate;
pub use summary::UpdateSummary;
pub use update_result::{DependencyReport, ResolutionResult, UpdateVerdict, NO_VERSION_FOUND};
pub use version::{VersionClassification, VersionString};
