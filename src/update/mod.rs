//! Update resolution and planning
//!
//! This module provides:
//! - Group skip filter applied before resolution
//! - Version resolver with ordered repository fallback
//! - Update planner turning a resolution into a verdict

mod filter;
mod planner;
mod resolver;

pub use filter::{GroupFilter, DEFAULT_SKIP_GROUPS};
pub use planner::UpdatePlanner;
pub use resolver::{select_version, ResolvePolicy, VersionOrdering, VersionResolver};
