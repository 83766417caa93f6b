//! mvn-update - Maven dependency version checker library
//!
//! This library provides the core functionality for keeping Gradle
//! dependency declarations up to date:
//! - Version classification and comparison with two-component padding
//! - Repository adapters (`maven-metadata.xml`, Nexus resolve API)
//! - Latest-version resolution with ordered repository fallback
//! - Update verdicts and build file rewriting

pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod manifest;
pub mod orchestrator;
pub mod output;
pub mod progress;
pub mod registry;
pub mod update;
