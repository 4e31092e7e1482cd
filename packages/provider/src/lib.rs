#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! FCC provider registry and per-county top-provider resolution.
//!
//! The FCC provider summary lists every operator's residential coverage
//! per county. This crate picks the single "top provider" per county,
//! preferring terrestrial operators over long-range satellite ones, and
//! maps FCC provider IDs to display names through a curated registry.

pub mod registry;
pub mod resolve;

use thiserror::Error;

/// Errors that can occur while resolving providers.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// Reading the provider summary file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV parsing failed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// The provider summary header is missing a required column.
    #[error("provider summary is missing required column '{name}'")]
    MissingColumn {
        /// Name of the missing column.
        name: &'static str,
    },
}

/// The winning provider for a county.
///
/// At most one record is retained per county during resolution; the
/// winner is replaced in place as better candidates are seen.
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderRecord {
    /// FCC provider ID.
    pub id: String,
    /// Display name (registry lookup, or the `Local ISP #<id>` fallback).
    pub name: String,
    /// Residential coverage as a 0-1 fraction of households.
    pub coverage: f64,
}
