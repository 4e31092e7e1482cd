#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Library for converting FCC broadband CSV extracts into the county
//! dataset consumed by the website.
//!
//! The pipeline is a single-shot batch run with three sequential stages:
//! the rural-designation loader, the provider resolver, and the coverage
//! aggregator. Each stage owns its full file-read scope and returns an
//! owned accumulator that is handed to the next stage; nothing is shared
//! beyond those explicit hand-offs.

pub mod broadband;
pub mod dataset;
pub mod discovery;
pub mod rural;
pub mod score;
pub mod summary;

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur during a pipeline run.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Reading an input file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV parsing failed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Provider resolution failed.
    #[error(transparent)]
    Provider(#[from] remote_habitat_provider::ProviderError),

    /// The CSV input directory does not exist.
    #[error("CSV directory {} not found: create it and add the FCC extract files", path.display())]
    MissingCsvDir {
        /// The directory that was expected to exist.
        path: PathBuf,
    },

    /// One of the three required input files is absent.
    #[error("no {kind} file found in {}: expected a file named like '{example}'", dir.display())]
    MissingInput {
        /// Which input is missing.
        kind: &'static str,
        /// The directory that was scanned.
        dir: PathBuf,
        /// Example filename pattern for the operator.
        example: &'static str,
    },

    /// The broadband summary header is missing a required column.
    #[error("broadband summary is missing required column '{name}'")]
    MissingColumn {
        /// Name of the missing column.
        name: &'static str,
    },
}
