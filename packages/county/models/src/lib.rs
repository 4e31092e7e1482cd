#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! County broadband dataset types and speed rating definitions.
//!
//! This crate defines the persisted data model shared across the pipeline:
//! the per-county record produced by the ingest tool, the dataset envelope
//! consumed by the website, and the unnamed-provider research worklist
//! emitted by the discover tool. All types serialize to the camelCase JSON
//! schema the site reads.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// Qualitative rating for a county's estimated broadband speed.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
pub enum SpeedRating {
    /// 250 Mbps and up.
    Excellent,
    /// 100-249 Mbps.
    Good,
    /// 50-99 Mbps.
    Moderate,
    /// 25-49 Mbps (the FCC minimum broadband definition).
    Basic,
    /// Below 25 Mbps.
    Poor,
}

impl SpeedRating {
    /// Rates an estimated speed in Mbps.
    ///
    /// Boundaries are closed above: exactly 250 rates `Excellent`,
    /// exactly 249 rates `Good`, and so on down the ladder.
    #[must_use]
    pub const fn from_estimated_speed(mbps: u32) -> Self {
        if mbps >= 250 {
            Self::Excellent
        } else if mbps >= 100 {
            Self::Good
        } else if mbps >= 50 {
            Self::Moderate
        } else if mbps >= 25 {
            Self::Basic
        } else {
            Self::Poor
        }
    }

    /// Returns all variants of this enum.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Excellent,
            Self::Good,
            Self::Moderate,
            Self::Basic,
            Self::Poor,
        ]
    }
}

/// Household coverage percentages (0-100) for the five FCC speed tiers.
///
/// Each tier counts households with access to *at least* that speed, so
/// the percentages are monotonically non-increasing from 10/1 to
/// 1000/100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverageStats {
    /// 10/1 Mbps tier.
    #[serde(rename = "speed10_1")]
    pub speed_10_1: u8,
    /// 25/3 Mbps tier.
    #[serde(rename = "speed25_3")]
    pub speed_25_3: u8,
    /// 100/20 Mbps tier.
    #[serde(rename = "speed100_20")]
    pub speed_100_20: u8,
    /// 250/25 Mbps tier.
    #[serde(rename = "speed250_25")]
    pub speed_250_25: u8,
    /// 1000/100 Mbps tier.
    #[serde(rename = "speed1000_100")]
    pub speed_1000_100: u8,
}

/// One county in the generated dataset.
///
/// Built in a single pass by the ingest pipeline and never mutated
/// afterward. Exactly one record exists per FIPS code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountyRecord {
    /// 5-character zero-padded county FIPS code (unique key).
    pub fips: String,
    /// State display name.
    pub state: String,
    /// URL-safe state identifier.
    pub state_slug: String,
    /// County display name, without the `" County"` suffix.
    pub county: String,
    /// URL-safe county identifier.
    pub county_slug: String,
    /// Household-weighted typical ceiling speed in Mbps (multiple of 5).
    pub max_available_speed: u32,
    /// Realistic subscription estimate: 65% of the maximum, rounded.
    pub estimated_speed: u32,
    /// Resolved provider display name, or the `"Local ISP"` fallback.
    pub top_provider: String,
    /// Whether the county is on the CFPB rural/underserved list.
    pub rural_status: bool,
    /// State cost-of-living index (national average = 100).
    pub cost_of_living_index: u32,
    /// Qualitative rating derived from the estimated speed.
    pub speed_rating: SpeedRating,
    /// Composite remote-work score in 0-100.
    pub remote_work_score: u32,
    /// Per-tier household coverage percentages.
    pub coverage: CoverageStats,
}

/// The dataset envelope written to `counties.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountyDataset {
    /// RFC 3339 timestamp of the generating run.
    pub generated_at: String,
    /// Number of county records.
    pub total_counties: usize,
    /// Number of distinct states.
    pub total_states: usize,
    /// Sorted, unique state display names.
    pub states: Vec<String>,
    /// Counties sorted descending by remote-work score.
    pub counties: Vec<CountyRecord>,
}

/// One unresolved provider ID in the research worklist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnnamedProviderEntry {
    /// FCC provider ID extracted from the fallback label.
    pub id: String,
    /// Number of counties where this ID is the top provider.
    pub frequency: usize,
    /// Sorted distinct state names touched by this ID.
    pub states: Vec<String>,
    /// Up to five example `"County, State"` strings.
    pub sample_counties: Vec<String>,
}

/// The research worklist written to `unnamed-providers.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnnamedProviderReport {
    /// RFC 3339 timestamp of the generating run.
    pub generated_at: String,
    /// Number of distinct unresolved provider IDs.
    pub total_unnamed: usize,
    /// Entries sorted descending by frequency.
    pub providers: Vec<UnnamedProviderEntry>,
}
