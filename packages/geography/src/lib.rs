#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! US state registry and URL slug helpers.
//!
//! State display names and cost-of-living indexes are keyed by two-digit
//! state FIPS code and loaded from an embedded TOML config
//! (`data/states.toml`), so table updates never touch lookup logic.
//! Territories without an entry are excluded from the dataset entirely,
//! which makes a failed FIPS lookup a filtering signal rather than an
//! error.

use std::collections::BTreeMap;

use serde::Deserialize;

/// State registry TOML embedded at compile time.
const STATES_TOML: &str = include_str!("../data/states.toml");

#[derive(Debug, Deserialize)]
struct StatesConfig {
    states: Vec<StateEntry>,
}

/// One state row from `data/states.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct StateEntry {
    /// Two-digit state FIPS code.
    pub fips: String,
    /// Full display name.
    pub name: String,
    /// Cost-of-living index (national average = 100).
    pub cost_of_living: u32,
}

/// Lookup table mapping state FIPS codes to display names and state names
/// to cost-of-living indexes.
#[derive(Debug)]
pub struct StateRegistry {
    by_fips: BTreeMap<String, StateEntry>,
    col_by_name: BTreeMap<String, u32>,
}

impl StateRegistry {
    /// Loads the registry from the embedded TOML config.
    ///
    /// # Panics
    ///
    /// Panics if the embedded config is malformed (this is a compile-time
    /// guarantee since the config is embedded).
    #[must_use]
    pub fn load() -> Self {
        let config: StatesConfig = toml::from_str(STATES_TOML)
            .unwrap_or_else(|e| panic!("Failed to parse states.toml: {e}"));

        let mut by_fips = BTreeMap::new();
        let mut col_by_name = BTreeMap::new();
        for state in config.states {
            col_by_name.insert(state.name.clone(), state.cost_of_living);
            by_fips.insert(state.fips.clone(), state);
        }

        Self {
            by_fips,
            col_by_name,
        }
    }

    /// Returns the display name for a two-digit state FIPS code, or `None`
    /// for codes the registry does not cover.
    #[must_use]
    pub fn state_name(&self, fips: &str) -> Option<&str> {
        self.by_fips.get(fips).map(|s| s.name.as_str())
    }

    /// Returns the cost-of-living index for a state display name,
    /// defaulting to the national average of 100 for unknown states.
    #[must_use]
    pub fn cost_of_living(&self, state_name: &str) -> u32 {
        self.col_by_name.get(state_name).copied().unwrap_or(100)
    }

    /// Number of states in the registry.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_fips.len()
    }

    /// Whether the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_fips.is_empty()
    }
}

/// Zero-pads a FIPS code to the canonical 5-character county width.
///
/// Codes already 5 characters or longer are returned unchanged.
#[must_use]
pub fn pad_fips(raw: &str) -> String {
    format!("{:0>5}", raw.trim())
}

/// Creates a URL-safe slug: lowercased, with runs of non-alphanumeric
/// characters collapsed to a single hyphen and no leading or trailing
/// hyphen.
#[must_use]
pub fn slug(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut pending_hyphen = false;
    for c in input.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_hyphen && !out.is_empty() {
                out.push('-');
            }
            pending_hyphen = false;
            out.push(c.to_ascii_lowercase());
        } else {
            pending_hyphen = true;
        }
    }
    out
}
