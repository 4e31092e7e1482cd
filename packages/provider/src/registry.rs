//! Provider registry — loads the curated FCC provider ID lookup table
//! from an embedded TOML config.
//!
//! The table in `data/providers.toml` maps FCC provider IDs to display
//! names and flags the long-range satellite operators. It is appended
//! periodically as the discover tool surfaces unresolved IDs; IDs not in
//! the table get a `Local ISP #<id>` fallback label.

use std::collections::{BTreeMap, BTreeSet};

use serde::Deserialize;

/// Provider registry TOML embedded at compile time.
const PROVIDERS_TOML: &str = include_str!("../data/providers.toml");

#[derive(Debug, Deserialize)]
struct ProvidersConfig {
    satellite: Vec<String>,
    names: BTreeMap<String, String>,
}

/// Curated FCC provider ID lookup table with the satellite operator set.
#[derive(Debug)]
pub struct ProviderRegistry {
    names: BTreeMap<String, String>,
    satellite: BTreeSet<String>,
}

impl ProviderRegistry {
    /// Loads the registry from the embedded TOML config.
    ///
    /// # Panics
    ///
    /// Panics if the embedded config is malformed (this is a compile-time
    /// guarantee since the config is embedded).
    #[must_use]
    pub fn load() -> Self {
        let config: ProvidersConfig = toml::from_str(PROVIDERS_TOML)
            .unwrap_or_else(|e| panic!("Failed to parse providers.toml: {e}"));

        Self {
            names: config.names,
            satellite: config.satellite.into_iter().collect(),
        }
    }

    /// Returns the display name for a provider ID, falling back to
    /// `Local ISP #<id>` for IDs not in the table.
    #[must_use]
    pub fn display_name(&self, id: &str) -> String {
        self.names
            .get(id)
            .cloned()
            .unwrap_or_else(|| format!("Local ISP #{id}"))
    }

    /// Whether this provider ID is a long-range satellite operator.
    #[must_use]
    pub fn is_satellite(&self, id: &str) -> bool {
        self.satellite.contains(id)
    }

    /// Number of curated name mappings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether the registry has no name mappings.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
