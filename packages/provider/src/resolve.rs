//! Per-county top-provider resolution from the FCC provider summary.
//!
//! Each county keeps a single winning record. Terrestrial providers
//! always beat satellite ones regardless of coverage; within the same
//! classification only strictly greater coverage replaces the incumbent,
//! so equal-coverage rows keep whichever came first in the file.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use remote_habitat_geography::pad_fips;

use crate::registry::ProviderRegistry;
use crate::{ProviderError, ProviderRecord};

/// Column indexes for the provider summary, resolved once from the
/// header row.
#[derive(Debug, Clone, Copy)]
struct ProviderColumns {
    geography_type: usize,
    geography_id: usize,
    provider_id: usize,
    res_st_pct: usize,
}

impl ProviderColumns {
    fn from_headers(headers: &csv::StringRecord) -> Result<Self, ProviderError> {
        Ok(Self {
            geography_type: find_column(headers, "geography_type")?,
            geography_id: find_column(headers, "geography_id")?,
            provider_id: find_column(headers, "provider_id")?,
            res_st_pct: find_column(headers, "res_st_pct")?,
        })
    }
}

fn find_column(
    headers: &csv::StringRecord,
    name: &'static str,
) -> Result<usize, ProviderError> {
    headers
        .iter()
        .position(|h| h.trim() == name)
        .ok_or(ProviderError::MissingColumn { name })
}

/// Resolves the winning provider for every county in the provider
/// summary file.
///
/// Only rows with a `geography_type` of `County` are considered. A
/// coverage field that fails to parse as a number counts as 0.
///
/// # Errors
///
/// Fails if the file cannot be read, is not valid CSV, or its header
/// lacks a required column.
pub fn resolve_top_providers(
    path: &Path,
    registry: &ProviderRegistry,
) -> Result<BTreeMap<String, ProviderRecord>, ProviderError> {
    let file = File::open(path)?;
    let providers = resolve_from_reader(file, registry)?;
    log::info!("Resolved top providers for {} counties", providers.len());
    Ok(providers)
}

/// Reader-based resolution, split out so tests can feed CSV text
/// directly.
fn resolve_from_reader<R: Read>(
    reader: R,
    registry: &ProviderRegistry,
) -> Result<BTreeMap<String, ProviderRecord>, ProviderError> {
    let mut rdr = csv::ReaderBuilder::new().flexible(true).from_reader(reader);
    let columns = ProviderColumns::from_headers(rdr.headers()?)?;

    let mut providers: BTreeMap<String, ProviderRecord> = BTreeMap::new();

    for result in rdr.records() {
        let record = result?;

        if record.get(columns.geography_type).unwrap_or("").trim() != "County" {
            continue;
        }

        let fips = pad_fips(record.get(columns.geography_id).unwrap_or(""));
        let id = record.get(columns.provider_id).unwrap_or("").trim().to_owned();
        let coverage = record
            .get(columns.res_st_pct)
            .unwrap_or("")
            .trim()
            .parse::<f64>()
            .unwrap_or(0.0);

        let challenger = ProviderRecord {
            name: registry.display_name(&id),
            coverage,
            id,
        };
        consider(&mut providers, fips, challenger, registry);
    }

    Ok(providers)
}

/// Applies the winner-selection rule for one row.
fn consider(
    providers: &mut BTreeMap<String, ProviderRecord>,
    fips: String,
    challenger: ProviderRecord,
    registry: &ProviderRegistry,
) {
    let Some(incumbent) = providers.get(&fips) else {
        providers.insert(fips, challenger);
        return;
    };

    let incumbent_satellite = registry.is_satellite(&incumbent.id);
    let challenger_satellite = registry.is_satellite(&challenger.id);

    let wins = if incumbent_satellite && !challenger_satellite {
        // Terrestrial always replaces satellite.
        true
    } else if !incumbent_satellite && challenger_satellite {
        // Never downgrade terrestrial to satellite.
        false
    } else {
        // Same classification: strictly greater coverage required, so
        // ties keep the incumbent.
        challenger.coverage > incumbent.coverage
    };

    if wins {
        providers.insert(fips, challenger);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolve(csv: &str) -> BTreeMap<String, ProviderRecord> {
        let registry = ProviderRegistry::load();
        resolve_from_reader(csv.as_bytes(), &registry).unwrap()
    }

    const HEADER: &str = "geography_type,geography_id,provider_id,res_st_pct\n";

    #[test]
    fn terrestrial_beats_satellite_regardless_of_coverage() {
        // 130627 is Hughes (satellite) at 95% coverage; 999999 is an
        // unknown terrestrial operator at 40%.
        let csv = format!(
            "{HEADER}County,08031,130627,0.95\nCounty,08031,999999,0.40\n"
        );
        let providers = resolve(&csv);
        let winner = &providers["08031"];
        assert_eq!(winner.name, "Local ISP #999999");
        assert_eq!(winner.id, "999999");
        assert!((winner.coverage - 0.40).abs() < f64::EPSILON);
    }

    #[test]
    fn satellite_never_replaces_terrestrial() {
        let csv = format!(
            "{HEADER}County,08031,999999,0.40\nCounty,08031,130627,0.95\n"
        );
        let providers = resolve(&csv);
        assert_eq!(providers["08031"].id, "999999");
    }

    #[test]
    fn higher_coverage_wins_within_classification() {
        let csv = format!(
            "{HEADER}County,30033,111111,0.30\nCounty,30033,222222,0.60\n"
        );
        let providers = resolve(&csv);
        assert_eq!(providers["30033"].id, "222222");
    }

    #[test]
    fn equal_coverage_keeps_first_seen() {
        // The rule only replaces on strictly greater coverage, so a tie
        // keeps the incumbent. Reordering equal rows flips the winner;
        // this order dependence is intentional.
        let forward = format!(
            "{HEADER}County,30033,111111,0.50\nCounty,30033,222222,0.50\n"
        );
        let reversed = format!(
            "{HEADER}County,30033,222222,0.50\nCounty,30033,111111,0.50\n"
        );
        assert_eq!(resolve(&forward)["30033"].id, "111111");
        assert_eq!(resolve(&reversed)["30033"].id, "222222");
    }

    #[test]
    fn unequal_rows_resolve_order_independently() {
        let forward = format!(
            "{HEADER}County,30033,111111,0.30\nCounty,30033,130627,0.99\nCounty,30033,222222,0.60\n"
        );
        let reversed = format!(
            "{HEADER}County,30033,222222,0.60\nCounty,30033,130627,0.99\nCounty,30033,111111,0.30\n"
        );
        assert_eq!(resolve(&forward)["30033"].id, "222222");
        assert_eq!(resolve(&reversed)["30033"].id, "222222");
    }

    #[test]
    fn non_county_rows_discarded() {
        let csv = format!(
            "{HEADER}State,08,130747,0.90\nCensus Place,0803100,130747,0.90\n"
        );
        assert!(resolve(&csv).is_empty());
    }

    #[test]
    fn unparseable_coverage_counts_as_zero() {
        let csv = format!(
            "{HEADER}County,08031,111111,n/a\nCounty,08031,222222,0.01\n"
        );
        assert_eq!(resolve(&csv)["08031"].id, "222222");
    }

    #[test]
    fn fips_is_zero_padded() {
        let csv = format!("{HEADER}County,8031,130747,0.90\n");
        let providers = resolve(&csv);
        assert!(providers.contains_key("08031"));
    }

    #[test]
    fn known_ids_resolve_to_display_names() {
        let csv = format!("{HEADER}County,08031,130747,0.90\n");
        assert_eq!(resolve(&csv)["08031"].name, "Comcast");
    }

    #[test]
    fn missing_column_is_fatal() {
        let registry = ProviderRegistry::load();
        let csv = "geography_type,geography_id,provider_id\nCounty,08031,130747\n";
        let err = resolve_from_reader(csv.as_bytes(), &registry).unwrap_err();
        assert!(matches!(
            err,
            ProviderError::MissingColumn { name: "res_st_pct" }
        ));
    }
}
