//! Coverage aggregation and county record assembly.
//!
//! Streams the FCC fixed broadband summary, keeps the wired-aggregate
//! row per county (first seen wins on duplicates), and joins rural
//! status, the resolved top provider, and the state cost-of-living index
//! into the final records.

use std::collections::{BTreeMap, BTreeSet};
use std::fs::File;
use std::io::Read;
use std::path::Path;

use remote_habitat_county_models::{CountyRecord, CoverageStats, SpeedRating};
use remote_habitat_geography::{StateRegistry, pad_fips, slug};
use remote_habitat_provider::ProviderRecord;

use crate::IngestError;
use crate::score::{estimated_speed, max_available_speed, remote_work_score};

/// Expected broadband summary columns, used for the header diagnostic.
const EXPECTED_COLUMNS: &[&str] = &[
    "area_data_type",
    "geography_type",
    "geography_id",
    "geography_desc",
    "geography_name",
    "tech_type",
    "speed_10_1",
    "speed_25_3",
    "speed_100_20",
    "speed_250_25",
    "speed_1000_100",
];

/// Column indexes for the broadband summary, resolved once from the
/// header row.
#[derive(Debug, Clone, Copy)]
struct BroadbandColumns {
    area_data_type: usize,
    geography_type: usize,
    geography_id: usize,
    geography_desc: Option<usize>,
    geography_name: Option<usize>,
    tech_type: usize,
    speed_10_1: usize,
    speed_25_3: usize,
    speed_100_20: usize,
    speed_250_25: usize,
    speed_1000_100: usize,
}

impl BroadbandColumns {
    fn from_headers(headers: &csv::StringRecord) -> Result<Self, IngestError> {
        let columns = Self {
            area_data_type: require_column(headers, "area_data_type")?,
            geography_type: require_column(headers, "geography_type")?,
            geography_id: require_column(headers, "geography_id")?,
            geography_desc: find_column(headers, "geography_desc"),
            geography_name: find_column(headers, "geography_name"),
            tech_type: require_column(headers, "tech_type")?,
            speed_10_1: require_column(headers, "speed_10_1")?,
            speed_25_3: require_column(headers, "speed_25_3")?,
            speed_100_20: require_column(headers, "speed_100_20")?,
            speed_250_25: require_column(headers, "speed_250_25")?,
            speed_1000_100: require_column(headers, "speed_1000_100")?,
        };

        // Either description column satisfies the county-name requirement.
        if columns.geography_desc.is_none() && columns.geography_name.is_none() {
            return Err(IngestError::MissingColumn {
                name: "geography_desc",
            });
        }

        let found: Vec<&str> = EXPECTED_COLUMNS
            .iter()
            .copied()
            .filter(|name| find_column(headers, name).is_some())
            .collect();
        log::info!("Broadband columns found: {}", found.join(", "));

        Ok(columns)
    }
}

fn find_column(headers: &csv::StringRecord, name: &str) -> Option<usize> {
    headers.iter().position(|h| h.trim() == name)
}

fn require_column(
    headers: &csv::StringRecord,
    name: &'static str,
) -> Result<usize, IngestError> {
    find_column(headers, name).ok_or(IngestError::MissingColumn { name })
}

/// Builds the county records from the broadband summary file.
///
/// Only rows with `geography_type == "County"`, `area_data_type ==
/// "Total"`, and an empty or `"All Wired"` `tech_type` are considered;
/// this selects the wired-aggregate row per county. Rows whose state
/// FIPS is not in the registry or whose derived county name is empty are
/// dropped. Records come back in file order.
///
/// # Errors
///
/// Fails if the file cannot be read, is not valid CSV, or its header
/// lacks a required column.
pub fn load_broadband_data(
    path: &Path,
    rural: &BTreeSet<String>,
    providers: &BTreeMap<String, ProviderRecord>,
    states: &StateRegistry,
) -> Result<Vec<CountyRecord>, IngestError> {
    let file = File::open(path)?;
    let counties = load_from_reader(file, rural, providers, states)?;
    log::info!(
        "Processed {} unique counties from broadband data",
        counties.len()
    );
    Ok(counties)
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn load_from_reader<R: Read>(
    reader: R,
    rural: &BTreeSet<String>,
    providers: &BTreeMap<String, ProviderRecord>,
    states: &StateRegistry,
) -> Result<Vec<CountyRecord>, IngestError> {
    let mut rdr = csv::ReaderBuilder::new().flexible(true).from_reader(reader);
    let columns = BroadbandColumns::from_headers(rdr.headers()?)?;

    let mut counties: Vec<CountyRecord> = Vec::new();
    let mut seen: BTreeSet<String> = BTreeSet::new();

    for result in rdr.records() {
        let record = result?;
        let field = |idx: usize| record.get(idx).unwrap_or("").trim();

        if field(columns.geography_type) != "County" {
            continue;
        }
        if field(columns.area_data_type) != "Total" {
            continue;
        }

        // Per-technology breakdowns are skipped; only the wired
        // aggregate (or an unlabeled total) counts.
        let tech_type = field(columns.tech_type);
        if !tech_type.is_empty() && tech_type != "All Wired" {
            continue;
        }

        let fips = pad_fips(field(columns.geography_id));
        let Some(state_fips) = fips.get(..2) else {
            continue;
        };
        let Some(state_name) = states.state_name(state_fips) else {
            continue;
        };

        let fraction = |idx: usize| field(idx).parse::<f64>().unwrap_or(0.0);
        let s10 = fraction(columns.speed_10_1);
        let s25 = fraction(columns.speed_25_3);
        let s100 = fraction(columns.speed_100_20);
        let s250 = fraction(columns.speed_250_25);
        let s1000 = fraction(columns.speed_1000_100);

        let max_speed = max_available_speed(s10, s25, s100, s250, s1000);
        let est_speed = estimated_speed(max_speed);

        let raw_name = columns
            .geography_desc
            .map(|idx| field(idx))
            .filter(|s| !s.is_empty())
            .or_else(|| columns.geography_name.map(|idx| field(idx)))
            .unwrap_or("");
        let county = county_name(raw_name);
        if county.is_empty() {
            continue;
        }

        if seen.contains(&fips) {
            continue;
        }
        seen.insert(fips.clone());

        let top_provider = providers
            .get(&fips)
            .map_or_else(|| "Local ISP".to_owned(), |p| p.name.clone());
        let rural_status = rural.contains(&fips);
        let cost_of_living_index = states.cost_of_living(state_name);

        let percent = |value: f64| (value * 100.0).round() as u8;

        counties.push(CountyRecord {
            state: state_name.to_owned(),
            state_slug: slug(state_name),
            county: county.to_owned(),
            county_slug: slug(county),
            fips,
            max_available_speed: max_speed,
            estimated_speed: est_speed,
            top_provider,
            rural_status,
            cost_of_living_index,
            speed_rating: SpeedRating::from_estimated_speed(est_speed),
            remote_work_score: remote_work_score(est_speed, cost_of_living_index, rural_status),
            coverage: CoverageStats {
                speed_10_1: percent(s10),
                speed_25_3: percent(s25),
                speed_100_20: percent(s100),
                speed_250_25: percent(s250),
                speed_1000_100: percent(s1000),
            },
        });
    }

    Ok(counties)
}

/// Extracts the display name from a geography description formatted as
/// `"<Name> County, <ST>"`: everything from the first comma onward is
/// dropped and the `" County"` suffix removed.
fn county_name(raw: &str) -> &str {
    let name = raw.find(',').map_or(raw, |idx| &raw[..idx]);
    let name = name.trim();
    name.strip_suffix(" County").unwrap_or(name).trim()
}
