#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! CLI tool that surfaces unresolved provider IDs in the county dataset.
//!
//! Counties whose top provider could not be mapped to a display name
//! carry a `Local ISP #<id>` fallback label. This tool groups those
//! fallbacks by provider ID and emits a research worklist with enough
//! geographic context to identify the operator, sorted by how many
//! counties each ID touches. It never modifies the dataset; resolved IDs
//! are added to the provider registry by hand.

use std::collections::{BTreeMap, BTreeSet};
use std::path::PathBuf;

use clap::Parser;
use regex::Regex;
use remote_habitat_county_models::{CountyDataset, UnnamedProviderEntry, UnnamedProviderReport};

/// Maximum number of sample counties kept per provider ID.
const SAMPLE_LIMIT: usize = 5;

/// Number of entries shown in the console table.
const TABLE_LIMIT: usize = 30;

#[derive(Parser)]
#[command(
    name = "remote_habitat_discover",
    about = "Surfaces unresolved provider IDs in the county dataset"
)]
struct Cli {
    /// Path to the generated county dataset
    #[arg(long, default_value = "data/counties.json")]
    dataset: PathBuf,
    /// Output path for the research worklist
    #[arg(long, default_value = "data/unnamed-providers.json")]
    output: PathBuf,
}

/// Accumulated context for one unresolved provider ID.
struct UnnamedProvider {
    id: String,
    counties: Vec<(String, String)>,
    states: BTreeSet<String>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init();
    let cli = Cli::parse();

    if !cli.dataset.is_file() {
        return Err(format!(
            "{} not found: run the ingest pipeline first",
            cli.dataset.display()
        )
        .into());
    }

    log::info!("Reading {}", cli.dataset.display());
    let contents = std::fs::read_to_string(&cli.dataset)?;
    let data: CountyDataset = serde_json::from_str(&contents)?;

    let report = build_report(&data)?;
    log::info!("Found {} unnamed providers", report.total_unnamed);

    if let Some(parent) = cli.output.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&cli.output, serde_json::to_string_pretty(&report)?)?;

    print_table(&report);
    println!();
    println!("Full list saved to {}", cli.output.display());
    println!("   Use these IDs to search: \"FCC provider ID <id>\" or \"<County>, <State> ISP\"");

    Ok(())
}

/// Groups fallback provider labels by ID, ordered by descending county
/// count; ties keep first-encountered order.
fn build_report(data: &CountyDataset) -> Result<UnnamedProviderReport, regex::Error> {
    let pattern = Regex::new(r"^Local ISP #(\d+)$")?;

    let mut index: BTreeMap<String, usize> = BTreeMap::new();
    let mut providers: Vec<UnnamedProvider> = Vec::new();

    for county in &data.counties {
        let Some(captures) = pattern.captures(&county.top_provider) else {
            continue;
        };
        let id = captures[1].to_owned();

        let slot = *index.entry(id.clone()).or_insert_with(|| {
            providers.push(UnnamedProvider {
                id,
                counties: Vec::new(),
                states: BTreeSet::new(),
            });
            providers.len() - 1
        });
        providers[slot]
            .counties
            .push((county.county.clone(), county.state.clone()));
        providers[slot].states.insert(county.state.clone());
    }

    providers.sort_by(|a, b| b.counties.len().cmp(&a.counties.len()));

    let entries: Vec<UnnamedProviderEntry> = providers
        .iter()
        .map(|p| UnnamedProviderEntry {
            id: p.id.clone(),
            frequency: p.counties.len(),
            states: p.states.iter().cloned().collect(),
            sample_counties: p
                .counties
                .iter()
                .take(SAMPLE_LIMIT)
                .map(|(county, state)| format!("{county}, {state}"))
                .collect(),
        })
        .collect();

    Ok(UnnamedProviderReport {
        generated_at: chrono::Utc::now().to_rfc3339(),
        total_unnamed: entries.len(),
        providers: entries,
    })
}

fn print_table(report: &UnnamedProviderReport) {
    println!("Top {TABLE_LIMIT} unnamed providers (by frequency):");
    println!("{}", "-".repeat(80));

    for (rank, provider) in report.providers.iter().take(TABLE_LIMIT).enumerate() {
        let states = provider.states.join(", ");
        let states = &states[..states.len().min(40)];
        println!(
            "{:>2}. ID: {:<7} | {:>3} counties | States: {states}",
            rank + 1,
            provider.id,
            provider.frequency
        );
        if let Some(sample) = provider.sample_counties.first() {
            println!("    Sample: {sample}");
        }
    }
}
