#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! CLI entry point for the county dataset pipeline.

use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;
use remote_habitat_geography::StateRegistry;
use remote_habitat_ingest::{broadband, dataset, discovery, rural, summary};
use remote_habitat_provider::registry::ProviderRegistry;
use remote_habitat_provider::resolve::resolve_top_providers;

#[derive(Parser)]
#[command(
    name = "remote_habitat_ingest",
    about = "Converts FCC broadband CSV extracts into the county dataset"
)]
struct Cli {
    /// Directory containing the FCC CSV extracts
    #[arg(long, default_value = "csv_files")]
    csv_dir: PathBuf,
    /// Output path for the generated dataset
    #[arg(long, default_value = "data/counties.json")]
    output: PathBuf,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init();
    let cli = Cli::parse();

    let start = Instant::now();

    let inputs = discovery::find_csv_inputs(&cli.csv_dir)?;
    log::info!("Found CSV files:");
    log::info!("   Broadband: {}", inputs.broadband.display());
    log::info!("   Provider: {}", inputs.provider.display());
    log::info!("   Rural: {}", inputs.rural.display());

    let states = StateRegistry::load();
    let provider_registry = ProviderRegistry::load();

    let rural = rural::load_rural_counties(&inputs.rural)?;
    let providers = resolve_top_providers(&inputs.provider, &provider_registry)?;
    let counties = broadband::load_broadband_data(&inputs.broadband, &rural, &providers, &states)?;

    let dataset = dataset::build_dataset(counties);
    dataset::write_dataset(&cli.output, &dataset)?;

    let elapsed = start.elapsed();
    log::info!(
        "Wrote {} counties across {} states to {} in {:.1}s",
        dataset.total_counties,
        dataset.total_states,
        cli.output.display(),
        elapsed.as_secs_f64()
    );

    summary::print_run_summary(&dataset);

    Ok(())
}
