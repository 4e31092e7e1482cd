//! Operator-facing run summary printed after a successful run.

use std::collections::BTreeMap;

use remote_habitat_county_models::CountyDataset;

/// Width of the estimated-speed distribution buckets, in Mbps.
const BUCKET_WIDTH: u32 = 50;

/// Prints dataset totals, the estimated-speed distribution, the ten most
/// common top providers, and the ten highest-scoring rural counties.
pub fn print_run_summary(dataset: &CountyDataset) {
    let rural_count = dataset.counties.iter().filter(|c| c.rural_status).count();

    println!("Total counties: {}", dataset.total_counties);
    println!("States: {}", dataset.total_states);
    println!("Rural counties: {rural_count}");

    let mut distribution: BTreeMap<u32, usize> = BTreeMap::new();
    for county in &dataset.counties {
        let bucket = county.estimated_speed / BUCKET_WIDTH * BUCKET_WIDTH;
        *distribution.entry(bucket).or_default() += 1;
    }
    println!();
    println!("Estimated speed distribution:");
    for (bucket, count) in &distribution {
        println!("   {}-{} Mbps: {count} counties", bucket, bucket + BUCKET_WIDTH - 1);
    }

    let mut provider_counts: BTreeMap<&str, usize> = BTreeMap::new();
    for county in &dataset.counties {
        *provider_counts
            .entry(county.top_provider.as_str())
            .or_default() += 1;
    }
    let mut ranked: Vec<(&str, usize)> = provider_counts.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    println!();
    println!("Top 10 providers:");
    for (rank, (name, count)) in ranked.iter().take(10).enumerate() {
        println!("   {}. {name}: {count} counties", rank + 1);
    }

    println!();
    println!("Top 10 rural counties for remote work:");
    let top_rural = dataset.counties.iter().filter(|c| c.rural_status).take(10);
    for (rank, county) in top_rural.enumerate() {
        println!(
            "   {}. {}, {} - score {}, estimated {} Mbps (max {}), provider: {}",
            rank + 1,
            county.county,
            county.state,
            county.remote_work_score,
            county.estimated_speed,
            county.max_available_speed,
            county.top_provider
        );
    }
}
