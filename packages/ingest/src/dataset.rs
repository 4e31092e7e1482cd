//! Dataset assembly and serialization.

use std::collections::BTreeSet;
use std::path::Path;

use remote_habitat_county_models::{CountyDataset, CountyRecord};

use crate::IngestError;

/// Builds the dataset envelope from the aggregated county records.
///
/// Counties are sorted descending by remote-work score; the sort is
/// stable, so equal scores keep their file order. The state list is the
/// sorted, unique set of state display names.
#[must_use]
pub fn build_dataset(mut counties: Vec<CountyRecord>) -> CountyDataset {
    counties.sort_by(|a, b| b.remote_work_score.cmp(&a.remote_work_score));

    let states: Vec<String> = counties
        .iter()
        .map(|c| c.state.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();

    CountyDataset {
        generated_at: chrono::Utc::now().to_rfc3339(),
        total_counties: counties.len(),
        total_states: states.len(),
        states,
        counties,
    }
}

/// Writes the dataset as pretty-printed JSON, creating the parent
/// directory if needed.
///
/// # Errors
///
/// Fails if the parent directory cannot be created or the file cannot be
/// written.
pub fn write_dataset(path: &Path, dataset: &CountyDataset) -> Result<(), IngestError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let contents = serde_json::to_string_pretty(dataset)?;
    std::fs::write(path, contents)?;
    Ok(())
}
