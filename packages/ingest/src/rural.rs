//! Rural-designation loader.
//!
//! The CFPB rural/underserved list carries the county FIPS code in its
//! first column; every other column is ignored and column names are not
//! validated.

use std::collections::BTreeSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use remote_habitat_geography::pad_fips;

use crate::IngestError;

/// Loads the rural county membership set.
///
/// The first line is treated as a header and skipped. Each remaining
/// line contributes its first field, zero-padded to 5 characters; blank
/// first fields are skipped.
///
/// # Errors
///
/// Fails if the file cannot be read or is not valid CSV.
pub fn load_rural_counties(path: &Path) -> Result<BTreeSet<String>, IngestError> {
    let file = File::open(path)?;
    let rural = load_from_reader(file)?;
    log::info!("Loaded {} rural counties from CFPB list", rural.len());
    Ok(rural)
}

fn load_from_reader<R: Read>(reader: R) -> Result<BTreeSet<String>, IngestError> {
    let mut rdr = csv::ReaderBuilder::new().flexible(true).from_reader(reader);

    let mut rural = BTreeSet::new();
    for result in rdr.records() {
        let record = result?;
        let first = record.get(0).unwrap_or("").trim();
        if first.is_empty() {
            continue;
        }
        rural.insert(pad_fips(first));
    }

    Ok(rural)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skips_header_and_pads_fips() {
        let csv = "fips,county,state\n8031,Denver,CO\n30033,Garfield,MT\n";
        let rural = load_from_reader(csv.as_bytes()).unwrap();
        assert_eq!(rural.len(), 2);
        assert!(rural.contains("08031"));
        assert!(rural.contains("30033"));
    }

    #[test]
    fn skips_blank_first_fields() {
        let csv = "fips,county\n,missing\n08031,Denver\n";
        let rural = load_from_reader(csv.as_bytes()).unwrap();
        assert_eq!(rural.len(), 1);
    }

    #[test]
    fn ignores_extra_columns_and_quoting() {
        let csv = "fips,county\n\"48301\",\"Loving, County\"\n";
        let rural = load_from_reader(csv.as_bytes()).unwrap();
        assert!(rural.contains("48301"));
    }

    #[test]
    fn duplicate_rows_collapse() {
        let csv = "fips\n08031\n08031\n";
        let rural = load_from_reader(csv.as_bytes()).unwrap();
        assert_eq!(rural.len(), 1);
    }
}
