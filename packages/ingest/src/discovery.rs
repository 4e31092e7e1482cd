//! Input discovery for the FCC CSV extracts.
//!
//! Vendor extract filenames carry release dates, so the three required
//! inputs are located by substring match rather than exact name.

use std::path::{Path, PathBuf};

use crate::IngestError;

/// Resolved paths to the three required input files.
#[derive(Debug, Clone)]
pub struct CsvInputs {
    /// The fixed broadband summary by geography.
    pub broadband: PathBuf,
    /// The provider summary by geography.
    pub provider: PathBuf,
    /// The CFPB rural/underserved county list.
    pub rural: PathBuf,
}

/// Locates the broadband summary, provider summary, and rural designation
/// files in `dir`.
///
/// # Errors
///
/// Fails if the directory does not exist or any of the three files is
/// absent; the error names the expected filename pattern.
pub fn find_csv_inputs(dir: &Path) -> Result<CsvInputs, IngestError> {
    if !dir.is_dir() {
        return Err(IngestError::MissingCsvDir {
            path: dir.to_owned(),
        });
    }

    let mut names: Vec<String> = std::fs::read_dir(dir)?
        .filter_map(Result::ok)
        .filter(|entry| entry.path().is_file())
        .filter_map(|entry| entry.file_name().into_string().ok())
        .collect();
    names.sort_unstable();

    Ok(CsvInputs {
        broadband: dir.join(select_broadband(&names, dir)?),
        provider: dir.join(select_provider(&names, dir)?),
        rural: dir.join(select_rural(&names, dir)?),
    })
}

fn select_broadband<'a>(names: &'a [String], dir: &Path) -> Result<&'a str, IngestError> {
    select(names, |n| n.contains("fixed_broadband_summary")).ok_or_else(|| {
        IngestError::MissingInput {
            kind: "broadband summary",
            dir: dir.to_owned(),
            example: "bdc_us_fixed_broadband_summary_by_geography_*.csv",
        }
    })
}

fn select_provider<'a>(names: &'a [String], dir: &Path) -> Result<&'a str, IngestError> {
    select(names, |n| n.contains("provider_summary")).ok_or_else(|| {
        IngestError::MissingInput {
            kind: "provider summary",
            dir: dir.to_owned(),
            example: "bdc_us_provider_summary_by_geography_*.csv",
        }
    })
}

fn select_rural<'a>(names: &'a [String], dir: &Path) -> Result<&'a str, IngestError> {
    select(names, |n| n.contains("rural") || n.contains("cfpb")).ok_or_else(|| {
        IngestError::MissingInput {
            kind: "rural designation",
            dir: dir.to_owned(),
            example: "cfpb_rural-underserved-list_*.csv",
        }
    })
}

fn select(names: &[String], matches: impl Fn(&str) -> bool) -> Option<&str> {
    names.iter().map(String::as_str).find(|n| matches(n))
}
