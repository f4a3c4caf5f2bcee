//! Fixtures for building synthetic flight corpora in tests.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::record::FlightRecord;

/// A fully-populated record. Null individual fields out from here to make it
/// dirty.
///
/// # Example
///
/// ```
/// use flightline::testing::clean_record;
///
/// let mut record = clean_record("Lisbon", "Oslo", 7200, 180);
/// assert!(!record.is_dirty());
/// record.date = None;
/// assert!(record.is_dirty());
/// ```
#[must_use]
pub fn clean_record(
    origin: &str,
    destination: &str,
    duration_secs: u64,
    passengers: u64,
) -> FlightRecord {
    FlightRecord {
        date: Some("2024-03-01T09:30:00".to_string()),
        origin_city: Some(origin.to_string()),
        destination_city: Some(destination.to_string()),
        flight_duration_secs: Some(duration_secs),
        passengers_on_board: Some(passengers),
    }
}

/// Write one corpus file: a single JSON array of records.
///
/// Parent directories are created as needed.
///
/// # Errors
/// Returns an error if the directories or the file cannot be written.
pub fn write_corpus_file(path: impl AsRef<Path>, records: &[FlightRecord]) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).with_context(|| format!("mkdir -p {}", parent.display()))?;
    }
    let body = serde_json::to_string(records).context("serialize corpus records")?;
    fs::write(path, body).with_context(|| format!("write {}", path.display()))?;
    Ok(())
}
