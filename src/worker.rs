//! Per-file processing: parse one corpus file into a partial bundle.

use anyhow::{Context, Result};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::error;

use crate::record::FlightRecord;
use crate::stats::FlightStats;

/// Read one corpus file: a single JSON array of flight records.
///
/// # Errors
/// Returns an error if the file cannot be opened or does not parse as an
/// array of records. Errors carry the offending path.
pub fn read_records(path: &Path) -> Result<Vec<FlightRecord>> {
    let f = File::open(path).with_context(|| format!("open {}", path.display()))?;
    let records = serde_json::from_reader(BufReader::new(f))
        .with_context(|| format!("parse {}", path.display()))?;
    Ok(records)
}

/// Process one file into a partial bundle.
///
/// Read and parse failures stop at this boundary: they are logged with the
/// offending path and collapse to an empty bundle, so a single bad file never
/// halts the run. The empty bundle is a no-op under merge.
///
/// Touches no shared state; safe to call from any worker thread.
pub fn process_file(path: &Path) -> FlightStats {
    let mut stats = FlightStats::default();
    match read_records(path) {
        Ok(records) => {
            for record in &records {
                stats.observe(record);
            }
        }
        Err(err) => error!("error processing file {}: {:#}", path.display(), err),
    }
    stats
}
