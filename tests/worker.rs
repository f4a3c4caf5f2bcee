//! Per-file processing and failure isolation at the file boundary.

use anyhow::Result;
use flightline::FlightRecord;
use flightline::testing::{clean_record, write_corpus_file};
use flightline::worker::{process_file, read_records};
use std::fs;
use tempfile::TempDir;

#[test]
fn reads_a_json_array_of_records() -> Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("flights.json");
    let records = vec![
        clean_record("Lisbon", "Oslo", 7200, 100),
        FlightRecord { passengers_on_board: None, ..clean_record("Madrid", "Oslo", 5400, 1) },
    ];
    write_corpus_file(&path, &records)?;

    assert_eq!(read_records(&path)?, records);
    Ok(())
}

#[test]
fn null_and_missing_keys_both_read_as_none() -> Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("flights.json");
    fs::write(
        &path,
        r#"[{"date":null,"origin_city":"Lisbon","destination_city":"Oslo","flight_duration_secs":7200,"passengers_on_board":100},
           {"origin_city":"Madrid","destination_city":"Oslo","flight_duration_secs":5400,"passengers_on_board":50}]"#,
    )?;

    let records = read_records(&path)?;
    assert_eq!(records.len(), 2);
    assert!(records.iter().all(|r| r.date.is_none()));
    assert!(records.iter().all(FlightRecord::is_dirty));
    Ok(())
}

#[test]
fn counts_clean_and_dirty_records() -> Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("flights.json");
    write_corpus_file(
        &path,
        &[
            clean_record("Lisbon", "Oslo", 7200, 100),
            FlightRecord { date: None, ..clean_record("Lisbon", "Oslo", 3600, 50) },
            clean_record("Madrid", "Oslo", 5400, 50),
        ],
    )?;

    let stats = process_file(&path);
    assert_eq!(stats.record_count, 3);
    assert_eq!(stats.dirty_count, 1);
    assert_eq!(stats.durations_by_destination["Oslo"], vec![7200, 5400]);
    Ok(())
}

#[test]
fn malformed_json_collapses_to_an_empty_bundle() -> Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("broken.json");
    fs::write(&path, "this is not json")?;

    let stats = process_file(&path);
    assert!(stats.is_empty());
    assert_eq!(stats.dirty_count, 0);
    Ok(())
}

#[test]
fn unreadable_file_collapses_to_an_empty_bundle() {
    let dir = TempDir::new().unwrap();
    let stats = process_file(&dir.path().join("missing.json"));
    assert!(stats.is_empty());
}

#[test]
fn wrong_json_shape_collapses_to_an_empty_bundle() -> Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("object.json");
    // An object where an array of records is expected.
    fs::write(&path, r#"{"date": "2024-03-01"}"#)?;

    let stats = process_file(&path);
    assert!(stats.is_empty());
    Ok(())
}
