//! End-to-end pipeline runs over synthetic corpora.

use anyhow::Result;
use flightline::testing::{clean_record, write_corpus_file};
use flightline::{Config, FlightRecord, run};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn config_for(input_root: &Path, report_dir: &Path) -> Config {
    Config {
        input_root: input_root.to_path_buf(),
        report_dir: report_dir.to_path_buf(),
        worker_pool_size: 2,
        ..Config::default()
    }
}

/// The run-duration line differs between otherwise identical runs.
fn without_duration_line(body: &str) -> String {
    body.lines()
        .filter(|line| !line.starts_with("Total run duration:"))
        .collect::<Vec<_>>()
        .join("\n")
}

fn write_sample_corpus(root: &Path) -> Result<()> {
    write_corpus_file(
        root.join("batch1.json"),
        &[
            clean_record("Lisbon", "Oslo", 7200, 100),
            clean_record("Madrid", "Oslo", 5400, 50),
            FlightRecord { date: None, ..clean_record("Lisbon", "Oslo", 3600, 10) },
        ],
    )?;
    write_corpus_file(
        root.join("2024/03/batch2.json"),
        &[
            clean_record("Oslo", "Madrid", 9000, 70),
            clean_record("Lisbon", "Madrid", 8000, 60),
        ],
    )?;
    Ok(())
}

#[test]
fn full_run_produces_a_report_artifact() -> Result<()> {
    let input = TempDir::new()?;
    let output = TempDir::new()?;
    write_sample_corpus(input.path())?;

    let summary = run(&config_for(input.path(), output.path()))?;

    assert_eq!(summary.files_scanned, 2);
    assert_eq!(summary.record_count, 5);
    assert_eq!(summary.dirty_count, 1);
    assert!(summary.report_path.starts_with(output.path()));

    let body = fs::read_to_string(&summary.report_path)?;
    assert!(body.starts_with("Total records processed: 5\nDirty records: 1\n"));
    // Oslo and Madrid tie at two arrivals each; Madrid ranks first by name.
    assert!(body.contains("Madrid: AVG = 8500.00,"));
    assert!(body.contains("Oslo: AVG = 6300.00,"));
    assert!(body.contains("City with MAX passengers arrived: Oslo\n"));
    assert!(body.contains("City with MAX passengers left: Lisbon\n"));
    Ok(())
}

#[test]
fn a_corrupt_file_changes_nothing_but_still_completes() -> Result<()> {
    let clean_input = TempDir::new()?;
    let dirty_input = TempDir::new()?;
    write_sample_corpus(clean_input.path())?;
    write_sample_corpus(dirty_input.path())?;
    fs::write(dirty_input.path().join("garbage.json"), "{{{ not json")?;

    let clean_output = TempDir::new()?;
    let dirty_output = TempDir::new()?;
    let baseline = run(&config_for(clean_input.path(), clean_output.path()))?;
    let tolerant = run(&config_for(dirty_input.path(), dirty_output.path()))?;

    // The corrupt file is enumerated but contributes an empty bundle.
    assert_eq!(tolerant.files_scanned, baseline.files_scanned + 1);
    assert_eq!(tolerant.record_count, baseline.record_count);
    assert_eq!(tolerant.dirty_count, baseline.dirty_count);

    let baseline_body = fs::read_to_string(&baseline.report_path)?;
    let tolerant_body = fs::read_to_string(&tolerant.report_path)?;
    assert_eq!(
        without_duration_line(&baseline_body),
        without_duration_line(&tolerant_body)
    );
    Ok(())
}

#[test]
fn empty_corpus_still_yields_a_complete_report() -> Result<()> {
    let input = TempDir::new()?;
    let output = TempDir::new()?;

    let summary = run(&config_for(input.path(), output.path()))?;

    assert_eq!(summary.files_scanned, 0);
    assert_eq!(summary.record_count, 0);
    let body = fs::read_to_string(&summary.report_path)?;
    assert!(body.starts_with("Total records processed: 0\nDirty records: 0\n"));
    assert!(body.contains("City with MAX passengers arrived: N/A\n"));
    assert!(body.contains("City with MAX passengers left: N/A\n"));
    Ok(())
}

#[test]
fn missing_input_root_aborts_before_any_work() {
    let output = TempDir::new().unwrap();
    let config = config_for(Path::new("definitely/not/here"), output.path());

    assert!(run(&config).is_err());
    // Nothing was dispatched, so no report was written either.
    assert_eq!(fs::read_dir(output.path()).unwrap().count(), 0);
}

#[test]
fn report_body_is_independent_of_worker_pool_size() -> Result<()> {
    let input = TempDir::new()?;
    write_sample_corpus(input.path())?;

    let mut bodies = Vec::new();
    for workers in [1, 4] {
        let output = TempDir::new()?;
        let config = Config {
            worker_pool_size: workers,
            ..config_for(input.path(), output.path())
        };
        let summary = run(&config)?;
        bodies.push(without_duration_line(&fs::read_to_string(
            &summary.report_path,
        )?));
    }

    assert_eq!(bodies[0], bodies[1]);
    Ok(())
}
