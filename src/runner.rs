//! Pipeline orchestration: enumerate, dispatch, collect, reduce, report.

use anyhow::{Context, Result};
use rayon::prelude::*;
use std::path::PathBuf;
use std::time::Instant;
use tracing::{debug, info};

use crate::config::Config;
use crate::report::Report;
use crate::scan::enumerate_files;
use crate::stats::FlightStats;
use crate::worker::process_file;

/// What a finished run hands back to the caller.
#[derive(Clone, Debug)]
pub struct RunSummary {
    /// Where the report artifact landed.
    pub report_path: PathBuf,
    pub record_count: u64,
    pub dirty_count: u64,
    pub files_scanned: usize,
    pub run_secs: f64,
}

/// Execute one full pipeline run.
///
/// The map stage fans the enumerated files out over a dedicated rayon pool
/// bounded by `config.worker_pool_size`, one unit of work per file; each
/// worker returns an immutable partial bundle. The reduce stage folds the
/// collected bundles sequentially on the calling thread, so the global bundle
/// is never mutated concurrently. Bundles are collected in the (stable)
/// enumeration order, but merge is associative and commutative so correctness
/// does not depend on it.
///
/// The run reaches the report stage even when individual files failed: their
/// empty bundles merge as no-ops, and no file is retried.
///
/// # Errors
/// Fails only if the input root does not exist, the worker pool cannot be
/// built, or the report artifact cannot be written.
pub fn run(config: &Config) -> Result<RunSummary> {
    let start = Instant::now();

    let files = enumerate_files(&config.input_root)?;
    debug!(
        "enumerated {} files under {}",
        files.len(),
        config.input_root.display()
    );

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.worker_pool_size)
        .build()
        .context("build worker pool")?;
    let partials: Vec<FlightStats> =
        pool.install(|| files.par_iter().map(|path| process_file(path)).collect());

    let mut global = FlightStats::default();
    for partial in partials {
        global.merge(partial);
    }
    debug!(
        "merged {} partial bundles: {} records, {} dirty",
        files.len(),
        global.record_count,
        global.dirty_count
    );

    let run_secs = start.elapsed().as_secs_f64();
    let report = Report::from_stats(&global, config, run_secs);
    let report_path = report.write(&config.report_dir)?;
    info!(
        "processed {} records ({} dirty) from {} files in {:.2}s, report at {}",
        global.record_count,
        global.dirty_count,
        files.len(),
        run_secs,
        report_path.display()
    );

    Ok(RunSummary {
        report_path,
        record_count: global.record_count,
        dirty_count: global.dirty_count,
        files_scanned: files.len(),
        run_secs,
    })
}
