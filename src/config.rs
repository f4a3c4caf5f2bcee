//! Run configuration.

use std::path::PathBuf;

/// Immutable configuration for one pipeline run.
///
/// Built once at startup and passed by shared reference into each stage; no
/// component mutates it.
#[derive(Clone, Debug)]
pub struct Config {
    /// Directory scanned recursively for input corpus files.
    pub input_root: PathBuf,
    /// Directory the report artifact is written to; created if absent.
    pub report_dir: PathBuf,
    /// How many destination cities the report ranks.
    pub top_n: usize,
    /// Flight-duration percentile reported per city.
    pub percentile: f64,
    /// Worker threads for the map stage.
    pub worker_pool_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_root: PathBuf::from("tmp/flights"),
            report_dir: PathBuf::from("clean_data"),
            top_n: 30,
            percentile: 90.0,
            worker_pool_size: num_cpus::get(),
        }
    }
}
