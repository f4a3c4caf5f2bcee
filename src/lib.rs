//! # Flightline
//!
//! A **concurrent batch-analytics pipeline** for flight-record corpora: scan
//! a directory tree of JSON files, aggregate per-destination statistics in
//! parallel, and emit a single ranked report — while tolerating malformed
//! records and files.
//!
//! ## Pipeline shape
//!
//! ```text
//! enumerate files ──► worker pool (one file per task) ──► partial bundles
//!                                                             │
//!                               sequential merge fold ◄───────┘
//!                                        │
//!                               report derivation ──► timestamped artifact
//! ```
//!
//! - [`scan`] enumerates every file under the input root (recursive, sorted).
//! - [`worker`] parses one file into a [`FlightStats`] partial bundle.
//!   Read/parse failures are logged and collapse to an empty bundle; a single
//!   bad file never halts the run.
//! - [`stats`] defines the bundle and its associative, commutative merge.
//! - [`report`] derives top-N destinations (mean and percentile flight
//!   duration per city) plus passenger-flow extremes, and writes the report.
//! - [`runner`] orchestrates the stages over a bounded rayon pool and times
//!   the run.
//!
//! ## Quick start
//!
//! ```no_run
//! use flightline::{Config, runner};
//! # use anyhow::Result;
//!
//! # fn main() -> Result<()> {
//! let config = Config {
//!     input_root: "tmp/flights".into(),
//!     report_dir: "clean_data".into(),
//!     ..Config::default()
//! };
//! let summary = runner::run(&config)?;
//! println!(
//!     "{} records ({} dirty) → {}",
//!     summary.record_count,
//!     summary.dirty_count,
//!     summary.report_path.display()
//! );
//! # Ok(())
//! # }
//! ```
//!
//! ## Records and dirtiness
//!
//! A [`FlightRecord`] has five fields, each of which may be `null` or absent
//! in the source JSON. A record with any missing field is *dirty*: it is
//! counted but excluded from every statistic. Clean records contribute one
//! duration entry to their destination city and one passenger increment to
//! each of the arrived/left maps.
//!
//! ## Determinism
//!
//! Worker completion order is not deterministic, so nothing downstream may
//! depend on it: the merge is order-independent, city maps iterate in sorted
//! key order, and all ranking tie-breaks resolve by city name. Two runs over
//! the same corpus produce identical reports up to the run-duration line and
//! the artifact timestamp.

pub mod config;
pub mod record;
pub mod report;
pub mod runner;
pub mod scan;
pub mod stats;
pub mod testing;
pub mod worker;

pub use config::Config;
pub use record::{CleanFlight, FlightRecord};
pub use report::{CityDurations, Report, mean, percentile_linear};
pub use runner::{RunSummary, run};
pub use stats::FlightStats;
