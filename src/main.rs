use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use flightline::{Config, runner};

/// Aggregate statistics over a corpus of JSON flight-record files.
#[derive(Debug, Parser)]
#[command(name = "flightline", version, about)]
struct Args {
    /// Directory scanned recursively for input files.
    #[arg(long, default_value = "tmp/flights")]
    input_root: PathBuf,

    /// Directory the report is written to (created if absent).
    #[arg(long, default_value = "clean_data")]
    report_dir: PathBuf,

    /// Number of destination cities to rank in the report.
    #[arg(long, default_value_t = 30)]
    top_n: usize,

    /// Flight-duration percentile reported per city.
    #[arg(long, default_value_t = 90.0)]
    percentile: f64,

    /// Worker threads for the map stage; defaults to available parallelism.
    #[arg(long)]
    workers: Option<usize>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let config = Config {
        input_root: args.input_root,
        report_dir: args.report_dir,
        top_n: args.top_n,
        percentile: args.percentile,
        worker_pool_size: args.workers.unwrap_or_else(num_cpus::get),
    };

    let summary = runner::run(&config)?;
    println!("{}", summary.report_path.display());
    Ok(())
}
