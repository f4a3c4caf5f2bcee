//! Report derivation and rendering.
//!
//! [`Report::from_stats`] is the finish step over a merged [`FlightStats`]
//! bundle: top-N destination ranking, per-city mean and percentile flight
//! duration, and the passenger-flow extremes. Rendering ([`Report::render`])
//! and artifact writing ([`Report::write`]) are separate steps.

use anyhow::{Context, Result};
use chrono::Local;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::stats::FlightStats;

/// Duration statistics for one ranked destination city.
#[derive(Clone, Debug, PartialEq)]
pub struct CityDurations {
    pub city: String,
    /// Arithmetic mean of the city's duration multiset.
    pub mean: f64,
    /// Linear-interpolation percentile of the city's duration multiset.
    pub percentile: f64,
}

/// The derived, read-only view over a finalized global bundle.
///
/// Computed once per run, written to a timestamped artifact, then discarded.
#[derive(Clone, Debug, PartialEq)]
pub struct Report {
    pub record_count: u64,
    pub dirty_count: u64,
    /// Wall-clock run duration in seconds.
    pub run_secs: f64,
    /// Configured ranking width; the header shows this even when fewer
    /// cities exist.
    pub top_n: usize,
    /// Configured percentile, e.g. `90.0`.
    pub percentile: f64,
    /// Destination cities ranked by clean-arrival count, descending.
    pub top_destinations: Vec<CityDurations>,
    /// City with the largest cumulative arrivals; `None` over an empty map.
    pub max_arrived_city: Option<String>,
    /// City with the largest cumulative departures; `None` over an empty map.
    pub max_left_city: Option<String>,
}

impl Report {
    /// Derive the report from a finalized bundle.
    ///
    /// Ranking sorts destination cities by clean-arrival count descending.
    /// Ties keep the bundle's sorted-key order (city name ascending) via a
    /// stable sort, so the outcome never depends on worker completion order.
    #[must_use]
    pub fn from_stats(stats: &FlightStats, config: &Config, run_secs: f64) -> Self {
        let mut ranked: Vec<(&String, &Vec<u64>)> =
            stats.durations_by_destination.iter().collect();
        ranked.sort_by(|a, b| b.1.len().cmp(&a.1.len()));
        ranked.truncate(config.top_n);

        let top_destinations = ranked
            .into_iter()
            .map(|(city, durations)| {
                let mut sorted = durations.clone();
                sorted.sort_unstable();
                CityDurations {
                    city: city.clone(),
                    mean: mean(&sorted),
                    percentile: percentile_linear(&sorted, config.percentile),
                }
            })
            .collect();

        Self {
            record_count: stats.record_count,
            dirty_count: stats.dirty_count,
            run_secs,
            top_n: config.top_n,
            percentile: config.percentile,
            top_destinations,
            max_arrived_city: argmax(&stats.passengers_arrived_by_city),
            max_left_city: argmax(&stats.passengers_left_by_city),
        }
    }

    /// Render the line-oriented report body.
    ///
    /// Rendering is a pure function of the report value: two calls produce
    /// byte-identical output.
    #[must_use]
    pub fn render(&self) -> String {
        let mut lines = vec![
            format!("Total records processed: {}", self.record_count),
            format!("Dirty records: {}", self.dirty_count),
            format!("Total run duration: {:.2} seconds", self.run_secs),
            String::new(),
            format!(
                "Top {} Destination Cities (AVG and P{} flight duration):",
                self.top_n, self.percentile
            ),
            String::new(),
        ];
        for entry in &self.top_destinations {
            lines.push(format!(
                "{}: AVG = {:.2}, P{} = {:.2}",
                entry.city, entry.mean, self.percentile, entry.percentile
            ));
        }
        lines.push(format!(
            "City with MAX passengers arrived: {}",
            self.max_arrived_city.as_deref().unwrap_or("N/A")
        ));
        lines.push(format!(
            "City with MAX passengers left: {}",
            self.max_left_city.as_deref().unwrap_or("N/A")
        ));
        let mut body = lines.join("\n");
        body.push('\n');
        body
    }

    /// Write the rendered report to a fresh, timestamp-named file under `dir`.
    ///
    /// The directory is created if absent. A prior report is never
    /// overwritten: on a filename collision a numeric suffix is appended.
    ///
    /// # Errors
    /// Returns an error if the directory or file cannot be created.
    pub fn write(&self, dir: &Path) -> Result<PathBuf> {
        fs::create_dir_all(dir).with_context(|| format!("mkdir -p {}", dir.display()))?;
        let stamp = Local::now().format("%Y%m%d_%H%M%S").to_string();
        let mut path = dir.join(format!("flights_report_{stamp}.txt"));
        let mut n = 1u32;
        while path.exists() {
            path = dir.join(format!("flights_report_{stamp}_{n}.txt"));
            n += 1;
        }
        fs::write(&path, self.render()).with_context(|| format!("write {}", path.display()))?;
        Ok(path)
    }
}

/// Arithmetic mean of a duration sequence. Empty input yields `NaN`; a city
/// key only exists once it has at least one duration, so the report never
/// sees that case.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn mean(values: &[u64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    let sum: u64 = values.iter().sum();
    sum as f64 / values.len() as f64
}

/// Linear-interpolation percentile over a **sorted** sequence.
///
/// The value at fractional rank `(p/100)*(n-1)`, interpolated between the two
/// nearest order statistics when the rank is fractional. `p` is clamped to
/// `[0, 100]`. Empty input yields `NaN`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn percentile_linear(sorted: &[u64], p: f64) -> f64 {
    if sorted.is_empty() {
        return f64::NAN;
    }
    let rank = (p / 100.0).clamp(0.0, 1.0) * (sorted.len() - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    let frac = rank - lo as f64;
    let (low, high) = (sorted[lo] as f64, sorted[hi] as f64);
    low + frac * (high - low)
}

/// Argmax over a passenger map. Ties resolve to the first key in sorted-key
/// iteration order (city name ascending); `None` over an empty map.
fn argmax(map: &BTreeMap<String, u64>) -> Option<String> {
    let mut best: Option<(&String, u64)> = None;
    for (city, &passengers) in map {
        match best {
            Some((_, most)) if passengers <= most => {}
            _ => best = Some((city, passengers)),
        }
    }
    best.map(|(city, _)| city.clone())
}
