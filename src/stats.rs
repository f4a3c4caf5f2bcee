//! Per-file and global aggregation bundles.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::record::FlightRecord;

/// Aggregated statistics over a set of flight records.
///
/// One value of this type is produced per input file (the partial bundle) and
/// the same type accumulates the whole run (the global bundle); the empty
/// bundle is the identity under [`merge`](Self::merge). The lifecycle follows
/// the usual combiner contract: create ([`Default`]), fold one element
/// ([`observe`](Self::observe)), combine accumulators
/// ([`merge`](Self::merge)), and finish (report derivation, which lives in
/// [`crate::report`]).
///
/// Counts and per-key passenger sums merge associatively and commutatively.
/// Per-city duration sequences concatenate, so across merge orders they are
/// stable only as multisets — everything derived from them downstream (mean,
/// percentile) is an order-independent function of the multiset.
///
/// City keys live in `BTreeMap`s: iteration is sorted by name, which keeps
/// every ordering derived from a bundle reproducible no matter which worker
/// finished first.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlightStats {
    /// Every record seen, clean or dirty.
    pub record_count: u64,
    /// Records with at least one null field; excluded from all maps.
    pub dirty_count: u64,
    /// Destination city → flight durations of clean records landing there.
    pub durations_by_destination: BTreeMap<String, Vec<u64>>,
    /// Destination city → summed passengers over clean records landing there.
    pub passengers_arrived_by_city: BTreeMap<String, u64>,
    /// Origin city → summed passengers over clean records departing there.
    pub passengers_left_by_city: BTreeMap<String, u64>,
}

impl FlightStats {
    /// Fold one record into the bundle.
    ///
    /// A dirty record only bumps the counters. A clean record contributes
    /// exactly one duration entry (destination bucket) and exactly one
    /// passenger increment to each of the arrived/left maps.
    pub fn observe(&mut self, record: &FlightRecord) {
        self.record_count += 1;
        let Some(clean) = record.as_clean() else {
            self.dirty_count += 1;
            return;
        };
        self.durations_by_destination
            .entry(clean.destination_city.to_owned())
            .or_default()
            .push(clean.flight_duration_secs);
        *self
            .passengers_arrived_by_city
            .entry(clean.destination_city.to_owned())
            .or_default() += clean.passengers_on_board;
        *self
            .passengers_left_by_city
            .entry(clean.origin_city.to_owned())
            .or_default() += clean.passengers_on_board;
    }

    /// Merge another bundle into this one, consuming it.
    ///
    /// Empty bundles (failed files) are no-ops.
    pub fn merge(&mut self, other: FlightStats) {
        self.record_count += other.record_count;
        self.dirty_count += other.dirty_count;
        for (city, mut durations) in other.durations_by_destination {
            self.durations_by_destination
                .entry(city)
                .or_default()
                .append(&mut durations);
        }
        for (city, passengers) in other.passengers_arrived_by_city {
            *self.passengers_arrived_by_city.entry(city).or_default() += passengers;
        }
        for (city, passengers) in other.passengers_left_by_city {
            *self.passengers_left_by_city.entry(city).or_default() += passengers;
        }
    }

    /// True iff no record has been observed or merged in.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.record_count == 0
    }
}
