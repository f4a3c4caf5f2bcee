//! Flight record schema and the dirtiness predicate.

use serde::{Deserialize, Serialize};

/// One flight record as it appears in the input corpus.
///
/// The generator may emit `null` for any value, so every field is an explicit
/// `Option`. The key set itself is fixed by the input schema; only the values
/// vary.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlightRecord {
    /// ISO-8601 departure timestamp.
    pub date: Option<String>,
    pub origin_city: Option<String>,
    pub destination_city: Option<String>,
    /// Nominal range 1800–43200.
    pub flight_duration_secs: Option<u64>,
    /// Nominal range 1–500.
    pub passengers_on_board: Option<u64>,
}

/// The statistical payload of a clean record, borrowed from a [`FlightRecord`].
#[derive(Clone, Copy, Debug)]
pub struct CleanFlight<'a> {
    pub origin_city: &'a str,
    pub destination_city: &'a str,
    pub flight_duration_secs: u64,
    pub passengers_on_board: u64,
}

impl FlightRecord {
    /// Extract the statistical fields, or `None` if the record is dirty.
    ///
    /// A record is dirty iff at least one of its five fields is null/missing;
    /// a dirty record is counted but contributes to no statistic, even when
    /// the fields a statistic needs happen to be present.
    #[must_use]
    pub fn as_clean(&self) -> Option<CleanFlight<'_>> {
        self.date.as_ref()?;
        Some(CleanFlight {
            origin_city: self.origin_city.as_deref()?,
            destination_city: self.destination_city.as_deref()?,
            flight_duration_secs: self.flight_duration_secs?,
            passengers_on_board: self.passengers_on_board?,
        })
    }

    /// True iff any field is null/missing.
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.as_clean().is_none()
    }
}
