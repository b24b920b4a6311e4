// Sample domain models - synthetic positional/altitude observations
use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use std::ops::RangeInclusive;

/// Number of samples in every generated series.
pub const SERIES_LEN: usize = 180;

/// Logical spacing between consecutive samples, counted backward from "now".
pub const SAMPLE_SPACING_SECS: i64 = 20;

pub const LONGITUDE_RANGE: RangeInclusive<i32> = -180..=180;
pub const LATITUDE_RANGE: RangeInclusive<i32> = -90..=90;
pub const ALTITUDE_RANGE: RangeInclusive<i32> = 1..=10_000;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Sample {
    pub timestamp: DateTime<Utc>,
    pub longitude: i32,
    pub latitude: i32,
    pub altitude: i32,
}

impl Sample {
    pub fn new(timestamp: DateTime<Utc>, longitude: i32, latitude: i32, altitude: i32) -> Self {
        Self {
            timestamp,
            longitude,
            latitude,
            altitude,
        }
    }
}

/// Timestamp of the `index`-th sample of a series generated at `now`.
pub fn sample_time(now: DateTime<Utc>, index: usize) -> DateTime<Utc> {
    now - Duration::seconds(index as i64 * SAMPLE_SPACING_SECS)
}

/// A batch of exactly [`SERIES_LEN`] samples, most recent first.
///
/// Only the sampler can build one, so the length invariant holds for every
/// value in circulation.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    samples: Vec<Sample>,
}

impl Series {
    pub(crate) fn from_generated(samples: Vec<Sample>) -> Self {
        debug_assert_eq!(samples.len(), SERIES_LEN);
        Self { samples }
    }

    #[cfg(test)]
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn timestamps(&self) -> Vec<DateTime<Utc>> {
        self.samples.iter().map(|s| s.timestamp).collect()
    }

    pub fn longitudes(&self) -> Vec<i32> {
        self.samples.iter().map(|s| s.longitude).collect()
    }

    pub fn latitudes(&self) -> Vec<i32> {
        self.samples.iter().map(|s| s.latitude).collect()
    }

    pub fn altitudes(&self) -> Vec<i32> {
        self.samples.iter().map(|s| s.altitude).collect()
    }
}
