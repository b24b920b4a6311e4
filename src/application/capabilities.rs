// Capability traits for the sampler's sources of nondeterminism
use chrono::{DateTime, Utc};
use std::ops::RangeInclusive;

/// Source of "now".
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Source of uniformly distributed integers.
pub trait RandomSource: Send + Sync {
    /// Draw uniformly from `range`, both bounds included.
    fn int_in(&self, range: RangeInclusive<i32>) -> i32;
}
