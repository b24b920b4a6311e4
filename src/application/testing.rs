// Deterministic test doubles for the sampler capabilities
use crate::application::capabilities::{Clock, RandomSource};
use crate::application::sampler::Sampler;
use chrono::{DateTime, Duration, TimeZone, Utc};
use std::ops::RangeInclusive;
use std::sync::{Arc, Mutex};

/// Clock pinned to a start instant, optionally moving forward on every read.
pub struct FixedClock {
    current: Mutex<DateTime<Utc>>,
    step: Duration,
}

impl FixedClock {
    pub fn at(start: DateTime<Utc>) -> Self {
        Self {
            current: Mutex::new(start),
            step: Duration::zero(),
        }
    }

    pub fn stepping(start: DateTime<Utc>, step: Duration) -> Self {
        Self {
            current: Mutex::new(start),
            step,
        }
    }
}

impl Default for FixedClock {
    fn default() -> Self {
        Self::at(Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap())
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        let mut current = self.current.lock().unwrap();
        let now = *current;
        *current = now + self.step;
        now
    }
}

/// Replays a fixed list of values in a loop, clamped into the requested range.
pub struct ScriptedRandom {
    values: Vec<i32>,
    cursor: Mutex<usize>,
}

impl ScriptedRandom {
    pub fn new(values: Vec<i32>) -> Self {
        assert!(!values.is_empty(), "scripted random needs at least one value");
        Self {
            values,
            cursor: Mutex::new(0),
        }
    }
}

impl RandomSource for ScriptedRandom {
    fn int_in(&self, range: RangeInclusive<i32>) -> i32 {
        let mut cursor = self.cursor.lock().unwrap();
        let value = self.values[*cursor % self.values.len()];
        *cursor += 1;
        value.clamp(*range.start(), *range.end())
    }
}

pub fn fixed_sampler(values: Vec<i32>) -> (Sampler, Arc<FixedClock>) {
    let clock = Arc::new(FixedClock::default());
    let sampler = Sampler::new(clock.clone(), Arc::new(ScriptedRandom::new(values)));
    (sampler, clock)
}

/// Sampler whose clock advances a second per series, so successive series differ.
pub fn advancing_sampler() -> Sampler {
    let clock = FixedClock::stepping(
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
        Duration::seconds(1),
    );
    Sampler::new(
        Arc::new(clock),
        Arc::new(ScriptedRandom::new((1..=97).collect())),
    )
}
