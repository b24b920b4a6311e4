// Production clock and random source backing the sampler
use crate::application::capabilities::{Clock, RandomSource};
use chrono::{DateTime, Utc};
use rand::Rng;
use std::ops::RangeInclusive;

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Draws from rand's per-thread generator; nothing is shared between sessions.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn int_in(&self, range: RangeInclusive<i32>) -> i32 {
        rand::thread_rng().gen_range(range)
    }
}
