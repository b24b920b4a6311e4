// Sampler - builds a synthetic series from the injected clock and random source
use crate::application::capabilities::{Clock, RandomSource};
use crate::domain::sample::{
    sample_time, Sample, Series, ALTITUDE_RANGE, LATITUDE_RANGE, LONGITUDE_RANGE, SERIES_LEN,
};
use std::sync::Arc;

#[derive(Clone)]
pub struct Sampler {
    clock: Arc<dyn Clock>,
    random: Arc<dyn RandomSource>,
}

impl Sampler {
    pub fn new(clock: Arc<dyn Clock>, random: Arc<dyn RandomSource>) -> Self {
        Self { clock, random }
    }

    /// Generate a fresh series, most recent sample first.
    pub fn generate(&self) -> Series {
        let now = self.clock.now();
        let samples = (0..SERIES_LEN)
            .map(|i| {
                Sample::new(
                    sample_time(now, i),
                    self.random.int_in(LONGITUDE_RANGE),
                    self.random.int_in(LATITUDE_RANGE),
                    self.random.int_in(ALTITUDE_RANGE),
                )
            })
            .collect();

        Series::from_generated(samples)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::testing::{fixed_sampler, FixedClock};
    use std::ops::RangeInclusive;
    use std::sync::Mutex;
    use crate::domain::sample::SAMPLE_SPACING_SECS;
    use crate::infrastructure::system_sources::{SystemClock, ThreadRandom};

    #[test]
    fn test_generate_length_and_spacing() {
        let (sampler, clock) = fixed_sampler(vec![0]);
        let series = sampler.generate();

        assert_eq!(series.len(), SERIES_LEN);
        assert_eq!(series.samples()[0].timestamp, clock.now());
        for pair in series.samples().windows(2) {
            let gap = pair[0].timestamp - pair[1].timestamp;
            assert_eq!(gap.num_seconds(), SAMPLE_SPACING_SECS);
        }
    }

    #[test]
    fn test_generate_draws_fields_in_order() {
        let (sampler, _) = fixed_sampler(vec![-180, 90, 10_000, 180, -90, 1]);
        let series = sampler.generate();

        let first = &series.samples()[0];
        assert_eq!((first.longitude, first.latitude, first.altitude), (-180, 90, 10_000));
        let second = &series.samples()[1];
        assert_eq!((second.longitude, second.latitude, second.altitude), (180, -90, 1));
    }

    /// Returns the low bound and remembers every range it was asked for.
    struct RecordingRandom {
        requested: Mutex<Vec<RangeInclusive<i32>>>,
    }

    impl RandomSource for RecordingRandom {
        fn int_in(&self, range: RangeInclusive<i32>) -> i32 {
            let low = *range.start();
            self.requested.lock().unwrap().push(range);
            low
        }
    }

    #[test]
    fn test_generate_requests_each_field_range() {
        let random = Arc::new(RecordingRandom {
            requested: Mutex::new(Vec::new()),
        });
        let sampler = Sampler::new(Arc::new(FixedClock::default()), random.clone());
        let series = sampler.generate();

        let requested = random.requested.lock().unwrap();
        assert_eq!(requested.len(), SERIES_LEN * 3);
        for chunk in requested.chunks(3) {
            assert_eq!(chunk[0], LONGITUDE_RANGE);
            assert_eq!(chunk[1], LATITUDE_RANGE);
            assert_eq!(chunk[2], ALTITUDE_RANGE);
        }
        assert!(series.samples().iter().all(|s| s.altitude == 1));
    }

    #[test]
    fn test_system_sources_respect_ranges() {
        let sampler = Sampler::new(Arc::new(SystemClock), Arc::new(ThreadRandom));

        for _ in 0..20 {
            let series = sampler.generate();
            assert_eq!(series.len(), SERIES_LEN);
            for sample in series.samples() {
                assert!(LONGITUDE_RANGE.contains(&sample.longitude));
                assert!(LATITUDE_RANGE.contains(&sample.latitude));
                assert!(ALTITUDE_RANGE.contains(&sample.altitude));
            }
            for pair in series.samples().windows(2) {
                assert!(pair[0].timestamp > pair[1].timestamp);
            }
        }
    }

    #[test]
    fn test_consecutive_series_differ() {
        let sampler = Sampler::new(Arc::new(SystemClock), Arc::new(ThreadRandom));
        let a = sampler.generate();
        let b = sampler.generate();
        assert_ne!(a.altitudes(), b.altitudes());
    }
}
