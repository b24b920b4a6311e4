// Ticker - the session's periodic timer, as a stream
use futures::StreamExt;
use std::time::Duration;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tokio_stream::wrappers::IntervalStream;

pub struct Ticker {
    inner: IntervalStream,
}

impl Ticker {
    /// Start a timer whose first tick lands one `period` from now.
    pub fn every(period: Duration) -> Self {
        let mut interval = interval_at(Instant::now() + period, period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
        Self {
            inner: IntervalStream::new(interval),
        }
    }

    pub async fn tick(&mut self) {
        // IntervalStream never ends
        let _ = self.inner.next().await;
    }
}

/// Wait for the next tick of `ticker`, or forever when there is none.
pub async fn next_tick(ticker: &mut Option<Ticker>) {
    match ticker {
        Some(ticker) => ticker.tick().await,
        None => std::future::pending().await,
    }
}
