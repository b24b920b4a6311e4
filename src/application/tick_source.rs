// Tick source - fans timer ticks out to subscribed panel controllers
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::broadcast::{self, error::TryRecvError};

const TICK_BUFFER: usize = 16;

/// One firing of the refresh timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tick {
    /// Ticks fired since the source was created, this one included.
    pub n_intervals: u64,
}

/// Broadcast point for ticks. Clones share the same subscribers and count.
#[derive(Clone)]
pub struct TickSource {
    sender: broadcast::Sender<Tick>,
    fired: Arc<AtomicU64>,
}

impl TickSource {
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(TICK_BUFFER);
        Self {
            sender,
            fired: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn subscribe(&self) -> TickSubscription {
        TickSubscription {
            receiver: self.sender.subscribe(),
        }
    }

    #[cfg(test)]
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }

    /// Fire one tick. Returns how many subscriptions it reached.
    pub fn fire(&self) -> usize {
        let n_intervals = self.fired.fetch_add(1, Ordering::SeqCst) + 1;
        // No subscribers is not an error: the tick simply has no effect
        self.sender.send(Tick { n_intervals }).unwrap_or(0)
    }

    #[cfg(test)]
    pub fn fired(&self) -> u64 {
        self.fired.load(Ordering::SeqCst)
    }
}

impl Default for TickSource {
    fn default() -> Self {
        Self::new()
    }
}

/// A live subscription. Dropping it unsubscribes.
pub struct TickSubscription {
    receiver: broadcast::Receiver<Tick>,
}

impl TickSubscription {
    /// Drain every queued tick and return the most recent one.
    pub fn take_latest(&mut self) -> Option<Tick> {
        let mut latest = None;
        loop {
            match self.receiver.try_recv() {
                Ok(tick) => latest = Some(tick),
                Err(TryRecvError::Lagged(skipped)) => {
                    tracing::debug!("Tick subscription lagged by {} ticks", skipped);
                }
                Err(TryRecvError::Empty) | Err(TryRecvError::Closed) => break,
            }
        }
        latest
    }
}
