//! Time source abstraction
//!
//! Readings are stamped at acceptance, not by the producer, so history stays
//! in arrival order regardless of device clock drift. The trait seam exists
//! so tests can pin the clock.

/// Timestamp in milliseconds since the Unix epoch
pub type Timestamp = u64;

/// Source of acceptance timestamps
pub trait TimeSource: Send + Sync {
    /// Current timestamp in milliseconds
    fn now(&self) -> Timestamp;
}

/// Wall-clock time from the operating system
#[derive(Debug, Clone, Copy, Default)]
pub struct WallClock;

impl TimeSource for WallClock {
    fn now(&self) -> Timestamp {
        use std::time::{SystemTime, UNIX_EPOCH};

        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as Timestamp
    }
}

/// Fixed time source for testing
#[derive(Debug)]
pub struct FixedTime {
    timestamp: std::sync::atomic::AtomicU64,
}

impl FixedTime {
    /// Create a source pinned at `timestamp`
    pub fn new(timestamp: Timestamp) -> Self {
        Self {
            timestamp: std::sync::atomic::AtomicU64::new(timestamp),
        }
    }

    /// Move the clock forward by `ms`
    pub fn advance(&self, ms: u64) {
        self.timestamp
            .fetch_add(ms, std::sync::atomic::Ordering::Relaxed);
    }
}

impl Clone for FixedTime {
    fn clone(&self) -> Self {
        Self::new(self.now())
    }
}

impl TimeSource for FixedTime {
    fn now(&self) -> Timestamp {
        self.timestamp.load(std::sync::atomic::Ordering::Relaxed)
    }
}
