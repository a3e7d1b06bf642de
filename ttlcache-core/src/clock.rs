use std::fmt::Debug;
use std::sync::atomic::{AtomicI64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// Source of the current time, in whole seconds since the Unix epoch
pub trait Clock: Send + Sync + Debug {
    fn now_secs(&self) -> i64;
}

/// Wall-clock time from [`SystemTime`]
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_secs(&self) -> i64 {
        // A clock set before 1970 reads as the epoch itself
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| i64::try_from(elapsed.as_secs()).unwrap_or(i64::MAX))
            .unwrap_or(0)
    }
}

/// A clock that only moves when told to
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use ttlcache_core::{Cache, CacheConfig, ManualClock};
///
/// let clock = Arc::new(ManualClock::new(0));
/// let cache = Cache::with_clock(CacheConfig::default(), clock.clone());
///
/// cache.set("key1", 10, 20);
/// clock.set(20);
/// assert_eq!(cache.get("key1"), Some(10));
/// clock.advance(1);
/// assert_eq!(cache.get("key1"), None);
/// ```
#[derive(Debug, Default)]
pub struct ManualClock {
    now: AtomicI64,
}

impl ManualClock {
    pub fn new(now_secs: i64) -> Self {
        Self {
            now: AtomicI64::new(now_secs),
        }
    }

    /// Moves the clock to an absolute time
    pub fn set(&self, now_secs: i64) {
        self.now.store(now_secs, Ordering::SeqCst);
    }

    /// Moves the clock forward (or backward, for negative `secs`)
    pub fn advance(&self, secs: i64) {
        // fetch_update never fails when the closure always returns Some
        let _ = self
            .now
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |now| {
                Some(now.saturating_add(secs))
            });
    }
}

impl Clock for ManualClock {
    fn now_secs(&self) -> i64 {
        self.now.load(Ordering::SeqCst)
    }
}
