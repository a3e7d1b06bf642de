use dashmap::DashMap;
use std::sync::Arc;

use crate::clock::{Clock, SystemClock};
use crate::config::CacheConfig;
use crate::entry::Entry;

/// Truncates a key for safe logging (prevents leaking sensitive key data)
fn truncate_key_for_log(key: &str) -> String {
    const MAX_LOG_LEN: usize = 16;
    if key.len() <= MAX_LOG_LEN {
        return key.to_string();
    }
    let mut end = MAX_LOG_LEN;
    while !key.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &key[..end])
}

/// Internal shared state for the cache
struct CacheInner<V> {
    data: DashMap<String, Entry<V>>,
    clock: Arc<dyn Clock>,
}

/// Thread-safe in-memory key-value cache with per-entry TTL
///
/// Uses `DashMap` for concurrent access. Each shard sits behind its own
/// reader-writer lock, so reads never block other reads and writes only block
/// the shard holding the key.
///
/// Expired entries are never swept in the background. They stay in the map
/// until a read observes them, and that read removes them.
///
/// Cloning a `Cache` is cheap and yields a handle to the same entries.
///
/// # Example
///
/// ```rust
/// use ttlcache_core::{Cache, CacheConfig};
///
/// let cache: Cache<String> = Cache::with_config(
///     CacheConfig::default().with_initial_capacity(128),
/// );
///
/// cache.set("session:42", "alice".to_string(), 300); // 5 minute TTL
/// assert_eq!(cache.get("session:42").as_deref(), Some("alice"));
/// ```
pub struct Cache<V> {
    inner: Arc<CacheInner<V>>,
}

impl<V> Clone for Cache<V> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<V: Clone> Cache<V> {
    /// Creates an empty cache with default configuration
    pub fn new() -> Self {
        Self::with_config(CacheConfig::default())
    }

    /// Creates an empty cache with custom configuration, reading time from
    /// the system clock
    pub fn with_config(config: CacheConfig) -> Self {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    /// Creates an empty cache that reads time from `clock`
    pub fn with_clock(config: CacheConfig, clock: Arc<dyn Clock>) -> Self {
        let inner = Arc::new(CacheInner {
            data: DashMap::with_capacity(config.initial_capacity),
            clock,
        });

        Self { inner }
    }

    /// Stores a value with the given key and TTL (time-to-live) in seconds
    ///
    /// If the key already exists, both its value and its expiration are
    /// replaced.
    ///
    /// # TTL Semantics
    ///
    /// - A **positive TTL** expires the entry `ttl_seconds` after now.
    /// - A TTL of **zero or below** means the entry **never expires**. It stays
    ///   readable until the key is set again.
    pub fn set(&self, key: impl Into<String>, value: V, ttl_seconds: i64) {
        let key = key.into();
        let entry = Entry::with_ttl(value, self.inner.clock.now_secs(), ttl_seconds);
        tracing::trace!(
            key = %truncate_key_for_log(&key),
            ttl_seconds,
            expires_at = ?entry.expires_at(),
            "SET"
        );

        self.inner.data.insert(key, entry);
    }

    /// Retrieves a value by key
    ///
    /// Returns `None` if the key doesn't exist or has expired.
    /// Expired entries are removed as part of the read.
    pub fn get(&self, key: &str) -> Option<V> {
        let now = self.inner.clock.now_secs();
        let Some(entry) = self.inner.data.get(key) else {
            tracing::trace!(key = %truncate_key_for_log(key), "GET miss");
            return None;
        };

        if entry.value().is_expired_at(now) {
            // The shard read guard must be released before taking the write guard
            drop(entry);
            self.remove_expired(key, now);
            return None;
        }

        tracing::trace!(key = %truncate_key_for_log(key), "GET hit");
        Some(entry.value().value().clone())
    }

    /// Checks if a key exists and is not expired.
    ///
    /// Expired entries are removed when checked, exactly as [`Cache::get`]
    /// does, but the value is not cloned.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        let now = self.inner.clock.now_secs();
        match self.inner.data.get(key) {
            Some(entry) => {
                if entry.value().is_expired_at(now) {
                    drop(entry);
                    self.remove_expired(key, now);
                    false
                } else {
                    true
                }
            }
            None => false,
        }
    }

    /// Returns the number of entries in the cache (including expired ones
    /// that no read has removed yet)
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.data.len()
    }

    /// Returns `true` if the cache holds no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.data.is_empty()
    }

    /// Removes `key` only if the entry stored under it is still expired as of
    /// `now`. A `set` that replaced the entry after the caller looked at it is
    /// left in place.
    fn remove_expired(&self, key: &str, now: i64) {
        if self
            .inner
            .data
            .remove_if(key, |_, entry| entry.is_expired_at(now))
            .is_some()
        {
            tracing::debug!(key = %truncate_key_for_log(key), now, "removed expired entry");
        }
    }
}

impl<V: Clone> Default for Cache<V> {
    fn default() -> Self {
        Self::new()
    }
}
