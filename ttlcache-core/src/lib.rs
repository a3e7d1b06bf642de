//! # TTL Cache Core
//!
//! An in-memory key-value cache with per-entry time-to-live (TTL) support.
//!
//! ## Features
//!
//! - Thread-safe storage using `DashMap` (sharded reader-writer locking)
//! - Expiration on read only (lazy deletion, no background sweeper)
//! - Values of any `Clone` type, never inspected by the cache
//! - Pluggable [`Clock`] so expiry can be driven deterministically in tests
//!
//! ## Example
//!
//! ```rust
//! use ttlcache_core::Cache;
//!
//! let cache = Cache::new();
//!
//! // Keep the value for 20 seconds
//! cache.set("key1", 10, 20);
//! assert_eq!(cache.get("key1"), Some(10));
//!
//! // A TTL of zero (or below) never expires
//! cache.set("forever", 7, 0);
//! assert_eq!(cache.get("forever"), Some(7));
//!
//! assert_eq!(cache.get("missing"), None);
//! ```

mod cache;
mod clock;
mod config;
mod entry;

pub use cache::Cache;
pub use clock::{Clock, ManualClock, SystemClock};
pub use config::CacheConfig;
pub use entry::Entry;
