/// Configuration for a cache instance
///
/// # Example
///
/// ```rust
/// use ttlcache_core::CacheConfig;
///
/// let config = CacheConfig::default()
///     .with_initial_capacity(1024);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CacheConfig {
    /// Number of entries to pre-allocate room for (default: 0)
    pub initial_capacity: usize,
}

impl CacheConfig {
    /// Creates a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the initial capacity
    ///
    /// This is only a sizing hint for the underlying map. The cache grows
    /// past it as needed and never evicts because of it.
    pub fn with_initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }
}
