/// Represents a cached value with its absolute expiration time
///
/// `expires_at` is in whole seconds since the Unix epoch. `None` means the
/// entry never expires.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry<V> {
    value: V,
    expires_at: Option<i64>,
}

impl<V> Entry<V> {
    /// Creates a new entry with the given value and expiration time
    pub fn new(value: V, expires_at: Option<i64>) -> Self {
        Self { value, expires_at }
    }

    /// Creates an entry that expires `ttl_seconds` after `now`.
    ///
    /// A TTL of zero or below yields an entry that never expires.
    pub fn with_ttl(value: V, now: i64, ttl_seconds: i64) -> Self {
        let expires_at = (ttl_seconds > 0).then(|| now.saturating_add(ttl_seconds));
        Self::new(value, expires_at)
    }

    /// Returns a reference to the stored value
    pub fn value(&self) -> &V {
        &self.value
    }

    /// Consumes the entry, returning the stored value
    pub fn into_value(self) -> V {
        self.value
    }

    /// Returns the expiration time, or `None` if the entry never expires
    pub fn expires_at(&self) -> Option<i64> {
        self.expires_at
    }

    /// Checks if this entry has expired as of `now`.
    ///
    /// Only a time strictly after `expires_at` counts as expired; the
    /// expiration second itself still sees the entry.
    pub fn is_expired_at(&self, now: i64) -> bool {
        matches!(self.expires_at, Some(expires_at) if now > expires_at)
    }
}
