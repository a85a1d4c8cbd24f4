use std::time::Duration;

use async_trait::async_trait;

use super::Result;

/// Key/value store with per-entry expiry.
///
/// Implementations know nothing about domain types; values are opaque bytes.
/// An expired entry is indistinguishable from one that was never set.
#[async_trait]
pub trait Cache: Send + Sync {
    /// Returns true if a live entry exists for `key`.
    async fn exists(&self, key: &str) -> Result<bool>;

    /// Gets a value from the cache by key.
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Sets a value that expires after `ttl`, truncated to whole seconds
    /// (minimum one second).
    async fn set(&self, key: &str, value: &[u8], ttl: Duration) -> Result<()>;
}

/// Truncates a TTL to the whole seconds a cache entry lives for.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use classboard_core::cache::ttl_seconds;
///
/// assert_eq!(ttl_seconds(Duration::from_millis(60_900)), 60);
/// assert_eq!(ttl_seconds(Duration::ZERO), 1);
/// ```
pub fn ttl_seconds(ttl: Duration) -> u64 {
    ttl.as_secs().max(1)
}
