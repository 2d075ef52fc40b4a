//! Shared TTL caches.
//!
//! Two caches sit in front of the planner: a geocode cache (location text →
//! coordinate, long-lived) and a response cache ((start, end) → full plan,
//! short-lived). Both are concurrent key/value stores with explicit expiry,
//! injected into the services that use them rather than held globally.
//!
//! Writes are last-write-wins. Each key is written at most once per TTL
//! window in normal operation, so there are no read-modify-write races.

use std::hash::Hash;
use std::time::Duration;

use moka::future::Cache as MokaCache;

/// Default TTL for geocoded locations: 24 hours.
pub const GEOCODE_TTL: Duration = Duration::from_secs(24 * 60 * 60);

/// Default TTL for planned route responses: 1 hour.
pub const RESPONSE_TTL: Duration = Duration::from_secs(60 * 60);

/// Configuration for a single cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// TTL for cached entries.
    pub ttl: Duration,

    /// Maximum number of cached entries.
    pub max_capacity: u64,
}

impl CacheConfig {
    /// Create a config with the given TTL and capacity.
    pub fn new(ttl: Duration, max_capacity: u64) -> Self {
        Self { ttl, max_capacity }
    }

    /// Defaults for the geocode cache.
    pub fn geocode() -> Self {
        Self::new(GEOCODE_TTL, 10_000)
    }

    /// Defaults for the route response cache.
    pub fn response() -> Self {
        Self::new(RESPONSE_TTL, 1000)
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self::response()
    }
}

/// A concurrent key/value cache with a fixed time-to-live.
///
/// Cheap to clone: clones share the same underlying store.
#[derive(Clone)]
pub struct TtlCache<K, V>
where
    K: Hash + Eq + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    entries: MokaCache<K, V>,
}

impl<K, V> TtlCache<K, V>
where
    K: Hash + Eq + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    /// Create a new cache with the given configuration.
    pub fn new(config: &CacheConfig) -> Self {
        let entries = MokaCache::builder()
            .time_to_live(config.ttl)
            .max_capacity(config.max_capacity)
            .build();

        Self { entries }
    }

    /// Get a cached entry, if present and not expired.
    pub async fn get(&self, key: &K) -> Option<V> {
        self.entries.get(key).await
    }

    /// Insert an entry, replacing any existing one for the key.
    pub async fn insert(&self, key: K, value: V) {
        self.entries.insert(key, value).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_configs() {
        let geocode = CacheConfig::geocode();
        assert_eq!(geocode.ttl, Duration::from_secs(86_400));
        assert_eq!(geocode.max_capacity, 10_000);

        let response = CacheConfig::default();
        assert_eq!(response.ttl, Duration::from_secs(3600));
        assert_eq!(response.max_capacity, 1000);
    }

    #[tokio::test]
    async fn insert_then_get() {
        let cache: TtlCache<String, u32> = TtlCache::new(&CacheConfig::default());
        assert_eq!(cache.get(&"a".to_string()).await, None);

        cache.insert("a".to_string(), 1).await;
        assert_eq!(cache.get(&"a".to_string()).await, Some(1));
    }

    #[tokio::test]
    async fn last_write_wins() {
        let cache: TtlCache<&'static str, u32> = TtlCache::new(&CacheConfig::default());
        cache.insert("k", 1).await;
        cache.insert("k", 2).await;
        assert_eq!(cache.get(&"k").await, Some(2));
    }

    #[tokio::test]
    async fn clones_share_entries() {
        let cache: TtlCache<u8, u8> = TtlCache::new(&CacheConfig::default());
        let other = cache.clone();
        cache.insert(1, 10).await;
        assert_eq!(other.get(&1).await, Some(10));
    }

    #[tokio::test]
    async fn entries_expire_after_ttl() {
        let config = CacheConfig::new(Duration::from_millis(50), 10);
        let cache: TtlCache<u8, u8> = TtlCache::new(&config);
        cache.insert(1, 1).await;
        tokio::time::sleep(Duration::from_millis(120)).await;
        assert_eq!(cache.get(&1).await, None);
    }
}
