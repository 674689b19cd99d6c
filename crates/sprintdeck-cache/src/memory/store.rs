//! In-memory cache implementation using the moka crate.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use moka::future::Cache;

use sprintdeck_core::config::cache::MemoryCacheConfig;
use sprintdeck_core::result::AppResult;
use sprintdeck_core::traits::cache::CacheProvider;

/// A cached value with its absolute expiry.
///
/// Expiry is carried per entry and checked lazily on read, so a value is
/// never served past its TTL even though moka's cache-level TTL is coarser.
#[derive(Debug, Clone)]
struct CachedEntry {
    value: String,
    expires_at: Instant,
}

impl CachedEntry {
    fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }
}

/// In-memory cache provider using moka.
#[derive(Debug, Clone)]
pub struct MemoryCacheProvider {
    /// The underlying moka cache.
    cache: Cache<String, CachedEntry>,
    /// Default TTL for entries.
    default_ttl: Duration,
}

impl MemoryCacheProvider {
    /// Create a new in-memory cache from configuration.
    pub fn new(config: &MemoryCacheConfig, default_ttl_seconds: u64) -> Self {
        let cache = Cache::builder().max_capacity(config.max_capacity).build();

        Self {
            cache,
            default_ttl: Duration::from_secs(default_ttl_seconds),
        }
    }
}

#[async_trait]
impl CacheProvider for MemoryCacheProvider {
    async fn get(&self, key: &str) -> AppResult<Option<String>> {
        match self.cache.get(key).await {
            Some(entry) if entry.is_expired() => {
                self.cache.invalidate(key).await;
                Ok(None)
            }
            Some(entry) => Ok(Some(entry.value)),
            None => Ok(None),
        }
    }

    async fn set(&self, key: &str, value: &str, ttl: Duration) -> AppResult<()> {
        let entry = CachedEntry {
            value: value.to_string(),
            expires_at: Instant::now() + ttl,
        };
        self.cache.insert(key.to_string(), entry).await;
        Ok(())
    }

    async fn set_default(&self, key: &str, value: &str) -> AppResult<()> {
        self.set(key, value, self.default_ttl).await
    }

    async fn delete(&self, key: &str) -> AppResult<()> {
        self.cache.invalidate(key).await;
        Ok(())
    }

    async fn exists(&self, key: &str) -> AppResult<bool> {
        Ok(self.get(key).await?.is_some())
    }

    async fn health_check(&self) -> AppResult<bool> {
        Ok(true)
    }

    async fn flush_all(&self) -> AppResult<()> {
        self.cache.invalidate_all();
        Ok(())
    }
}
