//! Cache-aside manager: read-through with TTL, write-invalidate on mutation.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use sprintdeck_core::result::AppResult;
use sprintdeck_core::traits::cache::CacheProvider;

use crate::provider::CacheManager;

/// Maintains cache/store consistency for logical resources identified by
/// cache keys.
///
/// Reads go through the cache (`read_through`); mutations go to the store
/// first and synchronously invalidate the affected keys before the call
/// returns (`write_through`). The new value is never written back
/// speculatively, since the authoritative post-write shape may differ from
/// what was submitted.
///
/// There is no cross-request lock: a read racing a concurrent write may
/// observe pre- or post-invalidation state, with staleness bounded by the
/// TTL.
#[derive(Debug, Clone)]
pub struct CacheAside {
    /// The shared cache store.
    cache: Arc<CacheManager>,
    /// TTL applied when a caller does not supply one.
    default_ttl: Duration,
}

impl CacheAside {
    /// Creates a new cache-aside manager.
    pub fn new(cache: Arc<CacheManager>, default_ttl: Duration) -> Self {
        Self { cache, default_ttl }
    }

    /// Returns the default TTL.
    pub fn default_ttl(&self) -> Duration {
        self.default_ttl
    }

    /// Reads `key` through the cache.
    ///
    /// A fresh hit is returned without calling `loader`. On miss or expiry,
    /// `loader` is awaited, its result stored under `key` with `ttl`, and
    /// returned. A loader failure propagates unchanged and nothing is cached.
    pub async fn read_through<T, F, Fut>(&self, key: &str, ttl: Duration, loader: F) -> AppResult<T>
    where
        T: Serialize + DeserializeOwned + Send + Sync,
        F: FnOnce() -> Fut,
        Fut: Future<Output = AppResult<T>>,
    {
        if let Some(cached) = self.cache.get_json::<T>(key).await? {
            debug!(key, "cache hit");
            return Ok(cached);
        }

        debug!(key, "cache miss, loading from store");
        let value = loader().await?;
        self.cache.set_json(key, &value, ttl).await?;
        Ok(value)
    }

    /// Reads `key` through the cache with the default TTL.
    pub async fn read_through_default<T, F, Fut>(&self, key: &str, loader: F) -> AppResult<T>
    where
        T: Serialize + DeserializeOwned + Send + Sync,
        F: FnOnce() -> Fut,
        Fut: Future<Output = AppResult<T>>,
    {
        self.read_through(key, self.default_ttl, loader).await
    }

    /// Runs a mutation and invalidates `key` on success.
    ///
    /// `writer` runs first; only when it succeeds is the cache entry deleted,
    /// so a subsequent read recomputes from the store. A writer failure
    /// propagates and leaves the cache untouched.
    pub async fn write_through<T, F, Fut>(&self, key: &str, writer: F) -> AppResult<T>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = AppResult<T>>,
    {
        self.write_through_keys(std::slice::from_ref(&key), writer)
            .await
    }

    /// Runs a mutation and invalidates every key in `keys` on success.
    ///
    /// All invalidations complete before the mutation is reported successful
    /// to the caller, so no request sequenced after it can observe a value
    /// older than the mutation.
    pub async fn write_through_keys<T, F, Fut>(&self, keys: &[&str], writer: F) -> AppResult<T>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = AppResult<T>>,
    {
        let value = writer().await?;
        for key in keys {
            debug!(key, "invalidating cache entry after write");
            self.cache.delete(key).await?;
        }
        Ok(value)
    }
}
