//! Redis cache provider implementation.

use std::time::Duration;

use async_trait::async_trait;
use redis::AsyncCommands;

use sprintdeck_core::error::{AppError, ErrorKind};
use sprintdeck_core::result::AppResult;
use sprintdeck_core::traits::cache::CacheProvider;

use super::client::RedisClient;

/// Redis-backed cache provider.
///
/// TTL enforcement is delegated to Redis itself via `SET ... EX`.
#[derive(Debug, Clone)]
pub struct RedisCacheProvider {
    /// Redis client.
    client: RedisClient,
    /// Default TTL.
    default_ttl: Duration,
}

impl RedisCacheProvider {
    /// Create a new Redis cache provider.
    pub fn new(client: RedisClient, default_ttl_seconds: u64) -> Self {
        Self {
            client,
            default_ttl: Duration::from_secs(default_ttl_seconds),
        }
    }

    /// Map a Redis error to an AppError.
    fn map_err(e: redis::RedisError) -> AppError {
        AppError::with_source(ErrorKind::Cache, format!("Redis error: {e}"), e)
    }
}

#[async_trait]
impl CacheProvider for RedisCacheProvider {
    async fn get(&self, key: &str) -> AppResult<Option<String>> {
        let full_key = self.client.prefixed_key(key);
        let mut conn = self.client.conn_mut();
        let result: Option<String> = conn.get(&full_key).await.map_err(Self::map_err)?;
        Ok(result)
    }

    async fn set(&self, key: &str, value: &str, ttl: Duration) -> AppResult<()> {
        let full_key = self.client.prefixed_key(key);
        let mut conn = self.client.conn_mut();
        let _: () = conn
            .set_ex(&full_key, value, ttl.as_secs())
            .await
            .map_err(Self::map_err)?;
        Ok(())
    }

    async fn set_default(&self, key: &str, value: &str) -> AppResult<()> {
        self.set(key, value, self.default_ttl).await
    }

    async fn delete(&self, key: &str) -> AppResult<()> {
        let full_key = self.client.prefixed_key(key);
        let mut conn = self.client.conn_mut();
        let _: () = conn.del(&full_key).await.map_err(Self::map_err)?;
        Ok(())
    }

    async fn exists(&self, key: &str) -> AppResult<bool> {
        let full_key = self.client.prefixed_key(key);
        let mut conn = self.client.conn_mut();
        let result: bool = conn.exists(&full_key).await.map_err(Self::map_err)?;
        Ok(result)
    }

    async fn health_check(&self) -> AppResult<bool> {
        let mut conn = self.client.conn_mut();
        let pong: String = redis::cmd("PING")
            .query_async(&mut conn)
            .await
            .map_err(Self::map_err)?;
        Ok(pong == "PONG")
    }

    async fn flush_all(&self) -> AppResult<()> {
        let mut conn = self.client.conn_mut();
        let _: () = redis::cmd("FLUSHDB")
            .query_async(&mut conn)
            .await
            .map_err(Self::map_err)?;
        Ok(())
    }
}
