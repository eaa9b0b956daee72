//! Redis-backed cache implementation.

use super::service::{CacheError, CacheResult, CacheService};
use async_trait::async_trait;
use redis::{AsyncCommands, Client, aio::ConnectionManager};
use serde_json::Value;
use tracing::{debug, info};

/// Namespace prepended to every key this service writes.
const KEY_PREFIX: &str = "cafehunt:";

/// Redis cache for provider responses.
///
/// Uses connection pooling via `ConnectionManager` for efficient connection reuse.
/// Values are stored as serialized JSON strings with `SET key value EX ttl`,
/// a single atomic command, so an aborted request never leaves a partial entry.
pub struct RedisCache {
    client: ConnectionManager,
    key_prefix: String,
}

impl RedisCache {
    /// Connects to Redis and validates the connection with a PING.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::ConnectionError`] if the URL is invalid, the connection cannot
    /// be established, or the PING health check fails.
    pub async fn connect(redis_url: &str) -> CacheResult<Self> {
        info!("Connecting to Redis");

        let client = Client::open(redis_url).map_err(|e| {
            CacheError::ConnectionError(format!("Failed to create Redis client: {}", e))
        })?;

        let manager = ConnectionManager::new(client).await.map_err(|e| {
            CacheError::ConnectionError(format!("Failed to connect to Redis: {}", e))
        })?;

        let mut test_conn = manager.clone();
        test_conn
            .ping::<()>()
            .await
            .map_err(|e| CacheError::ConnectionError(format!("Redis PING failed: {}", e)))?;

        info!("Connected to Redis");

        Ok(Self {
            client: manager,
            key_prefix: KEY_PREFIX.to_string(),
        })
    }

    /// Constructs the full Redis key with namespace prefix.
    fn build_key(&self, key: &str) -> String {
        format!("{}{}", self.key_prefix, key)
    }
}

#[async_trait]
impl CacheService for RedisCache {
    async fn get_json(&self, key: &str) -> CacheResult<Option<Value>> {
        let full_key = self.build_key(key);
        let mut conn = self.client.clone();

        let raw = conn
            .get::<_, Option<String>>(&full_key)
            .await
            .map_err(|e| CacheError::OperationError(format!("GET {}: {}", key, e)))?;

        match raw {
            Some(raw) => {
                debug!("Redis HIT: {}", key);
                serde_json::from_str(&raw)
                    .map(Some)
                    .map_err(|e| CacheError::Corrupt(format!("{}: {}", key, e)))
            }
            None => {
                debug!("Redis MISS: {}", key);
                Ok(None)
            }
        }
    }

    async fn set_json(&self, key: &str, value: &Value, ttl_seconds: u64) -> CacheResult<()> {
        let full_key = self.build_key(key);
        let mut conn = self.client.clone();
        let payload = value.to_string();

        conn.set_ex::<_, _, ()>(&full_key, payload, ttl_seconds)
            .await
            .map_err(|e| CacheError::OperationError(format!("SET {}: {}", key, e)))?;

        debug!("Redis SET: {} (TTL: {}s)", key, ttl_seconds);
        Ok(())
    }

    async fn health_check(&self) -> bool {
        let mut conn = self.client.clone();
        conn.ping::<()>().await.is_ok()
    }

    fn backend(&self) -> &'static str {
        "redis"
    }
}
