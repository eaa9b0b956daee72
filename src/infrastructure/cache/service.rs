//! Cache service trait and error types.

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

/// Errors that can occur during cache operations.
///
/// Callers treat every variant as a soft failure: a failed read is a miss,
/// a failed write is logged and skipped.
#[derive(Debug, Error)]
pub enum CacheError {
    #[error("Cache connection error: {0}")]
    ConnectionError(String),
    #[error("Cache operation error: {0}")]
    OperationError(String),
    #[error("Cached value is not valid JSON: {0}")]
    Corrupt(String),
}

/// Result type for cache operations.
pub type CacheResult<T> = Result<T, CacheError>;

/// Key-value store for provider responses.
///
/// Only `get` and `set` are ever issued against the store; entries are never
/// deleted or updated in place, they simply expire or get overwritten.
///
/// # Implementations
///
/// - [`crate::infrastructure::cache::RedisCache`] - Redis-backed cache with TTL support
/// - [`crate::infrastructure::cache::NullCache`] - No-op implementation for disabled caching
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CacheService: Send + Sync {
    /// Retrieves a cached JSON document.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(value))` on cache hit
    /// - `Ok(None)` on cache miss
    ///
    /// # Errors
    ///
    /// Returns [`CacheError`] if the backend is unreachable or the stored
    /// value cannot be decoded.
    async fn get_json(&self, key: &str) -> CacheResult<Option<Value>>;

    /// Stores a JSON document with a TTL in seconds.
    ///
    /// Overwrites any existing entry under the same key.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError`] if the backend rejects the write.
    async fn set_json(&self, key: &str, value: &Value, ttl_seconds: u64) -> CacheResult<()>;

    /// Checks if the cache backend is healthy.
    ///
    /// Used by the health endpoint to report cache status.
    async fn health_check(&self) -> bool;

    /// Short backend name for logs and health output.
    fn backend(&self) -> &'static str;
}
