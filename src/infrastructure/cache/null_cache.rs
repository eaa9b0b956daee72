//! No-op cache implementation for disabled caching.

use super::service::{CacheResult, CacheService};
use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

/// A cache implementation that does nothing.
///
/// Every lookup misses, so each request goes to the provider.
///
/// # Use Cases
///
/// - Development environments without Redis
/// - Fallback when the Redis connection fails at startup
pub struct NullCache;

impl NullCache {
    /// Creates a new NullCache instance.
    pub fn new() -> Self {
        debug!("Using NullCache (caching disabled)");
        Self
    }
}

impl Default for NullCache {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CacheService for NullCache {
    async fn get_json(&self, _key: &str) -> CacheResult<Option<Value>> {
        Ok(None)
    }

    async fn set_json(&self, _key: &str, _value: &Value, _ttl_seconds: u64) -> CacheResult<()> {
        Ok(())
    }

    async fn health_check(&self) -> bool {
        true
    }

    fn backend(&self) -> &'static str {
        "none"
    }
}
