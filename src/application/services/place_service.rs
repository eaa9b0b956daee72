//! Cached access to the places provider.

use std::future::Future;
use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, warn};

use crate::domain::cache_key::{details_key, nearby_key};
use crate::domain::entities::{NearbyQuery, PlaceId};
use crate::error::AppError;
use crate::infrastructure::cache::CacheService;
use crate::infrastructure::places::{PlacesProvider, ProviderError};

/// Lifetime of every cached provider response: 30 days.
pub const CACHE_TTL_SECONDS: u64 = 30 * 24 * 60 * 60;

/// Read-through cache in front of the places provider.
///
/// Each lookup follows the same path:
///
/// 1. Derive the cache key from the validated query
/// 2. Cache hit: return the stored JSON, no provider call
/// 3. Cache miss: call the provider once
/// 4. Provider success: store under the same key, then return
/// 5. Provider failure: return [`AppError::Upstream`] and write nothing
///
/// Cache failures are soft. A failed read counts as a miss and a failed
/// write is logged while the provider result is still returned.
///
/// Concurrent misses on one key may each call the provider and each write;
/// the last write wins and all writes carry equivalent data.
pub struct PlaceService {
    provider: Arc<dyn PlacesProvider>,
    cache: Arc<dyn CacheService>,
}

impl PlaceService {
    /// Creates a new place service.
    pub fn new(provider: Arc<dyn PlacesProvider>, cache: Arc<dyn CacheService>) -> Self {
        Self { provider, cache }
    }

    /// Returns cafes around the queried point.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Upstream`] if the cache missed and the provider call failed.
    pub async fn nearby_cafes(&self, query: &NearbyQuery) -> Result<Value, AppError> {
        let key = nearby_key(query);
        self.read_through("nearby", &key, || self.provider.nearby_search(query))
            .await
    }

    /// Returns the details of one place.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Upstream`] if the cache missed and the provider call failed.
    pub async fn cafe_details(&self, place_id: &PlaceId) -> Result<Value, AppError> {
        let key = details_key(place_id);
        self.read_through("details", &key, || self.provider.place_details(place_id))
            .await
    }

    async fn read_through<F, Fut>(
        &self,
        kind: &'static str,
        key: &str,
        fetch: F,
    ) -> Result<Value, AppError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Value, ProviderError>>,
    {
        match self.cache.get_json(key).await {
            Ok(Some(cached)) => {
                debug!("Cache HIT for {}", key);
                metrics::counter!("cafehunt_cache_lookups_total", "kind" => kind, "result" => "hit")
                    .increment(1);
                return Ok(cached);
            }
            Ok(None) => {
                debug!("Cache MISS for {}", key);
                metrics::counter!("cafehunt_cache_lookups_total", "kind" => kind, "result" => "miss")
                    .increment(1);
            }
            Err(e) => {
                warn!("Cache read failed for {}, treating as miss: {}", key, e);
                metrics::counter!("cafehunt_cache_lookups_total", "kind" => kind, "result" => "error")
                    .increment(1);
            }
        }

        let value = match fetch().await {
            Ok(value) => {
                metrics::counter!("cafehunt_upstream_requests_total", "kind" => kind, "outcome" => "ok")
                    .increment(1);
                value
            }
            Err(e) => {
                warn!("Provider {} lookup failed for {}: {}", kind, key, e);
                metrics::counter!("cafehunt_upstream_requests_total", "kind" => kind, "outcome" => "error")
                    .increment(1);
                return Err(e.into());
            }
        };

        if let Err(e) = self.cache.set_json(key, &value, CACHE_TTL_SECONDS).await {
            warn!("Cache write failed for {}: {}", key, e);
        }

        Ok(value)
    }
}
