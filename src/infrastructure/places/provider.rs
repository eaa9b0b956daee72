//! Places provider trait and error types.

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

use crate::domain::entities::{NearbyQuery, PlaceId};

/// Ways a provider call can fail.
///
/// Messages never include the request URL, which carries the API key.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("Provider request failed: {0}")]
    Transport(String),
    #[error("Provider returned HTTP {0}")]
    Status(u16),
    #[error("Provider returned an unreadable body: {0}")]
    Decode(String),
    #[error("Provider rejected the request with status {0}")]
    Rejected(String),
}

/// Third-party places search service.
///
/// Responses are returned as opaque JSON and passed through unchanged.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PlacesProvider: Send + Sync {
    /// Searches for cafes around a point.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError`] on network failure, non-success status,
    /// or an undecodable body.
    async fn nearby_search(&self, query: &NearbyQuery) -> Result<Value, ProviderError>;

    /// Fetches the details of a single place.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError`] on network failure, non-success status,
    /// or an undecodable body.
    async fn place_details(&self, place_id: &PlaceId) -> Result<Value, ProviderError>;
}
