//! Google Places web service client.

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, warn};

use super::provider::{PlacesProvider, ProviderError};
use crate::domain::entities::{NearbyQuery, PlaceId};

/// Category filter applied to every nearby search.
const CAFE_TYPE: &str = "cafe";

/// Body-level `status` values that denote success.
///
/// `ZERO_RESULTS` is an empty but valid answer and is cached like any other.
const ACCEPTED_STATUSES: [&str; 2] = ["OK", "ZERO_RESULTS"];

/// Client for the Google Places nearby search and details endpoints.
///
/// The API key is attached to every outbound request and never leaves this type.
#[derive(Clone)]
pub struct GooglePlacesClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl GooglePlacesClient {
    /// Builds a client.
    ///
    /// # Arguments
    ///
    /// - `base_url` - Endpoint root, e.g. `https://maps.googleapis.com/maps/api/place`
    /// - `api_key` - Provider credential
    /// - `timeout` - Per-request timeout
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::Transport`] if the HTTP client cannot be built.
    pub fn new(
        base_url: &str,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, ProviderError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ProviderError::Transport(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        })
    }

    async fn get_json(
        &self,
        endpoint: &str,
        params: &[(&str, String)],
    ) -> Result<Value, ProviderError> {
        let url = format!("{}/{}", self.base_url, endpoint);

        let response = self
            .client
            .get(&url)
            .query(params)
            .query(&[("key", self.api_key.as_str())])
            .send()
            .await
            .map_err(|e| ProviderError::Transport(e.without_url().to_string()))?;

        let status = response.status();
        if !status.is_success() {
            warn!("Provider {} returned HTTP {}", endpoint, status.as_u16());
            return Err(ProviderError::Status(status.as_u16()));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| ProviderError::Decode(e.without_url().to_string()))?;

        check_body_status(&body)?;
        debug!("Provider {} answered", endpoint);

        Ok(body)
    }
}

/// Rejects bodies whose `status` field reports a provider-side failure
/// such as `REQUEST_DENIED` or `OVER_QUERY_LIMIT`.
///
/// Bodies without a string `status` field are accepted as-is.
fn check_body_status(body: &Value) -> Result<(), ProviderError> {
    match body.get("status").and_then(Value::as_str) {
        Some(status) if !ACCEPTED_STATUSES.contains(&status) => {
            warn!("Provider rejected request: {}", status);
            Err(ProviderError::Rejected(status.to_string()))
        }
        _ => Ok(()),
    }
}

impl fmt::Debug for GooglePlacesClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GooglePlacesClient")
            .field("base_url", &self.base_url)
            .field("api_key", &"***")
            .finish()
    }
}

#[async_trait]
impl PlacesProvider for GooglePlacesClient {
    async fn nearby_search(&self, query: &NearbyQuery) -> Result<Value, ProviderError> {
        let params = [
            ("location", format!("{:.4},{:.4}", query.lat(), query.lng())),
            ("radius", query.radius().to_string()),
            ("type", CAFE_TYPE.to_string()),
        ];
        self.get_json("nearbysearch/json", &params).await
    }

    async fn place_details(&self, place_id: &PlaceId) -> Result<Value, ProviderError> {
        let params = [("place_id", place_id.as_str().to_string())];
        self.get_json("details/json", &params).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_accepts_ok_and_zero_results() {
        assert!(check_body_status(&json!({"status": "OK", "results": []})).is_ok());
        assert!(check_body_status(&json!({"status": "ZERO_RESULTS", "results": []})).is_ok());
    }

    #[test]
    fn test_accepts_body_without_status() {
        assert!(check_body_status(&json!({"results": []})).is_ok());
        assert!(check_body_status(&json!([1, 2, 3])).is_ok());
    }

    #[test]
    fn test_rejects_failure_status() {
        match check_body_status(&json!({"status": "REQUEST_DENIED"})) {
            Err(ProviderError::Rejected(s)) => assert_eq!(s, "REQUEST_DENIED"),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_debug_masks_api_key() {
        let client = GooglePlacesClient::new(
            "https://example.test/place/",
            "super-secret",
            Duration::from_secs(5),
        )
        .unwrap();

        let rendered = format!("{client:?}");
        assert!(!rendered.contains("super-secret"));
        assert!(rendered.contains("https://example.test/place"));
    }
}
