#![allow(dead_code)]

use async_trait::async_trait;
use axum_test::TestServer;
use cafehunt_api::application::services::CACHE_TTL_SECONDS;
use cafehunt_api::domain::entities::{NearbyQuery, PlaceId};
use cafehunt_api::infrastructure::cache::{CacheError, CacheResult, CacheService};
use cafehunt_api::infrastructure::places::{PlacesProvider, ProviderError};
use cafehunt_api::routes::app_router;
use cafehunt_api::state::AppState;
use serde_json::{Value, json};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// In-memory cache that records every call.
#[derive(Default)]
pub struct RecordingCache {
    entries: Mutex<HashMap<String, (Value, u64)>>,
    gets: AtomicUsize,
    sets: AtomicUsize,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
}

impl RecordingCache {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn gets(&self) -> usize {
        self.gets.load(Ordering::SeqCst)
    }

    pub fn sets(&self) -> usize {
        self.sets.load(Ordering::SeqCst)
    }

    pub fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.entries.lock().unwrap().keys().cloned().collect();
        keys.sort();
        keys
    }

    pub fn entry(&self, key: &str) -> Option<(Value, u64)> {
        self.entries.lock().unwrap().get(key).cloned()
    }

    pub fn insert(&self, key: &str, value: Value) {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), (value, CACHE_TTL_SECONDS));
    }

    pub fn fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }
}

#[async_trait]
impl CacheService for RecordingCache {
    async fn get_json(&self, key: &str) -> CacheResult<Option<Value>> {
        self.gets.fetch_add(1, Ordering::SeqCst);
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(CacheError::ConnectionError("connection refused".to_string()));
        }
        Ok(self.entries.lock().unwrap().get(key).map(|(v, _)| v.clone()))
    }

    async fn set_json(&self, key: &str, value: &Value, ttl_seconds: u64) -> CacheResult<()> {
        self.sets.fetch_add(1, Ordering::SeqCst);
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(CacheError::OperationError("READONLY".to_string()));
        }
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), (value.clone(), ttl_seconds));
        Ok(())
    }

    async fn health_check(&self) -> bool {
        !self.fail_reads.load(Ordering::SeqCst)
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}

/// Provider double that counts calls and can be switched into failure mode.
#[derive(Default)]
pub struct FakeProvider {
    nearby_calls: AtomicUsize,
    details_calls: AtomicUsize,
    nearby_requests: Mutex<Vec<(f64, f64, u32)>>,
    fail_status: Mutex<Option<u16>>,
}

impl FakeProvider {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn nearby_calls(&self) -> usize {
        self.nearby_calls.load(Ordering::SeqCst)
    }

    pub fn details_calls(&self) -> usize {
        self.details_calls.load(Ordering::SeqCst)
    }

    /// Point and radius of every nearby search that reached the provider.
    pub fn nearby_requests(&self) -> Vec<(f64, f64, u32)> {
        self.nearby_requests.lock().unwrap().clone()
    }

    pub fn fail_with(&self, status: Option<u16>) {
        *self.fail_status.lock().unwrap() = status;
    }

    fn outcome(&self, body: Value) -> Result<Value, ProviderError> {
        match *self.fail_status.lock().unwrap() {
            Some(status) => Err(ProviderError::Status(status)),
            None => Ok(body),
        }
    }
}

#[async_trait]
impl PlacesProvider for FakeProvider {
    async fn nearby_search(&self, query: &NearbyQuery) -> Result<Value, ProviderError> {
        let call = self.nearby_calls.fetch_add(1, Ordering::SeqCst) + 1;
        self.nearby_requests
            .lock()
            .unwrap()
            .push((query.lat(), query.lng(), query.radius()));
        self.outcome(json!({
            "status": "OK",
            "call": call,
            "results": [
                { "name": "Corner Cafe", "lat": query.lat(), "lng": query.lng() }
            ]
        }))
    }

    async fn place_details(&self, place_id: &PlaceId) -> Result<Value, ProviderError> {
        let call = self.details_calls.fetch_add(1, Ordering::SeqCst) + 1;
        self.outcome(json!({
            "status": "OK",
            "call": call,
            "result": { "place_id": place_id.as_str(), "name": "Corner Cafe" }
        }))
    }
}

pub fn create_test_server(provider: Arc<FakeProvider>, cache: Arc<RecordingCache>) -> TestServer {
    let state = AppState::new(provider, cache);
    TestServer::new(app_router(state)).unwrap()
}

pub fn assert_cors(response: &axum_test::TestResponse) {
    assert_eq!(response.header("access-control-allow-origin"), "*");
    assert_eq!(
        response.header("access-control-allow-methods"),
        "GET, POST, OPTIONS"
    );
    assert_eq!(response.header("access-control-allow-headers"), "Content-Type");
}
