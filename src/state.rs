//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::PlaceService;
use crate::infrastructure::cache::CacheService;
use crate::infrastructure::places::PlacesProvider;

/// Handles shared by every request.
///
/// Holds no mutable state of its own; cloning only bumps reference counts.
#[derive(Clone)]
pub struct AppState {
    pub place_service: Arc<PlaceService>,
    pub cache: Arc<dyn CacheService>,
}

impl AppState {
    /// Wires the place service from a provider and a cache backend.
    pub fn new(provider: Arc<dyn PlacesProvider>, cache: Arc<dyn CacheService>) -> Self {
        let place_service = Arc::new(PlaceService::new(provider, cache.clone()));

        Self {
            place_service,
            cache,
        }
    }
}
