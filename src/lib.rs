//! # CafeHunt API
//!
//! An edge gateway for nearby cafe search, built with Axum. It proxies
//! nearby-search and place-details lookups to Google Places so the provider
//! API key never reaches clients, and caches provider responses in Redis for
//! 30 days to avoid repeated upstream calls.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Validated queries and cache key derivation
//! - **Application Layer** ([`application`]) - Read-through cache in front of the provider
//! - **Infrastructure Layer** ([`infrastructure`]) - Redis cache and Google Places client
//! - **API Layer** ([`api`]) - Handlers, query DTOs, CORS and tracing middleware
//!
//! ## Endpoints
//!
//! - `GET /api/cafes/nearby?lat=..&lng=..&radius=..`
//! - `GET /api/cafe/details?placeId=..`
//! - `GET /health`
//! - `OPTIONS *` - CORS pre-flight
//!
//! ## Quick Start
//!
//! ```bash
//! export GOOGLE_PLACES_API_KEY="..."
//! export REDIS_URL="redis://localhost:6379"  # Optional
//!
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::PlaceService;
    pub use crate::domain::entities::{NearbyQuery, PlaceId};
    pub use crate::error::AppError;
    pub use crate::infrastructure::cache::{CacheError, CacheResult, CacheService};
    pub use crate::infrastructure::places::{PlacesProvider, ProviderError};
    pub use crate::state::AppState;
}
