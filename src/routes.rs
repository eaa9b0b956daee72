//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `OPTIONS *`            - Pre-flight, answered by the CORS middleware
//! - `/api/cafes/nearby`    - Nearby cafe search
//! - `/api/cafe/details`    - Place details
//! - `GET /health`          - Cache backend health
//! - anything else          - Plaintext service banner
//!
//! # Middleware
//!
//! - **CORS** - Permission headers on every response, pre-flight short-circuit
//! - **Tracing** - Structured request/response logging

use crate::api;
use crate::api::handlers::{banner_handler, health_handler};
use crate::api::middleware::{cors, tracing};
use crate::state::AppState;
use axum::routing::get;
use axum::{Router, middleware};

/// Constructs the application router with all routes and middleware.
///
/// Every request yields a response: unknown paths and unsupported methods on
/// `/health` fall through to the banner.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .merge(api::routes::place_routes())
        .route("/health", get(health_handler).fallback(banner_handler))
        .fallback(banner_handler)
        .with_state(state)
        .layer(middleware::from_fn(cors::layer))
        .layer(tracing::layer())
}
