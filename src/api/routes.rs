//! API route configuration.

use crate::api::handlers::{details_handler, nearby_handler};
use crate::state::AppState;
use axum::{Router, routing::any};

pub const NEARBY_PATH: &str = "/api/cafes/nearby";
pub const DETAILS_PATH: &str = "/api/cafe/details";

/// Cafe lookup routes.
///
/// Dispatch is by path only; any method reaches the handler, which reads its
/// parameters from the query string.
///
/// # Endpoints
///
/// - `/api/cafes/nearby` - Nearby cafe search (`lat`, `lng`, `radius`)
/// - `/api/cafe/details` - Place details (`placeId`)
pub fn place_routes() -> Router<AppState> {
    Router::new()
        .route(NEARBY_PATH, any(nearby_handler))
        .route(DETAILS_PATH, any(details_handler))
}
