//! Handler for the nearby cafe search.

use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};
use serde_json::Value;

use crate::api::dto::places::{NearbyParams, query_rejection};
use crate::error::AppError;
use crate::state::AppState;

/// Lists cafes around a point.
///
/// # Endpoint
///
/// `GET /api/cafes/nearby?lat=40.7128&lng=-74.0060&radius=500`
///
/// # Query Parameters
///
/// - `lat` (required): Latitude in degrees, -90..=90
/// - `lng` (required): Longitude in degrees, -180..=180
/// - `radius` (required): Search radius in whole meters, 1..=50000
///
/// # Response
///
/// The provider's nearby search JSON, unchanged. Served from cache when an
/// entry exists for the same rounded coordinates and radius.
///
/// # Errors
///
/// Returns 400 Bad Request if a parameter is missing or invalid.
/// Returns 502 Bad Gateway if the provider call fails.
pub async fn nearby_handler(
    State(state): State<AppState>,
    params: Result<Query<NearbyParams>, QueryRejection>,
) -> Result<Json<Value>, AppError> {
    let Query(params) = params.map_err(query_rejection)?;
    let query = params.into_query()?;

    let body = state.place_service.nearby_cafes(&query).await?;

    Ok(Json(body))
}
