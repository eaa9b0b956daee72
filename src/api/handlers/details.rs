//! Handler for place details.

use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};
use serde_json::Value;

use crate::api::dto::places::{DetailsParams, query_rejection};
use crate::error::AppError;
use crate::state::AppState;

/// Returns the details of one cafe.
///
/// # Endpoint
///
/// `GET /api/cafe/details?placeId=ChIJN1t_tDeuEmsRUsoyG83frY4`
///
/// # Errors
///
/// Returns 400 Bad Request if `placeId` is missing or blank.
/// Returns 502 Bad Gateway if the provider call fails.
pub async fn details_handler(
    State(state): State<AppState>,
    params: Result<Query<DetailsParams>, QueryRejection>,
) -> Result<Json<Value>, AppError> {
    let Query(params) = params.map_err(query_rejection)?;
    let place_id = params.into_place_id()?;

    let body = state.place_service.cafe_details(&place_id).await?;

    Ok(Json(body))
}
