//! Query parameters for the cafe endpoints.

use std::str::FromStr;

use axum::extract::rejection::QueryRejection;
use serde::Deserialize;
use serde_json::json;

use crate::domain::entities::{NearbyQuery, PlaceId};
use crate::error::AppError;

/// Raw query string of `/api/cafes/nearby`.
///
/// Fields stay strings so that absent and malformed values both surface as
/// [`AppError::MissingParameter`] instead of a framework rejection.
#[derive(Debug, Default, Deserialize)]
pub struct NearbyParams {
    pub lat: Option<String>,
    pub lng: Option<String>,
    pub radius: Option<String>,
}

impl NearbyParams {
    /// Parses and validates into a [`NearbyQuery`].
    ///
    /// # Errors
    ///
    /// Returns [`AppError::MissingParameter`] if a value is absent, not a
    /// number, or out of range. `radius` must be a whole number of meters.
    pub fn into_query(self) -> Result<NearbyQuery, AppError> {
        let lat = required::<f64>("lat", self.lat)?;
        let lng = required::<f64>("lng", self.lng)?;
        let radius = required::<u32>("radius", self.radius)?;

        NearbyQuery::new(lat, lng, radius)
    }
}

/// Raw query string of `/api/cafe/details`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailsParams {
    pub place_id: Option<String>,
}

impl DetailsParams {
    /// Parses into a [`PlaceId`].
    ///
    /// # Errors
    ///
    /// Returns [`AppError::MissingParameter`] if `placeId` is absent or blank.
    pub fn into_place_id(self) -> Result<PlaceId, AppError> {
        match self.place_id {
            Some(raw) => PlaceId::new(raw),
            None => Err(missing("placeId")),
        }
    }
}

/// Maps an undecodable query string to a client error.
pub fn query_rejection(rejection: QueryRejection) -> AppError {
    AppError::missing_parameter(
        "Invalid query string",
        json!({ "reason": rejection.body_text() }),
    )
}

fn missing(name: &str) -> AppError {
    AppError::missing_parameter(
        format!("Missing required parameter '{name}'"),
        json!({ "parameter": name }),
    )
}

fn required<T: FromStr>(name: &str, raw: Option<String>) -> Result<T, AppError> {
    let raw = raw.ok_or_else(|| missing(name))?;
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(missing(name));
    }

    raw.parse().map_err(|_| {
        AppError::missing_parameter(
            format!("Parameter '{name}' is not a valid number"),
            json!({ "parameter": name, "value": raw }),
        )
    })
}
