//! Coordinate query for the nearby cafe search.

use serde_json::json;
use validator::Validate;

use crate::error::AppError;

/// Largest search radius the provider accepts, in meters.
pub const MAX_RADIUS_METERS: u32 = 50_000;

/// Coordinates are kept to four decimal places, roughly 11 m at the equator.
pub const COORDINATE_SCALE: f64 = 10_000.0;

fn normalize(coordinate: f64) -> f64 {
    // `+ 0.0` folds -0.0 into 0.0
    (coordinate * COORDINATE_SCALE).round() / COORDINATE_SCALE + 0.0
}

/// A validated nearby search: a point and a radius around it.
///
/// Coordinates are normalized to four decimals on construction. The cache key
/// and the provider request both read them from here, so every request that
/// shares a key also sends the provider the same point.
///
/// Only exists for the duration of one request.
#[derive(Debug, Clone, Copy, PartialEq, Validate)]
pub struct NearbyQuery {
    #[validate(range(min = -90.0, max = 90.0))]
    lat: f64,

    #[validate(range(min = -180.0, max = 180.0))]
    lng: f64,

    #[validate(range(min = 1, max = MAX_RADIUS_METERS))]
    radius: u32,
}

impl NearbyQuery {
    /// Builds a query, rejecting non-finite or out-of-range values, and
    /// rounds both coordinates to four decimals.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::MissingParameter`] naming the first offending field.
    pub fn new(lat: f64, lng: f64, radius: u32) -> Result<Self, AppError> {
        for (name, value) in [("lat", lat), ("lng", lng)] {
            if !value.is_finite() {
                return Err(AppError::missing_parameter(
                    format!("Parameter '{name}' must be a finite number"),
                    json!({ "parameter": name }),
                ));
            }
        }

        let query = Self { lat, lng, radius };

        query.validate().map_err(|errors| {
            let mut fields: Vec<String> = errors
                .field_errors()
                .keys()
                .map(|k| k.to_string())
                .collect();
            fields.sort();
            let field = fields.into_iter().next().unwrap_or_default();

            AppError::missing_parameter(
                format!("Parameter '{field}' is out of range"),
                json!({ "parameter": field }),
            )
        })?;

        Ok(Self {
            lat: normalize(lat),
            lng: normalize(lng),
            radius,
        })
    }

    pub fn lat(&self) -> f64 {
        self.lat
    }

    pub fn lng(&self) -> f64 {
        self.lng
    }

    /// Search radius in meters.
    pub fn radius(&self) -> u32 {
        self.radius
    }
}
