//! Cache key derivation.
//!
//! Lookup and store must go through the same function for a given handler,
//! so these are the only places keys are built.
//!
//! # Key Format
//!
//! - Nearby search: `nearby:{lat_e4}:{lng_e4}:{radius}`
//! - Place details: `details:{place_id}`
//!
//! [`NearbyQuery`] already holds coordinates rounded to four decimals, the
//! same values the provider is asked about. The key stores them as integers
//! scaled by 10 000, so textual variations of one point such as `40.7128` and
//! `40.71280` share an entry and there is no `-0.0000` / `0.0000` split.

use crate::domain::entities::{COORDINATE_SCALE, NearbyQuery, PlaceId};

pub const NEARBY_NAMESPACE: &str = "nearby";
pub const DETAILS_NAMESPACE: &str = "details";

fn scale(coordinate: f64) -> i64 {
    (coordinate * COORDINATE_SCALE).round() as i64
}

/// Cache key for a nearby search.
pub fn nearby_key(query: &NearbyQuery) -> String {
    format!(
        "{}:{}:{}:{}",
        NEARBY_NAMESPACE,
        scale(query.lat()),
        scale(query.lng()),
        query.radius()
    )
}

/// Cache key for a place details lookup.
pub fn details_key(place_id: &PlaceId) -> String {
    format!("{}:{}", DETAILS_NAMESPACE, place_id.as_str())
}
