//! Validated query types accepted by the place service.

mod nearby_query;
mod place_id;

pub use nearby_query::{COORDINATE_SCALE, MAX_RADIUS_METERS, NearbyQuery};
pub use place_id::PlaceId;
