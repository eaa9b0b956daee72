//! Business logic services for the application layer.

pub mod place_service;

pub use place_service::{CACHE_TTL_SECONDS, PlaceService};
