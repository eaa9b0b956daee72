//! Application layer services implementing business logic.
//!
//! Services coordinate the cache and the places provider and give HTTP
//! handlers a small, typed API.
//!
//! # Available Services
//!
//! - [`services::place_service::PlaceService`] - Cached nearby search and place details

pub mod services;
