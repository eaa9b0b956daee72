//! Data Transfer Objects for API requests and responses.
//!
//! Query parameters arrive untyped; each DTO converts itself into a validated
//! domain query before any I/O happens.

pub mod health;
pub mod places;
