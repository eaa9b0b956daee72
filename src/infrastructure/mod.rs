//! Infrastructure layer for external integrations.
//!
//! # Modules
//!
//! - [`cache`] - Caching abstractions (Redis and no-op implementations)
//! - [`places`] - Places provider client

pub mod cache;
pub mod places;
