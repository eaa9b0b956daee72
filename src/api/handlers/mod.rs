//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod banner;
pub mod details;
pub mod health;
pub mod nearby;

pub use banner::banner_handler;
pub use details::details_handler;
pub use health::health_handler;
pub use nearby::nearby_handler;
