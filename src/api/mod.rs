//! REST API layer for HTTP request/response handling.
//!
//! This layer translates HTTP requests into place service calls and formats
//! responses according to API contracts.
//!
//! # Modules
//!
//! - [`dto`] - Query parameter parsing and response bodies
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - CORS and tracing middleware
//! - [`routes`] - Route configuration

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
