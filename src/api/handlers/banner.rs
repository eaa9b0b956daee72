//! Handler for every path the service does not recognize.

/// Plaintext body identifying the service.
pub const BANNER: &str = "CafeHunt API Server";

/// Returns the service banner with `200 OK`.
///
/// Registered as the router fallback, so any method on any unknown path
/// ends up here.
pub async fn banner_handler() -> &'static str {
    BANNER
}
