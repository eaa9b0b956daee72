//! Cross-origin permission headers.

use axum::{
    extract::Request,
    http::{
        HeaderMap, HeaderValue, Method, StatusCode,
        header::{
            ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS,
            ACCESS_CONTROL_ALLOW_ORIGIN,
        },
    },
    middleware::Next,
    response::{IntoResponse, Response},
};

pub const ALLOW_ORIGIN: &str = "*";
pub const ALLOW_METHODS: &str = "GET, POST, OPTIONS";
pub const ALLOW_HEADERS: &str = "Content-Type";

/// Answers pre-flight requests and stamps CORS headers on every response.
///
/// # Behavior
///
/// - `OPTIONS` on any path: `200 OK` with an empty body; no handler runs
/// - Everything else: the inner response, success or error, gains the headers
///
/// ```text
/// Access-Control-Allow-Origin: *
/// Access-Control-Allow-Methods: GET, POST, OPTIONS
/// Access-Control-Allow-Headers: Content-Type
/// ```
///
/// # Example
///
/// ```rust,ignore
/// let app = Router::new()
///     .route("/api/cafes/nearby", any(nearby_handler))
///     .layer(middleware::from_fn(cors::layer));
/// ```
pub async fn layer(req: Request, next: Next) -> Response {
    if req.method() == Method::OPTIONS {
        let mut response = StatusCode::OK.into_response();
        apply_headers(response.headers_mut());
        return response;
    }

    let mut response = next.run(req).await;
    apply_headers(response.headers_mut());
    response
}

/// Inserts the three permission headers, replacing existing values.
pub fn apply_headers(headers: &mut HeaderMap) {
    headers.insert(
        ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static(ALLOW_ORIGIN),
    );
    headers.insert(
        ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static(ALLOW_METHODS),
    );
    headers.insert(
        ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static(ALLOW_HEADERS),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Router, body::Body, middleware, routing::get};
    use tower::ServiceExt;

    fn app() -> Router {
        Router::new()
            .route("/teapot", get(|| async { StatusCode::IM_A_TEAPOT }))
            .layer(middleware::from_fn(layer))
    }

    fn assert_cors(headers: &HeaderMap) {
        assert_eq!(headers[ACCESS_CONTROL_ALLOW_ORIGIN], ALLOW_ORIGIN);
        assert_eq!(headers[ACCESS_CONTROL_ALLOW_METHODS], ALLOW_METHODS);
        assert_eq!(headers[ACCESS_CONTROL_ALLOW_HEADERS], ALLOW_HEADERS);
    }

    #[tokio::test]
    async fn test_options_short_circuits() {
        let response = app()
            .oneshot(
                axum::http::Request::builder()
                    .method(Method::OPTIONS)
                    .uri("/teapot")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_cors(response.headers());

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert!(body.is_empty());
    }

    #[tokio::test]
    async fn test_headers_added_to_inner_response() {
        let response = app()
            .oneshot(
                axum::http::Request::builder()
                    .uri("/teapot")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::IM_A_TEAPOT);
        assert_cors(response.headers());
    }
}
