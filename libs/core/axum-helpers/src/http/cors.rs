use axum::http::{Method, header};
use tower_http::cors::{Any, CorsLayer};

use super::REQUEST_ID_HEADER;
use crate::pagination::X_TOTAL_COUNT;

/// Creates a CORS layer that accepts any origin.
///
/// Preflight `OPTIONS` requests are answered by the layer itself. The
/// pagination and request-id headers are exposed so browser clients can
/// read them.
pub fn create_permissive_cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .expose_headers([X_TOTAL_COUNT, REQUEST_ID_HEADER])
}
