//! HTTP middleware module.
//!
//! - CORS configuration
//! - Request ID generation/propagation and the request trace span
//!
//! # Example
//!
//! ```ignore
//! use axum_helpers::http::{create_permissive_cors_layer, make_request_span};
//!
//! let app = Router::new()
//!     .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
//!     .layer(create_permissive_cors_layer());
//! ```

pub mod cors;
pub mod request_id;

pub use cors::create_permissive_cors_layer;
pub use request_id::{
    REQUEST_ID_HEADER, make_request_span, propagate_request_id_layer, set_request_id_layer,
};
