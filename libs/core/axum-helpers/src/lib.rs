//! # Axum Helpers
//!
//! Shared building blocks for the HTTP layer of the workspace's services.
//!
//! ## Modules
//!
//! - **[`server`]**: Router setup, health checks, graceful shutdown
//! - **[`http`]**: HTTP middleware (CORS, request ids)
//! - **[`errors`]**: The uniform error envelope and error codes
//! - **[`extractors`]**: Body and path extractors that reject with [`AppError`]
//! - **[`pagination`]**: Lenient `limit`/`offset` parsing and `X-Total-Count`
//!
//! ## Quick Start
//!
//! ```ignore
//! use axum::Router;
//! use axum_helpers::server::{create_production_app, create_router};
//! use core_config::server::ServerConfig;
//! use utoipa::OpenApi;
//!
//! #[derive(OpenApi)]
//! #[openapi(paths())]
//! struct ApiDoc;
//!
//! #[tokio::main]
//! async fn main() -> std::io::Result<()> {
//!     let api_routes = Router::new(); // Add your routes
//!     let router = create_router::<ApiDoc>(api_routes, Router::new());
//!
//!     let config = ServerConfig::default();
//!     create_production_app(router, &config, async {}).await
//! }
//! ```

pub mod errors;
pub mod extractors;
pub mod http;
pub mod pagination;
pub mod server;

// Re-export server types
pub use server::{
    HealthCheckFuture, HealthResponse, ShutdownCoordinator, create_production_app, create_router,
    health_router, run_health_checks,
};

// Re-export HTTP middleware
pub use http::{REQUEST_ID_HEADER, create_permissive_cors_layer};

// Re-export error types
pub use errors::{AppError, ErrorCode, ErrorResponse};

// Re-export extractors
pub use extractors::{JsonBody, UuidPath};

// Re-export pagination
pub use pagination::{PageParams, Paginated, Pagination, X_TOTAL_COUNT};
