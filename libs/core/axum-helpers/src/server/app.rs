use super::shutdown::ShutdownCoordinator;
use crate::errors::handlers::not_found;
use crate::http::{
    create_permissive_cors_layer, make_request_span, propagate_request_id_layer,
    set_request_id_layer,
};
use axum::Router;
use core_config::server::ServerConfig;
use std::future::{Future, IntoFuture};
use std::io;
use tower_http::trace::{DefaultOnResponse, TraceLayer};
use tracing::{Level, info, warn};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Creates the application router with documentation and cross-cutting layers.
///
/// This function sets up:
/// - Swagger UI at `/swagger-ui`, OpenAPI document at `/api-docs/openapi.json`
/// - API routes nested under `/api`
/// - `operational` routes (`/health`, `/ready`) at the root
/// - Request tracing with a generated/propagated `x-request-id`
/// - Permissive CORS
/// - A JSON 404 fallback
///
/// Layers wrap every route above, so nothing should be merged into the
/// returned router afterwards.
///
/// # Example
/// ```ignore
/// #[derive(OpenApi)]
/// #[openapi(paths(/* your paths */))]
/// struct ApiDoc;
///
/// let api_routes = Router::new().nest("/v1/lists", lists_router);
/// let router = create_router::<ApiDoc>(api_routes, health_router());
/// ```
pub fn create_router<T>(apis: Router, operational: Router) -> Router
where
    T: OpenApi + 'static,
{
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", T::openapi()))
        .nest("/api", apis)
        .merge(operational)
        .fallback(not_found)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(make_request_span)
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(propagate_request_id_layer())
        .layer(set_request_id_layer())
        .layer(create_permissive_cors_layer())
}

/// Serve `router` until SIGINT/SIGTERM, then drain and clean up.
///
/// Shutdown sequence:
/// 1. stop accepting connections and let in-flight requests finish, for at
///    most `server_config.shutdown_timeout`
/// 2. run `cleanup` (close pools, stop background tasks), bounded by the
///    same timeout
///
/// # Example
/// ```ignore
/// create_production_app(router, &config.server, async move {
///     db.close().await.ok();
/// })
/// .await?;
/// ```
pub async fn create_production_app<F>(
    router: Router,
    server_config: &ServerConfig,
    cleanup: F,
) -> io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let shutdown_timeout = server_config.shutdown_timeout;
    let (coordinator, _rx) = ShutdownCoordinator::new();

    let listener = tokio::net::TcpListener::bind(server_config.address()).await?;
    info!("Server starting on {}", listener.local_addr()?);

    let signal_handle = {
        let coordinator = coordinator.clone();
        tokio::spawn(async move { coordinator.wait_for_signal().await })
    };

    let graceful = {
        let coordinator = coordinator.clone();
        async move { coordinator.wait_for_shutdown().await }
    };

    let drain_deadline = {
        let coordinator = coordinator.clone();
        async move {
            coordinator.wait_for_shutdown().await;
            tokio::time::sleep(shutdown_timeout).await;
        }
    };

    let server = axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(graceful)
        .into_future();

    let serve_result = tokio::select! {
        result = server => result.inspect_err(|e| {
            tracing::error!("Server encountered an error: {:?}", e);
        }),
        _ = drain_deadline => {
            warn!(
                "In-flight requests did not drain within {:?}, forcing shutdown",
                shutdown_timeout
            );
            Ok(())
        }
    };

    signal_handle.abort();

    info!("Starting cleanup tasks (timeout: {:?})", shutdown_timeout);
    match tokio::time::timeout(shutdown_timeout, cleanup).await {
        Ok(_) => info!("Cleanup completed successfully"),
        Err(_) => warn!(
            "Cleanup exceeded timeout of {:?}, forcing shutdown",
            shutdown_timeout
        ),
    }

    serve_result
}
