use axum_helpers::server::{create_production_app, create_router, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use database::postgres::{connect_from_config, spawn_health_probe};
use todo_api::{api, config::Config, openapi::ApiDoc, state::AppState};
use tracing::info;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for colored error output (before any fallible operations)
    install_color_eyre();

    let config = Config::from_env()?;

    init_tracing(&config.environment);

    info!(
        max_connections = config.database.max_connections,
        "Connecting to PostgreSQL"
    );
    let db = connect_from_config(config.database.clone())
        .await
        .map_err(|e| eyre::eyre!("PostgreSQL connection failed: {}", e))?;

    let probe = spawn_health_probe(
        db.clone(),
        config.database.health_check_interval(),
        config.database.statement_timeout(),
    );

    let server_config = config.server.clone();
    let state = AppState { config, db };

    // Build router with API routes (pass reference, not ownership!)
    let api_routes = api::routes(&state);

    // - /health: liveness, no dependencies
    // - /ready: round trip to the database
    let operational = health_router().merge(api::ready_router(state.clone()));
    let app = create_router::<ApiDoc>(api_routes, operational);

    create_production_app(app, &server_config, async move {
        info!("Shutting down: closing database connections");
        probe.abort();

        match state.db.close().await {
            Ok(_) => info!("PostgreSQL connection closed successfully"),
            Err(e) => tracing::error!("Error closing PostgreSQL: {}", e),
        }
    })
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Todo API shutdown complete");
    Ok(())
}
