//! Readiness check backed by a real database round trip.

use crate::state::AppState;
use axum::{
    extract::State,
    response::{IntoResponse, Response},
};
use axum_helpers::server::{HealthCheckFuture, run_health_checks};
use database::postgres::check_health;

/// Readiness check endpoint that runs `SELECT 1` against the pool, bounded by
/// the statement timeout.
pub async fn ready_handler(State(state): State<AppState>) -> Response {
    let limit = state.config.database.statement_timeout();
    let checks: Vec<(&str, HealthCheckFuture<'_>)> = vec![(
        "database",
        Box::pin(async move { check_health(&state.db, limit).await.map_err(|e| e.to_string()) }),
    )];

    run_health_checks(checks).await.into_response()
}
