use sea_orm::{ConnectionTrait, DatabaseBackend, DatabaseConnection, DbErr, Statement};
use std::future::Future;
use std::time::{Duration, Instant};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, warn};

use super::timeout::with_timeout;
use crate::common::DatabaseError;

/// Check PostgreSQL database health
///
/// Executes `SELECT 1` to verify the pool can reach the server, giving up
/// after `limit`. Used by the readiness endpoint and the background probe.
pub async fn check_health(db: &DatabaseConnection, limit: Duration) -> Result<(), DatabaseError> {
    debug!("Running PostgreSQL health check");

    let stmt = Statement::from_string(DatabaseBackend::Postgres, "SELECT 1".to_owned());
    bounded_check(limit, db.query_one_raw(stmt)).await?;

    debug!("PostgreSQL health check passed");
    Ok(())
}

/// Every failure, a timeout included, surfaces as `HealthCheckFailed`.
async fn bounded_check<T, F>(limit: Duration, check: F) -> Result<(), DatabaseError>
where
    F: Future<Output = Result<T, DbErr>>,
{
    match with_timeout(limit, check).await {
        Ok(_) => Ok(()),
        Err(DatabaseError::Timeout(after)) => Err(DatabaseError::HealthCheckFailed(format!(
            "PostgreSQL health check timed out after {:?}",
            after
        ))),
        Err(e) => Err(DatabaseError::HealthCheckFailed(format!(
            "PostgreSQL health check failed: {}",
            e
        ))),
    }
}

/// Health check result for detailed status reporting
#[derive(Debug, Clone)]
pub struct HealthStatus {
    pub healthy: bool,
    pub message: Option<String>,
    pub response_time_ms: u64,
}

impl HealthStatus {
    pub fn healthy(response_time_ms: u64) -> Self {
        Self {
            healthy: true,
            message: None,
            response_time_ms,
        }
    }

    pub fn unhealthy(message: String, response_time_ms: u64) -> Self {
        Self {
            healthy: false,
            message: Some(message),
            response_time_ms,
        }
    }
}

/// Check PostgreSQL database health and report the round-trip time.
pub async fn check_health_detailed(db: &DatabaseConnection, limit: Duration) -> HealthStatus {
    let start = Instant::now();
    let result = check_health(db, limit).await;
    let elapsed = start.elapsed().as_millis() as u64;

    match result {
        Ok(_) => HealthStatus::healthy(elapsed),
        Err(e) => HealthStatus::unhealthy(e.to_string(), elapsed),
    }
}

/// Spawn a background task that probes the pool every `interval`, each probe
/// bounded by `limit`.
///
/// Failures are logged and never retried or escalated. Abort the returned
/// handle during shutdown, before the pool is closed.
pub fn spawn_health_probe(
    db: DatabaseConnection,
    interval: Duration,
    limit: Duration,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // first tick completes immediately; the pool was just verified at connect
        ticker.tick().await;

        loop {
            ticker.tick().await;
            let status = check_health_detailed(&db, limit).await;
            if status.healthy {
                debug!(response_time_ms = status.response_time_ms, "Database probe ok");
            } else {
                warn!(
                    response_time_ms = status.response_time_ms,
                    error = status.message.as_deref().unwrap_or_default(),
                    "Database probe failed"
                );
            }
        }
    })
}
