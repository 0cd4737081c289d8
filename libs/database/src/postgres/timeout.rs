use sea_orm::DbErr;
use std::future::Future;
use std::time::Duration;
use tracing::warn;

use crate::common::{DatabaseError, DatabaseResult};

/// Time budget for a single-statement repository call.
pub const DEFAULT_STATEMENT_TIMEOUT: Duration = Duration::from_secs(5);

/// Run a database operation under a time budget.
///
/// On expiry the operation future is dropped, which cancels the in-flight
/// query, and `DatabaseError::Timeout` is returned. Nothing is retried.
///
/// # Example
/// ```ignore
/// let model = with_timeout(self.timeout, entity::Entity::find_by_id(id).one(&self.db)).await?;
/// ```
pub async fn with_timeout<T, F>(limit: Duration, operation: F) -> DatabaseResult<T>
where
    F: Future<Output = Result<T, DbErr>>,
{
    match tokio::time::timeout(limit, operation).await {
        Ok(result) => result.map_err(DatabaseError::from),
        Err(_) => {
            warn!(timeout_ms = limit.as_millis() as u64, "Database operation timed out");
            Err(DatabaseError::Timeout(limit))
        }
    }
}
