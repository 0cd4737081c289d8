//! UUID path parameter extractor with automatic validation.

use crate::errors::AppError;
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use uuid::Uuid;

/// Extractor for a single UUID path parameter.
///
/// A segment that is not a UUID is a validation failure (400), not a 404.
///
/// # Example
/// ```ignore
/// use axum::routing::get;
/// use axum_helpers::extractors::UuidPath;
///
/// async fn get_list(UuidPath(id): UuidPath) -> String {
///     format!("List ID: {}", id)
/// }
///
/// let app = Router::new().route("/lists/{id}", get(get_list));
/// ```
pub struct UuidPath(pub Uuid);

impl<S> FromRequestParts<S> for UuidPath
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::Validation {
                message: "Invalid identifier".to_string(),
                details: e.body_text(),
            })?;

        Uuid::parse_str(&raw)
            .map(UuidPath)
            .map_err(|_| AppError::Validation {
                message: "Invalid identifier".to_string(),
                details: format!("'{}' is not a valid UUID", raw),
            })
    }
}
