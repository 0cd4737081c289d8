//! JSON body extractor that reports decode failures in the error envelope.

use crate::errors::AppError;
use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;

/// JSON request body.
///
/// Unlike `axum::Json` the body is decoded regardless of `Content-Type`, and
/// every failure (syntax, wrong type, missing field) is a 400
/// `VALIDATION_FAILED` with the decoder message in `details`. Field-level
/// rules are checked by the services, not here.
///
/// # Example
/// ```ignore
/// use axum_helpers::extractors::JsonBody;
///
/// async fn create_list(JsonBody(input): JsonBody<CreateList>) -> impl IntoResponse {
///     // ...
/// }
/// ```
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| AppError::InvalidJson(e.body_text()))?;

        serde_json::from_slice(&bytes)
            .map(JsonBody)
            .map_err(|e| AppError::InvalidJson(e.to_string()))
    }
}
