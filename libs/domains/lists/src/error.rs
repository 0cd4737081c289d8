use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use database::DatabaseError;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum ListError {
    #[error("List not found: {0}")]
    NotFound(Uuid),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type ListResult<T> = Result<T, ListError>;

impl From<DatabaseError> for ListError {
    fn from(err: DatabaseError) -> Self {
        ListError::Internal(err.to_string())
    }
}

/// Convert ListError to AppError for standardized error responses
impl From<ListError> for AppError {
    fn from(err: ListError) -> Self {
        match err {
            ListError::NotFound(id) => AppError::NotFound(format!("List {} not found", id)),
            ListError::Validation(msg) => AppError::validation(msg),
            ListError::Internal(msg) => AppError::Internal(msg),
        }
    }
}

impl IntoResponse for ListError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
