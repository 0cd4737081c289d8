use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::{Validate, ValidationErrors};

/// List entity - a named container of tasks
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct List {
    /// Unique identifier
    pub id: Uuid,
    /// List title (1..100 characters)
    pub title: String,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl List {
    pub fn new(input: CreateList) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: input.title,
            created_at: Utc::now(),
        }
    }
}

/// DTO for creating a new list
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateList {
    #[validate(length(min = 1, max = 100, message = "title must be 1..100 chars"))]
    #[schema(min_length = 1, max_length = 100, example = "Groceries")]
    pub title: String,
}

/// DTO for renaming a list
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateList {
    #[validate(length(min = 1, max = 100, message = "title must be 1..100 chars"))]
    #[schema(min_length = 1, max_length = 100, example = "Weekend groceries")]
    pub title: String,
}

/// Query parameters for title search
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchQuery {
    /// Case-insensitive substring of the title
    pub q: Option<String>,
}

/// First human-readable message out of a validator failure.
pub(crate) fn validation_message(errors: &ValidationErrors) -> String {
    errors
        .field_errors()
        .values()
        .flat_map(|errs| errs.iter())
        .find_map(|e| e.message.as_ref().map(|m| m.to_string()))
        .unwrap_or_else(|| errors.to_string())
}
