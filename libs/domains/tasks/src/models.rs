use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::{Validate, ValidateLength, ValidationErrors};

/// Task entity - a single to-do item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Task {
    /// Unique identifier
    pub id: Uuid,
    /// Owning list
    pub list_id: Uuid,
    /// Task text (1..500 characters)
    pub text: String,
    /// Whether the task is completed
    pub completed: bool,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl Task {
    pub fn new(list_id: Uuid, input: CreateTask) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            list_id,
            text: input.text,
            completed: false,
            created_at: now,
            updated_at: now,
        }
    }
}

/// DTO for creating a new task
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateTask {
    #[validate(length(min = 1, max = 500, message = "text must be 1..500 chars"))]
    #[schema(min_length = 1, max_length = 500, example = "Buy milk")]
    pub text: String,
}

/// A field of a partial update: left as is, or replaced.
///
/// Absent keys deserialize to `Unchanged` through `#[serde(default)]`;
/// an explicit `null` is rejected like any other wrong type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Patch<T> {
    Unchanged,
    Set(T),
}

impl<T> Default for Patch<T> {
    fn default() -> Self {
        Patch::Unchanged
    }
}

impl<T> Patch<T> {
    pub fn is_set(&self) -> bool {
        matches!(self, Patch::Set(_))
    }

    /// The new value, or `current` when unchanged
    pub fn resolve(self, current: T) -> T {
        match self {
            Patch::Unchanged => current,
            Patch::Set(value) => value,
        }
    }
}

/// Only a set value is measured, so `Unchanged` always passes `length(..)`.
impl<T: ValidateLength<u64>> ValidateLength<u64> for Patch<T> {
    fn length(&self) -> Option<u64> {
        match self {
            Patch::Unchanged => None,
            Patch::Set(value) => value.length(),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Patch<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        T::deserialize(deserializer).map(Patch::Set)
    }
}

/// DTO for partially updating a task
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateTask {
    #[serde(default)]
    #[validate(length(min = 1, max = 500, message = "text must be 1..500 chars"))]
    #[schema(value_type = Option<String>, min_length = 1, max_length = 500)]
    pub text: Patch<String>,
    #[serde(default)]
    #[schema(value_type = Option<bool>)]
    pub completed: Patch<bool>,
}

impl UpdateTask {
    /// No field was supplied
    pub fn is_empty(&self) -> bool {
        !self.text.is_set() && !self.completed.is_set()
    }
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
