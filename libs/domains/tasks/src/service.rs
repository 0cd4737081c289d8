use axum_helpers::Pagination;
use domain_lists::ListRepository;
use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;
use validator::Validate;

use crate::error::{TaskError, TaskResult};
use crate::models::{CreateTask, Task, UpdateTask, validation_message};
use crate::repository::TaskRepository;

/// Service layer for Task business logic
///
/// Holds the list repository only to check that a parent list exists.
#[derive(Clone)]
pub struct TaskService<R: TaskRepository, L: ListRepository> {
    repository: Arc<R>,
    lists: Arc<L>,
}

impl<R: TaskRepository, L: ListRepository> TaskService<R, L> {
    pub fn new(repository: R, lists: L) -> Self {
        Self {
            repository: Arc::new(repository),
            lists: Arc::new(lists),
        }
    }

    /// Create a new task in an existing list
    #[instrument(skip(self, input), fields(list_id = %list_id))]
    pub async fn create_task(&self, list_id: Uuid, input: CreateTask) -> TaskResult<Task> {
        input
            .validate()
            .map_err(|e| TaskError::Validation(validation_message(&e)))?;

        match self.lists.get_by_id(list_id).await {
            Ok(Some(_)) => {}
            Ok(None) => return Err(TaskError::Validation("list not found".to_string())),
            Err(e) => {
                tracing::error!(list_id = %list_id, error = %e, "List lookup failed");
                return Err(TaskError::Internal(format!(
                    "failed to check list existence: {}",
                    e
                )));
            }
        }

        self.repository.create(list_id, input).await
    }

    /// Get a task by ID
    #[instrument(skip(self), fields(task_id = %id))]
    pub async fn get_task(&self, id: Uuid) -> TaskResult<Task> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(TaskError::NotFound(id))
    }

    /// One page of a list's tasks, newest first, with the list's task count
    #[instrument(skip(self), fields(list_id = %list_id))]
    pub async fn list_tasks(
        &self,
        list_id: Uuid,
        page: Pagination,
    ) -> TaskResult<(Vec<Task>, u64)> {
        self.repository.list_by_list(list_id, page).await
    }

    /// Apply a partial update
    ///
    /// Read, merge and write are separate statements; a concurrent writer
    /// between them is overwritten.
    #[instrument(skip(self, input), fields(task_id = %id))]
    pub async fn update_task(&self, id: Uuid, input: UpdateTask) -> TaskResult<Task> {
        let current = self.get_task(id).await?;

        input
            .validate()
            .map_err(|e| TaskError::Validation(validation_message(&e)))?;

        let text = input.text.resolve(current.text);
        let completed = input.completed.resolve(current.completed);
        tracing::debug!(text_chars = text.chars().count(), completed, "Resolved task update");

        self.repository.update(id, text, completed).await
    }

    /// Delete a task
    #[instrument(skip(self), fields(task_id = %id))]
    pub async fn delete_task(&self, id: Uuid) -> TaskResult<()> {
        let deleted = self.repository.delete(id).await?;

        if !deleted {
            return Err(TaskError::NotFound(id));
        }

        Ok(())
    }
}
