use async_trait::async_trait;
use axum_helpers::Pagination;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::{TaskError, TaskResult};
use crate::models::{CreateTask, Task};

/// Repository trait for Task persistence
///
/// This trait defines the data access interface for tasks.
/// Implementations can use different storage backends (PostgreSQL, in-memory)
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Create a new, not yet completed task in `list_id`
    async fn create(&self, list_id: Uuid, input: CreateTask) -> TaskResult<Task>;

    /// Get a task by ID
    async fn get_by_id(&self, id: Uuid) -> TaskResult<Option<Task>>;

    /// One page of a list's tasks, newest first, plus the list's task count
    async fn list_by_list(&self, list_id: Uuid, page: Pagination)
    -> TaskResult<(Vec<Task>, u64)>;

    /// Write both fields and refresh `updated_at`, `TaskError::NotFound` if absent
    async fn update(&self, id: Uuid, text: String, completed: bool) -> TaskResult<Task>;

    /// Delete a task by ID, returning whether a row was removed
    async fn delete(&self, id: Uuid) -> TaskResult<bool>;
}

/// In-memory implementation of TaskRepository (for development/testing)
///
/// Tasks of a deleted list are not cascaded away here.
#[derive(Debug, Default, Clone)]
pub struct InMemoryTaskRepository {
    tasks: Arc<RwLock<HashMap<Uuid, Task>>>,
}

impl InMemoryTaskRepository {
    pub fn new() -> Self {
        Self {
            tasks: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn create(&self, list_id: Uuid, input: CreateTask) -> TaskResult<Task> {
        let task = Task::new(list_id, input);
        self.tasks.write().await.insert(task.id, task.clone());

        tracing::info!(task_id = %task.id, list_id = %list_id, "Created task");
        Ok(task)
    }

    async fn get_by_id(&self, id: Uuid) -> TaskResult<Option<Task>> {
        let tasks = self.tasks.read().await;
        Ok(tasks.get(&id).cloned())
    }

    async fn list_by_list(
        &self,
        list_id: Uuid,
        page: Pagination,
    ) -> TaskResult<(Vec<Task>, u64)> {
        let tasks = self.tasks.read().await;

        let mut result: Vec<Task> = tasks
            .values()
            .filter(|t| t.list_id == list_id)
            .cloned()
            .collect();
        let total = result.len() as u64;

        // Sort by created_at descending (newest first), id breaks ties
        result.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));

        let items = result
            .into_iter()
            .skip(page.offset as usize)
            .take(page.limit as usize)
            .collect();

        Ok((items, total))
    }

    async fn update(&self, id: Uuid, text: String, completed: bool) -> TaskResult<Task> {
        let mut tasks = self.tasks.write().await;
        let task = tasks.get_mut(&id).ok_or(TaskError::NotFound(id))?;

        task.text = text;
        task.completed = completed;
        task.updated_at = chrono::Utc::now();

        tracing::info!(task_id = %id, "Updated task");
        Ok(task.clone())
    }

    async fn delete(&self, id: Uuid) -> TaskResult<bool> {
        let mut tasks = self.tasks.write().await;

        if tasks.remove(&id).is_some() {
            tracing::info!(task_id = %id, "Deleted task");
            Ok(true)
        } else {
            Ok(false)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(text: &str) -> CreateTask {
        CreateTask {
            text: text.to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_and_get_task() {
        let repo = InMemoryTaskRepository::new();
        let list_id = Uuid::new_v4();

        let task = repo.create(list_id, input("Buy milk")).await.unwrap();
        assert_eq!(task.list_id, list_id);
        assert!(!task.completed);
        assert_eq!(task.created_at, task.updated_at);

        let fetched = repo.get_by_id(task.id).await.unwrap();
        assert_eq!(fetched, Some(task));
    }

    #[tokio::test]
    async fn test_list_by_list_is_scoped() {
        let repo = InMemoryTaskRepository::new();
        let list_a = Uuid::new_v4();
        let list_b = Uuid::new_v4();

        for i in 0..3 {
            repo.create(list_a, input(&format!("a{}", i))).await.unwrap();
        }
        repo.create(list_b, input("b0")).await.unwrap();

        let (page, total) = repo.list_by_list(list_a, Pagination::new(2, 0)).await.unwrap();
        assert_eq!(total, 3);
        assert_eq!(page.len(), 2);
        assert!(page.iter().all(|t| t.list_id == list_a));

        let (page, total) = repo
            .list_by_list(Uuid::new_v4(), Pagination::default())
            .await
            .unwrap();
        assert!(page.is_empty());
        assert_eq!(total, 0);
    }

    #[tokio::test]
    async fn test_update_refreshes_updated_at() {
        let repo = InMemoryTaskRepository::new();
        let task = repo.create(Uuid::new_v4(), input("old")).await.unwrap();

        let updated = repo.update(task.id, "new".to_string(), true).await.unwrap();
        assert_eq!(updated.text, "new");
        assert!(updated.completed);
        assert_eq!(updated.created_at, task.created_at);
        assert!(updated.updated_at >= task.updated_at);
    }

    #[tokio::test]
    async fn test_update_missing_is_not_found() {
        let repo = InMemoryTaskRepository::new();
        let result = repo.update(Uuid::new_v4(), "x".to_string(), false).await;
        assert!(matches!(result, Err(TaskError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_delete_reports_removal() {
        let repo = InMemoryTaskRepository::new();
        let task = repo.create(Uuid::new_v4(), input("x")).await.unwrap();

        assert!(repo.delete(task.id).await.unwrap());
        assert!(!repo.delete(task.id).await.unwrap());
    }
}
