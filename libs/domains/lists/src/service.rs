use axum_helpers::Pagination;
use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;
use validator::Validate;

use crate::error::{ListError, ListResult};
use crate::models::{CreateList, List, UpdateList, validation_message};
use crate::repository::ListRepository;

/// Service layer for List business logic
#[derive(Clone)]
pub struct ListService<R: ListRepository> {
    repository: Arc<R>,
}

impl<R: ListRepository> ListService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Create a new list with validation
    #[instrument(skip(self, input))]
    pub async fn create_list(&self, input: CreateList) -> ListResult<List> {
        input
            .validate()
            .map_err(|e| ListError::Validation(validation_message(&e)))?;

        self.repository.create(input).await
    }

    /// Get a list by ID
    #[instrument(skip(self), fields(list_id = %id))]
    pub async fn get_list(&self, id: Uuid) -> ListResult<List> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(ListError::NotFound(id))
    }

    /// Lists whose title contains `query`, newest first
    #[instrument(skip(self))]
    pub async fn search_lists(&self, query: &str) -> ListResult<Vec<List>> {
        self.repository.search_by_title(query).await
    }

    /// Rename a list
    #[instrument(skip(self, input), fields(list_id = %id))]
    pub async fn update_list(&self, id: Uuid, input: UpdateList) -> ListResult<List> {
        input
            .validate()
            .map_err(|e| ListError::Validation(validation_message(&e)))?;

        self.repository.update(id, input.title).await
    }

    /// Delete a list and, through the foreign key, its tasks
    #[instrument(skip(self), fields(list_id = %id))]
    pub async fn delete_list(&self, id: Uuid) -> ListResult<()> {
        let deleted = self.repository.delete(id).await?;

        if !deleted {
            return Err(ListError::NotFound(id));
        }

        Ok(())
    }

    /// One page of lists, newest first, with the total count
    #[instrument(skip(self))]
    pub async fn list_lists(&self, page: Pagination) -> ListResult<(Vec<List>, u64)> {
        self.repository.list(page).await
    }
}
