use async_trait::async_trait;
use axum_helpers::Pagination;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::{ListError, ListResult};
use crate::models::{CreateList, List};

/// Repository trait for List persistence
///
/// Result sets are ordered newest first (`created_at`, then `id`, both
/// descending) so pages stay stable when timestamps collide.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ListRepository: Send + Sync {
    /// Create a new list with a generated id and creation time
    async fn create(&self, input: CreateList) -> ListResult<List>;

    /// Get a list by ID
    async fn get_by_id(&self, id: Uuid) -> ListResult<Option<List>>;

    /// Lists whose title contains `query`, ignoring case
    async fn search_by_title(&self, query: &str) -> ListResult<Vec<List>>;

    /// Replace the title, `ListError::NotFound` if the row is absent
    async fn update(&self, id: Uuid, title: String) -> ListResult<List>;

    /// Delete a list by ID, returning whether a row was removed
    async fn delete(&self, id: Uuid) -> ListResult<bool>;

    /// One page of lists plus the total row count
    async fn list(&self, page: Pagination) -> ListResult<(Vec<List>, u64)>;
}

/// In-memory implementation of ListRepository (for development/testing)
#[derive(Debug, Default, Clone)]
pub struct InMemoryListRepository {
    lists: Arc<RwLock<HashMap<Uuid, List>>>,
}

impl InMemoryListRepository {
    pub fn new() -> Self {
        Self {
            lists: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

fn newest_first(lists: &mut [List]) {
    lists.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
}

#[async_trait]
impl ListRepository for InMemoryListRepository {
    async fn create(&self, input: CreateList) -> ListResult<List> {
        let list = List::new(input);
        self.lists.write().await.insert(list.id, list.clone());

        tracing::info!(list_id = %list.id, "Created list");
        Ok(list)
    }

    async fn get_by_id(&self, id: Uuid) -> ListResult<Option<List>> {
        let lists = self.lists.read().await;
        Ok(lists.get(&id).cloned())
    }

    async fn search_by_title(&self, query: &str) -> ListResult<Vec<List>> {
        let needle = query.to_lowercase();
        let lists = self.lists.read().await;

        let mut result: Vec<List> = lists
            .values()
            .filter(|l| l.title.to_lowercase().contains(&needle))
            .cloned()
            .collect();

        newest_first(&mut result);
        Ok(result)
    }

    async fn update(&self, id: Uuid, title: String) -> ListResult<List> {
        let mut lists = self.lists.write().await;
        let list = lists.get_mut(&id).ok_or(ListError::NotFound(id))?;
        list.title = title;

        tracing::info!(list_id = %id, "Updated list");
        Ok(list.clone())
    }

    async fn delete(&self, id: Uuid) -> ListResult<bool> {
        let mut lists = self.lists.write().await;

        if lists.remove(&id).is_some() {
            tracing::info!(list_id = %id, "Deleted list");
            Ok(true)
        } else {
            Ok(false)
        }
    }

    async fn list(&self, page: Pagination) -> ListResult<(Vec<List>, u64)> {
        let lists = self.lists.read().await;
        let total = lists.len() as u64;

        let mut all: Vec<List> = lists.values().cloned().collect();
        newest_first(&mut all);

        let items = all
            .into_iter()
            .skip(page.offset as usize)
            .take(page.limit as usize)
            .collect();

        Ok((items, total))
    }
}
