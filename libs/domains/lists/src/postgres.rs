use async_trait::async_trait;
use axum_helpers::Pagination;
use database::postgres::{DEFAULT_STATEMENT_TIMEOUT, with_timeout};
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, DbBackend, EntityTrait, PaginatorTrait, QueryOrder,
    QuerySelect, Statement,
};
use std::time::Duration;
use uuid::Uuid;

use crate::{
    entity,
    error::{ListError, ListResult},
    models::{CreateList, List},
    repository::ListRepository,
};

const SEARCH_SQL: &str = r"SELECT id, title, created_at FROM lists
WHERE title ILIKE $1 ESCAPE '\'
ORDER BY created_at DESC, id DESC";

const UPDATE_SQL: &str = "UPDATE lists SET title = $2 WHERE id = $1 RETURNING id, title, created_at";

/// PostgreSQL-backed list repository sharing the application pool.
#[derive(Clone)]
pub struct PgListRepository {
    db: DatabaseConnection,
    timeout: Duration,
}

impl PgListRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self::with_timeout(db, DEFAULT_STATEMENT_TIMEOUT)
    }

    pub fn with_timeout(db: DatabaseConnection, timeout: Duration) -> Self {
        Self { db, timeout }
    }
}

/// `ILIKE` pattern matching `query` anywhere, with wildcards taken literally.
pub(crate) fn contains_pattern(query: &str) -> String {
    let mut pattern = String::with_capacity(query.len() + 2);
    pattern.push('%');
    for c in query.chars() {
        if matches!(c, '\\' | '%' | '_') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

#[async_trait]
impl ListRepository for PgListRepository {
    async fn create(&self, input: CreateList) -> ListResult<List> {
        let active_model: entity::ActiveModel = input.into();
        let model = with_timeout(self.timeout, active_model.insert(&self.db)).await?;

        tracing::info!(list_id = %model.id, "Created list");
        Ok(model.into())
    }

    async fn get_by_id(&self, id: Uuid) -> ListResult<Option<List>> {
        let model = with_timeout(
            self.timeout,
            entity::Entity::find_by_id(id).one(&self.db),
        )
        .await?;

        Ok(model.map(Into::into))
    }

    async fn search_by_title(&self, query: &str) -> ListResult<Vec<List>> {
        let stmt = Statement::from_sql_and_values(
            DbBackend::Postgres,
            SEARCH_SQL,
            [contains_pattern(query).into()],
        );

        let models = with_timeout(
            self.timeout,
            entity::Entity::find().from_raw_sql(stmt).all(&self.db),
        )
        .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn update(&self, id: Uuid, title: String) -> ListResult<List> {
        let stmt = Statement::from_sql_and_values(
            DbBackend::Postgres,
            UPDATE_SQL,
            [id.into(), title.into()],
        );

        let model = with_timeout(
            self.timeout,
            entity::Entity::find().from_raw_sql(stmt).one(&self.db),
        )
        .await?
        .ok_or(ListError::NotFound(id))?;

        tracing::info!(list_id = %id, "Updated list");
        Ok(model.into())
    }

    async fn delete(&self, id: Uuid) -> ListResult<bool> {
        let result = with_timeout(
            self.timeout,
            entity::Entity::delete_by_id(id).exec(&self.db),
        )
        .await?;

        if result.rows_affected > 0 {
            tracing::info!(list_id = %id, "Deleted list");
            Ok(true)
        } else {
            Ok(false)
        }
    }

    async fn list(&self, page: Pagination) -> ListResult<(Vec<List>, u64)> {
        let total = with_timeout(self.timeout, entity::Entity::find().count(&self.db)).await?;

        let models = with_timeout(
            self.timeout,
            entity::Entity::find()
                .order_by_desc(entity::Column::CreatedAt)
                .order_by_desc(entity::Column::Id)
                .limit(page.limit)
                .offset(page.offset)
                .all(&self.db),
        )
        .await?;

        Ok((models.into_iter().map(Into::into).collect(), total))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase, MockExecResult};

    fn model(title: &str) -> entity::Model {
        entity::Model {
            id: Uuid::new_v4(),
            title: title.to_string(),
            created_at: Utc::now().into(),
        }
    }

    #[test]
    fn test_contains_pattern_escapes_wildcards() {
        assert_eq!(contains_pattern("milk"), "%milk%");
        assert_eq!(contains_pattern("100%"), r"%100\%%");
        assert_eq!(contains_pattern("a_b"), r"%a\_b%");
        assert_eq!(contains_pattern(r"c:\tmp"), r"%c:\\tmp%");
    }

    #[tokio::test]
    async fn test_get_by_id_maps_row() {
        let row = model("Groceries");
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![row.clone()]])
            .into_connection();

        let repo = PgListRepository::new(db);
        let list = repo.get_by_id(row.id).await.unwrap().unwrap();
        assert_eq!(list.id, row.id);
        assert_eq!(list.title, "Groceries");
    }

    #[tokio::test]
    async fn test_update_without_row_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<entity::Model>::new()])
            .into_connection();

        let repo = PgListRepository::new(db);
        let id = Uuid::new_v4();
        let result = repo.update(id, "Renamed".to_string()).await;
        assert!(matches!(result, Err(ListError::NotFound(missing)) if missing == id));
    }

    #[tokio::test]
    async fn test_delete_reports_rows_affected() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([
                MockExecResult {
                    last_insert_id: 0,
                    rows_affected: 1,
                },
                MockExecResult {
                    last_insert_id: 0,
                    rows_affected: 0,
                },
            ])
            .into_connection();

        let repo = PgListRepository::new(db);
        assert!(repo.delete(Uuid::new_v4()).await.unwrap());
        assert!(!repo.delete(Uuid::new_v4()).await.unwrap());
    }

    #[tokio::test]
    async fn test_driver_error_is_internal() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Custom("connection reset".to_string())])
            .into_connection();

        let repo = PgListRepository::new(db);
        let result = repo.search_by_title("x").await;
        assert!(matches!(result, Err(ListError::Internal(msg)) if msg.contains("connection reset")));
    }
}
