use async_trait::async_trait;
use axum_helpers::Pagination;
use database::postgres::{DEFAULT_STATEMENT_TIMEOUT, with_timeout};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbBackend, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, Statement,
};
use std::time::Duration;
use uuid::Uuid;

use crate::{
    entity,
    error::{TaskError, TaskResult},
    models::{CreateTask, Task},
    repository::TaskRepository,
};

const UPDATE_SQL: &str = "UPDATE tasks SET text = $2, completed = $3, updated_at = NOW() \
WHERE id = $1 \
RETURNING id, list_id, text, completed, created_at, updated_at";

/// PostgreSQL-backed task repository sharing the application pool.
#[derive(Clone)]
pub struct PgTaskRepository {
    db: DatabaseConnection,
    timeout: Duration,
}

impl PgTaskRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self::with_timeout(db, DEFAULT_STATEMENT_TIMEOUT)
    }

    pub fn with_timeout(db: DatabaseConnection, timeout: Duration) -> Self {
        Self { db, timeout }
    }
}

#[async_trait]
impl TaskRepository for PgTaskRepository {
    async fn create(&self, list_id: Uuid, input: CreateTask) -> TaskResult<Task> {
        let active_model = entity::ActiveModel::for_list(list_id, input);
        let model = with_timeout(self.timeout, active_model.insert(&self.db)).await?;

        tracing::info!(task_id = %model.id, list_id = %list_id, "Created task");
        Ok(model.into())
    }

    async fn get_by_id(&self, id: Uuid) -> TaskResult<Option<Task>> {
        let model = with_timeout(
            self.timeout,
            entity::Entity::find_by_id(id).one(&self.db),
        )
        .await?;

        Ok(model.map(Into::into))
    }

    async fn list_by_list(
        &self,
        list_id: Uuid,
        page: Pagination,
    ) -> TaskResult<(Vec<Task>, u64)> {
        let scoped = || entity::Entity::find().filter(entity::Column::ListId.eq(list_id));

        let total = with_timeout(self.timeout, scoped().count(&self.db)).await?;

        let models = with_timeout(
            self.timeout,
            scoped()
                .order_by_desc(entity::Column::CreatedAt)
                .order_by_desc(entity::Column::Id)
                .limit(page.limit)
                .offset(page.offset)
                .all(&self.db),
        )
        .await?;

        Ok((models.into_iter().map(Into::into).collect(), total))
    }

    async fn update(&self, id: Uuid, text: String, completed: bool) -> TaskResult<Task> {
        let stmt = Statement::from_sql_and_values(
            DbBackend::Postgres,
            UPDATE_SQL,
            [id.into(), text.into(), completed.into()],
        );

        let model = with_timeout(
            self.timeout,
            entity::Entity::find().from_raw_sql(stmt).one(&self.db),
        )
        .await?
        .ok_or(TaskError::NotFound(id))?;

        tracing::info!(task_id = %id, "Updated task");
        Ok(model.into())
    }

    async fn delete(&self, id: Uuid) -> TaskResult<bool> {
        let result = with_timeout(
            self.timeout,
            entity::Entity::delete_by_id(id).exec(&self.db),
        )
        .await?;

        if result.rows_affected > 0 {
            tracing::info!(task_id = %id, "Deleted task");
            Ok(true)
        } else {
            Ok(false)
        }
    }
}
