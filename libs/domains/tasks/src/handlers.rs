use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use axum_helpers::{
    AppError, JsonBody, PageParams, Paginated, UuidPath,
    errors::responses::{
        BadRequestJsonResponse, BadRequestUuidResponse, BadRequestValidationResponse,
        InternalServerErrorResponse, NotFoundResponse,
    },
};
use domain_lists::ListRepository;
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::TaskResult;
use crate::models::{CreateTask, Task, UpdateTask};
use crate::repository::TaskRepository;
use crate::service::TaskService;

pub const TAG: &str = "tasks";

type SharedService<R, L> = Arc<TaskService<R, L>>;

/// OpenAPI documentation for Tasks API
///
/// `list_tasks` and `create_task` live under the lists prefix, the rest
/// under the tasks prefix; the app nests this document accordingly.
#[derive(OpenApi)]
#[openapi(
    paths(get_task, update_task, delete_task),
    components(
        schemas(Task, CreateTask, UpdateTask),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            BadRequestJsonResponse,
            BadRequestUuidResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = TAG, description = "Task management endpoints")
    )
)]
pub struct ApiDoc;

/// OpenAPI documentation for the list-scoped task endpoints
#[derive(OpenApi)]
#[openapi(paths(list_tasks, create_task), components(schemas(Task, CreateTask)))]
pub struct ListTasksApiDoc;

/// Routes addressed by task id: `/{id}`
pub fn router<R, L>(service: SharedService<R, L>) -> Router
where
    R: TaskRepository + 'static,
    L: ListRepository + 'static,
{
    Router::new()
        .route(
            "/{id}",
            get(get_task).patch(update_task).delete(delete_task),
        )
        .with_state(service)
}

/// Routes scoped to a parent list: `/{id}/tasks`, merged into the lists router
pub fn list_router<R, L>(service: SharedService<R, L>) -> Router
where
    R: TaskRepository + 'static,
    L: ListRepository + 'static,
{
    Router::new()
        .route("/{id}/tasks", get(list_tasks).post(create_task))
        .with_state(service)
}

/// List the tasks of a list, newest first
#[utoipa::path(
    get,
    path = "/{id}/tasks",
    tag = TAG,
    params(
        ("id" = Uuid, Path, description = "List ID"),
        PageParams
    ),
    responses(
        (status = 200, description = "Page of tasks", body = Vec<Task>,
            headers(("X-Total-Count" = u64, description = "Total number of tasks in the list"))),
        (status = 400, response = BadRequestUuidResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_tasks<R: TaskRepository, L: ListRepository>(
    State(service): State<SharedService<R, L>>,
    UuidPath(list_id): UuidPath,
    Query(params): Query<PageParams>,
) -> TaskResult<Paginated<Task>> {
    let (items, total) = service.list_tasks(list_id, params.resolve()).await?;
    Ok(Paginated::new(items, total))
}

/// Create a task in a list
#[utoipa::path(
    post,
    path = "/{id}/tasks",
    tag = TAG,
    params(
        ("id" = Uuid, Path, description = "List ID")
    ),
    request_body = CreateTask,
    responses(
        (status = 201, description = "Task created successfully", body = Task),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_task<R: TaskRepository, L: ListRepository>(
    State(service): State<SharedService<R, L>>,
    UuidPath(list_id): UuidPath,
    JsonBody(input): JsonBody<CreateTask>,
) -> TaskResult<impl IntoResponse> {
    let task = service.create_task(list_id, input).await?;
    Ok((StatusCode::CREATED, Json(task)))
}

/// Get a task by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = Uuid, Path, description = "Task ID")
    ),
    responses(
        (status = 200, description = "Task found", body = Task),
        (status = 400, response = BadRequestUuidResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_task<R: TaskRepository, L: ListRepository>(
    State(service): State<SharedService<R, L>>,
    UuidPath(id): UuidPath,
) -> TaskResult<Json<Task>> {
    let task = service.get_task(id).await?;
    Ok(Json(task))
}

/// Partially update a task
#[utoipa::path(
    patch,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = Uuid, Path, description = "Task ID")
    ),
    request_body = UpdateTask,
    responses(
        (status = 200, description = "Task updated successfully", body = Task),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_task<R: TaskRepository, L: ListRepository>(
    State(service): State<SharedService<R, L>>,
    UuidPath(id): UuidPath,
    JsonBody(input): JsonBody<UpdateTask>,
) -> Result<Json<Task>, AppError> {
    if input.is_empty() {
        return Err(AppError::Validation {
            message: "At least one field (text or completed) must be provided".to_string(),
            details: "No fields to update".to_string(),
        });
    }

    let task = service.update_task(id, input).await?;
    Ok(Json(task))
}

/// Delete a task
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = Uuid, Path, description = "Task ID")
    ),
    responses(
        (status = 204, description = "Task deleted successfully"),
        (status = 400, response = BadRequestUuidResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_task<R: TaskRepository, L: ListRepository>(
    State(service): State<SharedService<R, L>>,
    UuidPath(id): UuidPath,
) -> TaskResult<StatusCode> {
    service.delete_task(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
