use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use axum_helpers::{
    JsonBody, PageParams, Paginated, UuidPath,
    errors::responses::{
        BadRequestJsonResponse, BadRequestUuidResponse, BadRequestValidationResponse,
        InternalServerErrorResponse, NotFoundResponse,
    },
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::ListResult;
use crate::models::{CreateList, List, SearchQuery, UpdateList};
use crate::repository::ListRepository;
use crate::service::ListService;

pub const TAG: &str = "lists";

/// OpenAPI documentation for Lists API
#[derive(OpenApi)]
#[openapi(
    paths(
        list_lists,
        create_list,
        search_lists,
        get_list,
        update_list,
        delete_list,
    ),
    components(
        schemas(List, CreateList, UpdateList),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            BadRequestJsonResponse,
            BadRequestUuidResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = TAG, description = "Task list management endpoints")
    )
)]
pub struct ApiDoc;

/// Create the list router with all HTTP endpoints
pub fn router<R: ListRepository + 'static>(service: ListService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_lists).post(create_list))
        .route("/search", get(search_lists))
        .route(
            "/{id}",
            get(get_list).patch(update_list).delete(delete_list),
        )
        .with_state(shared_service)
}

/// List task lists, newest first
#[utoipa::path(
    get,
    path = "",
    tag = TAG,
    params(PageParams),
    responses(
        (status = 200, description = "Page of lists", body = Vec<List>,
            headers(("X-Total-Count" = u64, description = "Total number of lists"))),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_lists<R: ListRepository>(
    State(service): State<Arc<ListService<R>>>,
    Query(params): Query<PageParams>,
) -> ListResult<Paginated<List>> {
    let (items, total) = service.list_lists(params.resolve()).await?;
    Ok(Paginated::new(items, total))
}

/// Create a new list
#[utoipa::path(
    post,
    path = "",
    tag = TAG,
    request_body = CreateList,
    responses(
        (status = 201, description = "List created successfully", body = List),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_list<R: ListRepository>(
    State(service): State<Arc<ListService<R>>>,
    JsonBody(input): JsonBody<CreateList>,
) -> ListResult<impl IntoResponse> {
    let list = service.create_list(input).await?;
    Ok((StatusCode::CREATED, Json(list)))
}

/// Search lists by title substring (case-insensitive)
#[utoipa::path(
    get,
    path = "/search",
    tag = TAG,
    params(SearchQuery),
    responses(
        (status = 200, description = "Matching lists, newest first", body = Vec<List>),
        (status = 400, description = "Missing or empty `q`", body = String, content_type = "text/plain"),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn search_lists<R: ListRepository>(
    State(service): State<Arc<ListService<R>>>,
    Query(query): Query<SearchQuery>,
) -> ListResult<Response> {
    let Some(q) = query.q.filter(|q| !q.is_empty()) else {
        return Ok((StatusCode::BAD_REQUEST, "Query parameter 'q' is required").into_response());
    };

    let lists = service.search_lists(&q).await?;
    Ok(Json(lists).into_response())
}

/// Get a list by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = Uuid, Path, description = "List ID")
    ),
    responses(
        (status = 200, description = "List found", body = List),
        (status = 400, response = BadRequestUuidResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_list<R: ListRepository>(
    State(service): State<Arc<ListService<R>>>,
    UuidPath(id): UuidPath,
) -> ListResult<Json<List>> {
    let list = service.get_list(id).await?;
    Ok(Json(list))
}

/// Rename a list
#[utoipa::path(
    patch,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = Uuid, Path, description = "List ID")
    ),
    request_body = UpdateList,
    responses(
        (status = 200, description = "List updated successfully", body = List),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_list<R: ListRepository>(
    State(service): State<Arc<ListService<R>>>,
    UuidPath(id): UuidPath,
    JsonBody(input): JsonBody<UpdateList>,
) -> ListResult<Json<List>> {
    let list = service.update_list(id, input).await?;
    Ok(Json(list))
}

/// Delete a list together with its tasks
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = Uuid, Path, description = "List ID")
    ),
    responses(
        (status = 204, description = "List deleted successfully"),
        (status = 400, response = BadRequestUuidResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_list<R: ListRepository>(
    State(service): State<Arc<ListService<R>>>,
    UuidPath(id): UuidPath,
) -> ListResult<StatusCode> {
    service.delete_list(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
