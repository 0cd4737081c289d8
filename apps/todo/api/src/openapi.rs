use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    components(
        schemas(axum_helpers::ErrorResponse)
    ),
    info(
        title = "Todo API",
        version = "0.1.0",
        description = "API for managing task lists and their tasks"
    ),
    servers(
        (url = "/api", description = "API base path")
    ),
    nest(
        (path = "/v1/lists", api = domain_lists::handlers::ApiDoc),
        (path = "/v1/lists", api = domain_tasks::handlers::ListTasksApiDoc),
        (path = "/v1/tasks", api = domain_tasks::handlers::ApiDoc)
    )
)]
pub struct ApiDoc;
