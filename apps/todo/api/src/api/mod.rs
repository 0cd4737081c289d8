use axum::Router;
use domain_lists::{ListRepository, ListService, PgListRepository};
use domain_tasks::{PgTaskRepository, TaskRepository, TaskService};
use std::sync::Arc;

pub mod health;

/// Creates the API routes without the `/api` prefix.
/// The `/api` prefix will be added by the `create_router` helper.
///
/// Both repositories share the pool held in `state`.
pub fn routes(state: &crate::state::AppState) -> Router {
    let timeout = state.config.database.statement_timeout();
    let lists = PgListRepository::with_timeout(state.db.clone(), timeout);
    let tasks = PgTaskRepository::with_timeout(state.db.clone(), timeout);

    compose(lists, tasks)
}

/// Wires services and routers over any repository pair.
///
/// ```text
/// /v1/lists          GET, POST
/// /v1/lists/search   GET
/// /v1/lists/{id}     GET, PATCH, DELETE
/// /v1/lists/{id}/tasks  GET, POST
/// /v1/tasks/{id}     GET, PATCH, DELETE
/// ```
pub fn compose<L, T>(lists: L, tasks: T) -> Router
where
    L: ListRepository + Clone + 'static,
    T: TaskRepository + 'static,
{
    let list_service = ListService::new(lists.clone());
    let task_service = Arc::new(TaskService::new(tasks, lists));

    let lists_router = domain_lists::handlers::router(list_service)
        .merge(domain_tasks::handlers::list_router(task_service.clone()));

    Router::new()
        .nest("/v1/lists", lists_router)
        .nest("/v1/tasks", domain_tasks::handlers::router(task_service))
}

/// Creates a router with the /ready endpoint that pings the database.
///
/// This router has state applied and is handed to `create_router` alongside
/// `health_router()` so the HTTP layers wrap it too.
pub fn ready_router(state: crate::state::AppState) -> Router {
    use axum::routing::get;

    Router::new()
        .route("/ready", get(health::ready_handler))
        .with_state(state)
}
