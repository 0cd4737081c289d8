//! Tasks Domain
//!
//! To-do items that belong to exactly one list. Creation checks that the
//! parent list exists; updates are partial.
//!
//! # Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use domain_lists::InMemoryListRepository;
//! use domain_tasks::{handlers, InMemoryTaskRepository, TaskService};
//!
//! let service = Arc::new(TaskService::new(
//!     InMemoryTaskRepository::new(),
//!     InMemoryListRepository::new(),
//! ));
//!
//! // `/tasks/{id}` and `/lists/{id}/tasks`
//! let tasks = handlers::router(service.clone());
//! let list_tasks = handlers::list_router(service);
//! ```

pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use error::{TaskError, TaskResult};
pub use models::{CreateTask, Patch, Task, UpdateTask};
pub use postgres::PgTaskRepository;
pub use repository::{InMemoryTaskRepository, TaskRepository};
pub use service::TaskService;
