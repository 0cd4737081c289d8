//! Lists Domain
//!
//! Named containers for tasks: creation, lookup, title search, paging,
//! renaming and deletion.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Validation
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + Postgres / in-memory)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Entity, DTOs
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_lists::{handlers, InMemoryListRepository, ListService};
//!
//! let service = ListService::new(InMemoryListRepository::new());
//! let router = handlers::router(service);
//! ```

pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use error::{ListError, ListResult};
pub use models::{CreateList, List, SearchQuery, UpdateList};
pub use postgres::PgListRepository;
pub use repository::{InMemoryListRepository, ListRepository};
pub use service::ListService;
