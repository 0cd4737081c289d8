//! PostgreSQL connection management, health probing and bounded query execution.

mod config;
mod connector;
mod health;
mod timeout;

pub use config::PostgresConfig;
pub use connector::{connect_from_config, connect_with_options};
pub use health::{check_health, check_health_detailed, spawn_health_probe, HealthStatus};
pub use timeout::{with_timeout, DEFAULT_STATEMENT_TIMEOUT};

// Re-export SeaORM types for convenience
pub use sea_orm::{ConnectOptions, DatabaseConnection, DbErr};
