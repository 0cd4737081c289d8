//! Database library providing PostgreSQL connection management and utilities
//!
//! # Features
//!
//! - `postgres` (default) - PostgreSQL support with SeaORM
//! - `config` - Configuration support with `core_config::FromEnv`
//!
//! # Example
//!
//! ```ignore
//! use database::postgres::{self, PostgresConfig};
//! use core_config::FromEnv;
//!
//! let config = PostgresConfig::from_env()?;
//! let db = postgres::connect_from_config(config.clone()).await?;
//! postgres::check_health(&db, config.statement_timeout()).await?;
//! ```

pub mod common;

#[cfg(feature = "postgres")]
pub mod postgres;

pub use common::{DatabaseError, DatabaseResult};
