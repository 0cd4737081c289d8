//! Todo lists HTTP service: configuration, wiring and OpenAPI document.

pub mod api;
pub mod config;
pub mod openapi;
pub mod state;
