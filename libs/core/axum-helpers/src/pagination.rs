//! Offset pagination: lenient query parsing and the `X-Total-Count` response.

use axum::{
    Json,
    http::HeaderName,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use utoipa::IntoParams;

pub const DEFAULT_LIMIT: u64 = 20;
pub const MAX_LIMIT: u64 = 100;

/// Response header carrying the total number of matching rows.
pub const X_TOTAL_COUNT: HeaderName = HeaderName::from_static("x-total-count");

/// Raw `limit` / `offset` query parameters.
///
/// Kept as strings so a bad value falls back to the default instead of
/// rejecting the request.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PageParams {
    /// Page size (default 20, capped at 100)
    #[param(value_type = Option<u64>)]
    pub limit: Option<String>,
    /// Rows to skip (default 0)
    #[param(value_type = Option<u64>)]
    pub offset: Option<String>,
}

impl PageParams {
    pub fn resolve(&self) -> Pagination {
        let limit = parse_non_negative(self.limit.as_deref()).unwrap_or(DEFAULT_LIMIT);
        let offset = parse_non_negative(self.offset.as_deref()).unwrap_or(0);
        Pagination::new(limit, offset)
    }
}

fn parse_non_negative(raw: Option<&str>) -> Option<u64> {
    raw?.trim().parse::<i64>().ok().and_then(|v| u64::try_from(v).ok())
}

/// A resolved page window. `limit` never exceeds [`MAX_LIMIT`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub limit: u64,
    pub offset: u64,
}

impl Pagination {
    pub fn new(limit: u64, offset: u64) -> Self {
        Self {
            limit: limit.min(MAX_LIMIT),
            offset,
        }
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(DEFAULT_LIMIT, 0)
    }
}

/// A page of items rendered as a JSON array with an `X-Total-Count` header.
#[derive(Debug)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub total: u64,
}

impl<T> Paginated<T> {
    pub fn new(items: Vec<T>, total: u64) -> Self {
        Self { items, total }
    }
}

impl<T: Serialize> IntoResponse for Paginated<T> {
    fn into_response(self) -> Response {
        (
            [(X_TOTAL_COUNT, self.total.to_string())],
            Json(self.items),
        )
            .into_response()
    }
}
