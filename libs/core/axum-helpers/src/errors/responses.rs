//! Reusable OpenAPI response types for consistent API documentation.

use super::ErrorResponse;
#[allow(unused_imports)]
use serde_json::json;
use utoipa::ToResponse;

#[derive(ToResponse)]
#[response(
    description = "Internal Server Error",
    content_type = "application/json",
    example = json!({
        "code": "INTERNAL_ERROR",
        "message": "An internal server error occurred",
        "details": "PostgreSQL error: connection closed"
    })
)]
pub struct InternalServerErrorResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Bad Request - Validation Error",
    content_type = "application/json",
    example = json!({
        "code": "VALIDATION_FAILED",
        "message": "Request validation failed",
        "details": "title must be 1..100 chars"
    })
)]
pub struct BadRequestValidationResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Bad Request - Malformed JSON body",
    content_type = "application/json",
    example = json!({
        "code": "VALIDATION_FAILED",
        "message": "Invalid JSON format",
        "details": "EOF while parsing an object at line 1 column 10"
    })
)]
pub struct BadRequestJsonResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Bad Request - Invalid identifier",
    content_type = "application/json",
    example = json!({
        "code": "VALIDATION_FAILED",
        "message": "Invalid identifier",
        "details": "'abc' is not a valid UUID"
    })
)]
pub struct BadRequestUuidResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Resource not found",
    content_type = "application/json",
    example = json!({
        "code": "NOT_FOUND",
        "message": "Resource not found",
        "details": "List 0193a4f2-5c1e-4a8b-9d3f-2e7b6c4a1f00 not found"
    })
)]
pub struct NotFoundResponse(pub ErrorResponse);
