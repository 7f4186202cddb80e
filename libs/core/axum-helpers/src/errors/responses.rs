//! Reusable OpenAPI responses for the failure statuses.

use super::ErrorResponse;
#[allow(unused_imports)]
use serde_json::json;
use utoipa::ToResponse;

#[derive(ToResponse)]
#[response(
    description = "Bad Request - missing or invalid input",
    content_type = "application/json",
    example = json!({
        "message": "Unable to create product. Please provide valid product data"
    })
)]
pub struct BadRequestResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Resource not found",
    content_type = "application/json",
    example = json!({
        "message": "Product not found. Please provide a valid product id"
    })
)]
pub struct NotFoundResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Internal Server Error",
    content_type = "application/json",
    example = json!({ "message": "Internal Server Error" })
)]
pub struct InternalServerErrorResponse(pub ErrorResponse);
