use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::order::errors::OrderError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for OrderError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            OrderError::NotFound => (StatusCode::NOT_FOUND, "NotFound", "order.not_found"),
            OrderError::InvalidStatusTransition => (
                StatusCode::BAD_REQUEST,
                "InvalidTransition",
                "order.invalid_status_transition",
            ),
            OrderError::InvalidQuantity => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "order.invalid_quantity",
            ),
            OrderError::MissingAddress => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "order.missing_address",
            ),
            OrderError::Address(_) => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "order.invalid_address",
            ),
            OrderError::EmptyOrder => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "IntegrityFault",
                "order.empty_order",
            ),
            OrderError::DuplicateCart => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "IntegrityFault",
                "order.duplicate_cart",
            ),
            OrderError::UnknownProduct => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "IntegrityFault",
                "order.unknown_product",
            ),
            OrderError::Repository(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "repository.persistence",
            ),
        };

        (
            status,
            Json(ErrorResponse {
                name: name.to_string(),
                message: message.to_string(),
            }),
        )
    }
}
