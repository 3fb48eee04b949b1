use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::invoice::errors::InvoiceError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for InvoiceError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            InvoiceError::NotFound => (StatusCode::NOT_FOUND, "NotFound", "invoice.not_found"),
            InvoiceError::Repository(_) => (
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
