use poem::http::StatusCode;
use poem_openapi::{Object, payload::Json};

/// Wire shape of every error the API returns: a machine-readable name and
/// a code-style message key.
#[derive(Object, Debug)]
pub struct ErrorResponse {
    pub name: String,
    pub message: String,
}

/// Maps a domain error onto an HTTP status and response body. Implemented
/// per module in its `error_mapper`.
pub trait IntoErrorResponse {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>);
}
