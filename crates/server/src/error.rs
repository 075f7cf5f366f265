use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

pub type ApiResult<T> = Result<T, ApiError>;

/// API error types
///
/// The wire shape is a flat two-field object, `{"error": <kind>, "message":
/// <detail>}`. The `error` field carries one of four stable kind strings
/// that clients dispatch on; `message` carries the specific cause and may
/// change between releases.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Request body is not parseable JSON (or not a JSON object at all).
    #[error("{0}")]
    MalformedInput(String),

    /// Body parsed as JSON but violates the required-field schema.
    #[error("{0}")]
    SchemaViolation(String),

    /// No route matched the request path.
    #[error("no route for {0}")]
    NotFound(String),

    /// Anything that escapes the handler pipeline.
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    /// Get HTTP status code for this error
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MalformedInput(_) | ApiError::SchemaViolation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the stable kind string serialized in the `error` field
    fn kind(&self) -> &'static str {
        match self {
            ApiError::MalformedInput(_) => "Invalid JSON format.",
            ApiError::SchemaViolation(_) => "Schema validation failed.",
            ApiError::NotFound(_) => "Not found.",
            ApiError::Internal(_) => "An error occurred.",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let body = Json(json!({
            "error": self.kind(),
            "message": self.to_string(),
        }));

        (status, body).into_response()
    }
}
