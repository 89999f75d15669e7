use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use log::{error, warn};
use serde_json::json;

/// API errors
#[derive(thiserror::Error, Debug)]
pub enum ApiError {
    /// The required field is absent from the request body
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// The body is not JSON, or the field is not a list of strings
    #[error("malformed input: {0}")]
    MalformedInput(String),

    /// The model failed to produce predictions
    #[error("internal error: {0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::MissingField(_) | ApiError::MalformedInput(_) => {
                warn!("Rejected request: {}", self);
                StatusCode::BAD_REQUEST
            }
            ApiError::Internal(_) => {
                error!("Request failed: {}", self);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
