/// API Error types
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// API Error
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Malformed input; detected before any provider call.
    #[error("Validation error: {0}")]
    Validation(String),

    /// The provider explicitly rejected the email; status and body are
    /// surfaced verbatim.
    #[error("Delivery rejected ({status}): {body}")]
    Delivery { status: u16, body: String },

    /// Anything else; detail stays in the server logs.
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            ApiError::Validation(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
            ApiError::Delivery { status, body } => (
                StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY),
                body,
            ),
            ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = Json(json!({
            "detail": error_message,
        }));

        (status, body).into_response()
    }
}

/// Convert relay-core errors to API errors
impl From<relay_core::RelayError> for ApiError {
    fn from(err: relay_core::RelayError) -> Self {
        if err.is_client_fault() {
            ApiError::Validation(err.to_string())
        } else {
            ApiError::Internal(err.to_string())
        }
    }
}
