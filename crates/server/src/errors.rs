use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use models::schema::FieldErrors;
use service::errors::ServiceError;
use thiserror::Error;
use tracing::error;

const INTERNAL_DETAIL: &str = "internal server error";

/// Handler error. Validation failures render the bare field map, the rest
/// render `{"error": <title>, "message": <detail>}`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(FieldErrors),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ServiceError> for ApiError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::Validation(fields) => Self::Validation(fields),
            ServiceError::NotFound(msg) => Self::NotFound(msg),
            ServiceError::Db(msg) => Self::Internal(msg),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            Self::Validation(fields) => (status, Json(fields)).into_response(),
            Self::NotFound(msg) => {
                (status, Json(serde_json::json!({"error": "Not Found", "message": msg}))).into_response()
            }
            Self::Internal(msg) => {
                // driver text stays in the log, never in the body
                error!(error = %msg, "request failed");
                (status, Json(serde_json::json!({"error": "Internal Server Error", "message": INTERNAL_DETAIL}))).into_response()
            }
        }
    }
}
