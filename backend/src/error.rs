// backend/src/error.rs

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use suraksha_shared::{ReportResponse, ReportValidationError};
use tracing::{error, warn};

/// Everything a report request can fail with. The `Display` text is what the
/// client sees as `message`.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    BadBody(String),
    #[error("Location and description are required")]
    MissingFields,
    #[error("Invalid type")]
    InvalidType(String),
    #[error("Could not store report")]
    Storage(#[from] sqlx::Error),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadBody(_) | ApiError::MissingFields | ApiError::InvalidType(_) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadBody(rejection.body_text())
    }
}

impl From<ReportValidationError> for ApiError {
    fn from(err: ReportValidationError) -> Self {
        match err {
            ReportValidationError::MissingFields => ApiError::MissingFields,
            ReportValidationError::UnknownIncidentType(kind) => ApiError::InvalidType(kind),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::Storage(err) => error!(%err, "report insert failed"),
            ApiError::InvalidType(kind) => warn!(kind = %kind, "report with unknown type"),
            other => warn!(reason = %other, "report rejected"),
        }
        (self.status(), Json(ReportResponse::message(self.to_string()))).into_response()
    }
}
