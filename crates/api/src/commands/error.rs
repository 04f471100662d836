//! Domain error → HTTP response mapping

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use helpdesk_domain::HelpdeskError;
use serde::Serialize;
use tracing::{error, warn};

/// Handler result carrying a JSON body
pub type ApiResult<T> = Result<Json<T>, ApiError>;

/// Domain error on its way out of a handler
#[derive(Debug)]
pub struct ApiError(pub HelpdeskError);

/// Error payload: `{ "type": "not_found", "message": "..." }`
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub message: String,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self.0 {
            HelpdeskError::Validation(_) => StatusCode::BAD_REQUEST,
            HelpdeskError::NotFound(_) => StatusCode::NOT_FOUND,
            HelpdeskError::InvalidTransition { .. } => StatusCode::CONFLICT,
            HelpdeskError::Config(_) | HelpdeskError::Io(_) | HelpdeskError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl From<HelpdeskError> for ApiError {
    fn from(value: HelpdeskError) -> Self {
        Self(value)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self(HelpdeskError::Validation(rejection.body_text()))
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self(HelpdeskError::Validation(rejection.body_text()))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorBody { kind: self.0.label(), message: self.0.to_string() };

        if status.is_server_error() {
            error!(status = status.as_u16(), error_type = body.kind, error = %self.0, "request_failed");
        } else {
            warn!(status = status.as_u16(), error_type = body.kind, error = %self.0, "request_rejected");
        }

        (status, Json(body)).into_response()
    }
}
