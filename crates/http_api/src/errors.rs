use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use cost_app::{ApiError, AppError};

/// JSON error body plus the status it is sent with.
#[derive(Debug)]
pub struct HttpError {
    status: StatusCode,
    body: ApiError,
}

impl HttpError {
    pub fn new(status: StatusCode, message: impl Into<String>, code: Option<String>) -> Self {
        let body = ApiError {
            status: status.as_u16(),
            message: message.into(),
            code,
        };
        Self { status, body }
    }

    pub fn not_found() -> Self {
        Self::new(StatusCode::NOT_FOUND, "not found", Some("not_found".to_string()))
    }

    pub fn invalid_origin(status: StatusCode, message: &str) -> Self {
        Self::new(status, message, Some("invalid_origin".to_string()))
    }
}

impl From<AppError> for HttpError {
    fn from(err: AppError) -> Self {
        if !matches!(err, AppError::InvalidInput(_) | AppError::NotOpen) {
            tracing::error!(error = %err, "request failed");
        }
        let body = ApiError::from(err);
        let status = StatusCode::from_u16(body.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        Self { status, body }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}
