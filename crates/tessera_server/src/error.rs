//! Mapping from domain errors to HTTP responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::Serialize;
use tessera_admin::FieldErrors;
use tessera_error::{
    BuilderError, ConfigError, ContentError, HttpError, JsonError, NotifyError, TesseraError, TesseraErrorKind,
    ValidationError,
};
use tracing::{error, warn};

/// JSON error body: `{"success": false, "error": "...", "fields": {...}}`.
#[derive(Debug, Serialize)]
struct ErrorBody {
    success: bool,
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    fields: Option<FieldErrors>,
}

/// Error returned by every JSON handler.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
    fields: Option<FieldErrors>,
}

impl ApiError {
    /// Error with an explicit status.
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            fields: None,
        }
    }

    /// 400 with `message`.
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    /// 403 with `message`.
    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::new(StatusCode::FORBIDDEN, message)
    }

    /// 500 with `message`.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    /// 422 carrying per-field messages.
    pub fn unprocessable(fields: FieldErrors) -> Self {
        Self {
            status: StatusCode::UNPROCESSABLE_ENTITY,
            message: "Validation failed".to_string(),
            fields: Some(fields),
        }
    }

    /// Response status.
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Response message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            error!(status = %self.status, error = %self.message, "Request failed");
        } else {
            warn!(status = %self.status, error = %self.message, "Request rejected");
        }
        let body = ErrorBody {
            success: false,
            error: self.message,
            fields: self.fields,
        };
        (self.status, Json(body)).into_response()
    }
}

impl From<ContentError> for ApiError {
    fn from(err: ContentError) -> Self {
        if err.is_not_found() {
            Self::new(StatusCode::NOT_FOUND, err.kind.to_string())
        } else {
            Self::internal(err.kind.to_string())
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self::bad_request(err.message())
    }
}

impl From<NotifyError> for ApiError {
    fn from(err: NotifyError) -> Self {
        Self::internal(err.kind.to_string())
    }
}

impl From<JsonError> for ApiError {
    fn from(err: JsonError) -> Self {
        Self::internal(err.message)
    }
}

impl From<HttpError> for ApiError {
    fn from(err: HttpError) -> Self {
        Self::internal(err.message)
    }
}

impl From<ConfigError> for ApiError {
    fn from(err: ConfigError) -> Self {
        Self::internal(err.message)
    }
}

impl From<BuilderError> for ApiError {
    fn from(err: BuilderError) -> Self {
        Self::internal(err.kind().to_string())
    }
}

impl From<TesseraError> for ApiError {
    fn from(err: TesseraError) -> Self {
        match err.kind() {
            TesseraErrorKind::Content(e) => e.clone().into(),
            TesseraErrorKind::Validation(e) => e.clone().into(),
            TesseraErrorKind::Notify(e) => e.clone().into(),
            other => Self::internal(other.to_string()),
        }
    }
}

/// Result alias for JSON handlers.
pub type ApiResult<T> = Result<T, ApiError>;
