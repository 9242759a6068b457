use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use clubdesk_core::{AppError, FieldViolation};
use serde::Serialize;
use ts_rs::TS;

/// One rejected form field.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/field-error-response.ts"
)]
pub struct FieldErrorResponse {
    field: String,
    message: String,
}

impl From<&FieldViolation> for FieldErrorResponse {
    fn from(value: &FieldViolation) -> Self {
        Self {
            field: value.field().to_owned(),
            message: value.message().to_owned(),
        }
    }
}

/// API error payload.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/error-response.ts"
)]
pub struct ErrorResponse {
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    fields: Option<Vec<FieldErrorResponse>>,
}

/// HTTP API error wrapper around core application errors.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(value: AppError) -> Self {
        Self(value)
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self.0 {
            AppError::Validation(_) | AppError::InvalidFields(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        // Conflict and field messages are shown to applicants as-is.
        let payload = match &self.0 {
            AppError::InvalidFields(violations) => ErrorResponse {
                message: self.0.to_string(),
                fields: Some(violations.iter().map(FieldErrorResponse::from).collect()),
            },
            AppError::Conflict(message) => ErrorResponse {
                message: message.clone(),
                fields: None,
            },
            other => ErrorResponse {
                message: other.to_string(),
                fields: None,
            },
        };

        (status, Json(payload)).into_response()
    }
}

/// Standard API result type.
pub type ApiResult<T> = Result<T, ApiError>;
