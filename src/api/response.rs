//! Response types for the report API.
//!
//! This module defines the error body returned by every endpoint and the
//! mapping from [`ReportError`] to HTTP status codes.

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::error::{ErrorKind, ReportError};

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
#[derive(Debug)]
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// Creates a 400 response around `error`.
    pub fn bad_request(error: ApiError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error,
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (
            self.status,
            [(header::CONTENT_TYPE, "application/json")],
            Json(self.error),
        )
            .into_response()
    }
}

/// Maps an error kind to its HTTP status.
fn status_for(kind: ErrorKind) -> StatusCode {
    match kind {
        ErrorKind::Conflict => StatusCode::CONFLICT,
        ErrorKind::BadRequest => StatusCode::BAD_REQUEST,
        ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Returns the API code for an error.
fn code_for(error: &ReportError) -> &'static str {
    match error {
        ReportError::RepeatedAxes { .. } => "PARAMETERS_REPEATED",
        ReportError::EmptySelector { .. } => "EMPTY_SELECTOR",
        ReportError::EmptyResult | ReportError::NotFound { .. } | ReportError::NotFoundIn { .. } => {
            "NOT_FOUND"
        }
        ReportError::ProjectMismatch { .. }
        | ReportError::EmployeeMissing { .. }
        | ReportError::EmployeeMismatch { .. } => "PARAMETER_MISMATCH",
        ReportError::UnsupportedAxes { .. } => "UNSUPPORTED_AXES",
        ReportError::InvalidPeriod { .. } => "INVALID_PERIOD",
        ReportError::ConfigNotFound { .. } | ReportError::ConfigParseError { .. } => {
            "CONFIG_ERROR"
        }
        ReportError::DataIntegrity { .. } | ReportError::Store { .. } => "INTERNAL_ERROR",
    }
}

impl From<ReportError> for ApiErrorResponse {
    fn from(error: ReportError) -> Self {
        let status = status_for(error.kind());
        let code = code_for(&error);
        let error = match error.kind() {
            // The cause of an internal failure is logged by the handler, never returned.
            ErrorKind::Internal => ApiError::new(code, "Report could not be generated"),
            _ => ApiError::new(code, error.to_string()),
        };
        ApiErrorResponse { status, error }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Axis;

    #[test]
    fn test_api_error_serialization() {
        let error = ApiError::new("TEST_ERROR", "Test message");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"code\":\"TEST_ERROR\""));
        assert!(json.contains("\"message\":\"Test message\""));
        assert!(!json.contains("details"));
    }

    #[test]
    fn test_repeated_axes_is_conflict() {
        let response: ApiErrorResponse = ReportError::RepeatedAxes {
            first: Axis::Project,
            second: Axis::Project,
            third: Axis::Employee,
        }
        .into();
        assert_eq!(response.status, StatusCode::CONFLICT);
        assert_eq!(response.error.code, "PARAMETERS_REPEATED");
    }

    #[test]
    fn test_not_found_and_mismatch_share_status() {
        let not_found: ApiErrorResponse = ReportError::NotFoundIn {
            entity: Axis::Operation,
            id: 4,
            scope: Axis::Project,
            scope_id: 1,
        }
        .into();
        let mismatch: ApiErrorResponse = ReportError::ProjectMismatch {
            project_id: 1,
            operation_id: 7,
        }
        .into();

        assert_eq!(not_found.status, StatusCode::BAD_REQUEST);
        assert_eq!(mismatch.status, StatusCode::BAD_REQUEST);
        assert_eq!(not_found.error.code, "NOT_FOUND");
        assert_eq!(mismatch.error.code, "PARAMETER_MISMATCH");
        assert_eq!(
            not_found.error.message,
            "Operation with id: 4 not found in Project with id: 1"
        );
    }

    #[test]
    fn test_internal_errors_are_500() {
        let response: ApiErrorResponse = ReportError::Store {
            message: "connection reset".to_string(),
        }
        .into();
        assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(response.error.code, "INTERNAL_ERROR");
        assert_eq!(response.error.message, "Report could not be generated");
        assert!(response.error.details.is_none());
    }
}
